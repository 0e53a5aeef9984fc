//! Immutable navigation tree.

use serde::Serialize;

use crate::check::{self, TreeIssue};
use crate::entry::NavigationEntry;

/// Ordered, immutable sequence of top-level navigation entries.
///
/// The tree exposes read-only accessors only. Build a new tree rather than
/// mutating an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    entries: Vec<NavigationEntry>,
}

impl NavigationTree {
    /// Create a tree from top-level entries in display order.
    #[must_use]
    pub fn new(entries: Vec<NavigationEntry>) -> Self {
        Self { entries }
    }

    /// Top-level entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Iterate top-level entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, NavigationEntry> {
        self.entries.iter()
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of populated levels.
    ///
    /// An empty tree has depth 0, a flat list depth 1, a list whose entries
    /// have children depth 2, and so on.
    #[must_use]
    pub fn depth(&self) -> usize {
        fn level_depth(entries: &[NavigationEntry]) -> usize {
            entries
                .iter()
                .map(|entry| 1 + level_depth(&entry.children))
                .max()
                .unwrap_or(0)
        }

        level_depth(&self.entries)
    }

    /// Total number of entries at every level.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        fn count(entries: &[NavigationEntry]) -> usize {
            entries.iter().map(|e| 1 + count(&e.children)).sum()
        }

        count(&self.entries)
    }

    /// Report data problems that would degrade the rendered sidebar.
    ///
    /// `rendered_levels` is the number of levels the renderer draws
    /// (`Some(2)` for top level plus one level of children, `None` when
    /// unlimited). Entries below that level are reported as hidden.
    #[must_use]
    pub fn check(&self, rendered_levels: Option<usize>) -> Vec<TreeIssue> {
        check::check_entries(&self.entries, rendered_levels)
    }
}

impl From<Vec<NavigationEntry>> for NavigationTree {
    fn from(entries: Vec<NavigationEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a NavigationTree {
    type Item = &'a NavigationEntry;
    type IntoIter = std::slice::Iter<'a, NavigationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
