//! Rendered visual tree.

use sidenav_tree::DisplayAttrs;

/// Rendered sidebar: a list container and its rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SidebarView {
    /// Class name of the container.
    pub class_name: String,
    /// Whether the top-level list is compact.
    pub dense: bool,
    /// Top-level rows in display order.
    pub rows: Vec<Row>,
}

/// One rendered list row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// Rendering key (the entry name).
    pub key: String,
    /// Displayed text.
    pub label: String,
    /// Nesting level, 0 for top-level rows.
    pub level: usize,
    /// Left padding in pixels. Set on top-level rows only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub padding_left: Option<u16>,
    /// Pass-through display attributes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "DisplayAttrs::is_empty"))]
    pub attrs: DisplayAttrs,
    /// Nested rows drawn directly beneath this row.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Row>,
}

impl SidebarView {
    /// Number of top-level rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels of every row, depth-first in display order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        fn collect<'a>(rows: &'a [Row], out: &mut Vec<&'a str>) {
            for row in rows {
                out.push(&row.label);
                collect(&row.children, out);
            }
        }

        let mut out = Vec::new();
        collect(&self.rows, &mut out);
        out
    }
}

impl Row {
    /// Whether a nested list is drawn under this row.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
