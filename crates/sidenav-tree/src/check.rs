//! Tree validation.
//!
//! Nothing here is fatal: the renderer draws whatever it is given. Issues
//! describe where the drawn sidebar will differ from what the data suggests.

use std::collections::HashSet;
use std::fmt;

use crate::entry::{NavigationEntry, is_valid_attr_name};

/// A data problem found by [`NavigationTree::check`](crate::NavigationTree::check).
///
/// Paths are entry names joined with `/` from the top level down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeIssue {
    /// Two siblings share a name; the rendering key is ambiguous.
    DuplicateName {
        /// Path of the parent entry (empty for the top level).
        parent: String,
        name: String,
    },
    /// Entry has an empty name.
    EmptyName { path: String },
    /// Entry has an empty label and renders as a blank row.
    EmptyLabel { path: String },
    /// Attribute name cannot be emitted and is skipped when rendering.
    InvalidAttribute { path: String, attr: String },
    /// Entry sits below the deepest rendered level and is not drawn.
    HiddenByDepth { path: String, level: usize },
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { parent, name } if parent.is_empty() => {
                write!(f, "duplicate name '{name}' at top level")
            }
            Self::DuplicateName { parent, name } => {
                write!(f, "duplicate name '{name}' under '{parent}'")
            }
            Self::EmptyName { path } => write!(f, "entry '{path}' has an empty name"),
            Self::EmptyLabel { path } => write!(f, "entry '{path}' has an empty label"),
            Self::InvalidAttribute { path, attr } => {
                write!(f, "entry '{path}' has invalid attribute name '{attr}'")
            }
            Self::HiddenByDepth { path, level } => {
                write!(f, "entry '{path}' at level {level} is not rendered")
            }
        }
    }
}

pub(crate) fn check_entries(
    entries: &[NavigationEntry],
    rendered_levels: Option<usize>,
) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    walk(entries, "", 1, rendered_levels, &mut issues);
    issues
}

fn walk(
    entries: &[NavigationEntry],
    parent: &str,
    level: usize,
    rendered_levels: Option<usize>,
    issues: &mut Vec<TreeIssue>,
) {
    let mut seen = HashSet::new();

    for entry in entries {
        let path = if parent.is_empty() {
            entry.name.clone()
        } else {
            format!("{parent}/{}", entry.name)
        };

        // Report the subtree root only; its descendants are hidden with it.
        if rendered_levels.is_some_and(|max| level > max) {
            issues.push(TreeIssue::HiddenByDepth { path, level });
            continue;
        }

        if entry.name.is_empty() {
            issues.push(TreeIssue::EmptyName { path: path.clone() });
        } else if !seen.insert(entry.name.as_str()) {
            issues.push(TreeIssue::DuplicateName {
                parent: parent.to_owned(),
                name: entry.name.clone(),
            });
        }

        if entry.label.is_empty() {
            issues.push(TreeIssue::EmptyLabel { path: path.clone() });
        }

        for (attr, _) in entry.attrs.iter() {
            if !is_valid_attr_name(attr) {
                issues.push(TreeIssue::InvalidAttribute {
                    path: path.clone(),
                    attr: attr.to_owned(),
                });
            }
        }

        walk(&entry.children, &path, level + 1, rendered_levels, issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NavigationTree, samples};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_tree_has_no_issues() {
        let tree = samples::flat();

        assert!(tree.check(Some(2)).is_empty());
    }

    #[test]
    fn test_duplicate_top_level_name() {
        let tree = NavigationTree::new(vec![
            NavigationEntry::new("home", "Home"),
            NavigationEntry::new("home", "Home again"),
        ]);

        let issues = tree.check(None);

        assert_eq!(
            issues,
            vec![TreeIssue::DuplicateName {
                parent: String::new(),
                name: "home".to_owned(),
            }]
        );
        assert_eq!(issues[0].to_string(), "duplicate name 'home' at top level");
    }

    #[test]
    fn test_same_name_under_different_parents_is_fine() {
        let tree = NavigationTree::new(vec![
            NavigationEntry::new("a", "A").with_children(vec![NavigationEntry::new("x", "X")]),
            NavigationEntry::new("b", "B").with_children(vec![NavigationEntry::new("x", "X")]),
        ]);

        assert!(tree.check(None).is_empty());
    }

    #[test]
    fn test_duplicate_child_name_reports_parent() {
        let tree = NavigationTree::new(vec![NavigationEntry::new("billing", "Billing")
            .with_children(vec![
                NavigationEntry::new("reports", "Reports"),
                NavigationEntry::new("reports", "Reports"),
            ])]);

        let issues = tree.check(None);

        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "duplicate name 'reports' under 'billing'"
        );
    }

    #[test]
    fn test_empty_name_and_label() {
        let tree = NavigationTree::new(vec![NavigationEntry::new("", "")]);

        let issues = tree.check(None);

        assert_eq!(
            issues,
            vec![
                TreeIssue::EmptyName {
                    path: String::new()
                },
                TreeIssue::EmptyLabel {
                    path: String::new()
                },
            ]
        );
    }

    #[test]
    fn test_invalid_attribute_name() {
        let tree = NavigationTree::new(vec![
            NavigationEntry::new("home", "Home").with_attr("on click", "x"),
        ]);

        let issues = tree.check(None);

        assert_eq!(
            issues,
            vec![TreeIssue::InvalidAttribute {
                path: "home".to_owned(),
                attr: "on click".to_owned(),
            }]
        );
    }

    #[test]
    fn test_nested_sample_reports_hidden_subtrees() {
        let tree = samples::nested();

        let issues = tree.check(Some(2));

        let hidden: Vec<_> = issues
            .iter()
            .map(|issue| match issue {
                TreeIssue::HiddenByDepth { path, level } => (path.as_str(), *level),
                other => panic!("unexpected issue: {other}"),
            })
            .collect();
        assert_eq!(
            hidden,
            vec![
                ("settings/notifications/email", 3),
                ("settings/notifications/desktop", 3),
                ("settings/notifications/sms", 3),
            ]
        );
    }

    #[test]
    fn test_unlimited_depth_hides_nothing() {
        let tree = samples::nested();

        assert!(tree.check(None).is_empty());
    }
}
