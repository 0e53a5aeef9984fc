//! Navigation entry and display attribute types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of the sidebar navigation data.
///
/// `name` is the stable rendering key and should be unique among siblings.
/// A missing `label` deserializes to an empty string, which renders as an
/// empty row rather than failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Short identifier, unique within its sibling sequence.
    pub name: String,
    /// Human-readable display text.
    #[serde(default)]
    pub label: String,
    /// Nested entries, in display order. Empty means leaf.
    #[serde(default, alias = "items", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationEntry>,
    /// Pass-through display attributes for the rendered row.
    #[serde(default, skip_serializing_if = "DisplayAttrs::is_empty")]
    pub attrs: DisplayAttrs,
}

impl NavigationEntry {
    /// Create a leaf entry.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            children: Vec::new(),
            attrs: DisplayAttrs::default(),
        }
    }

    /// Replace the children of this entry.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NavigationEntry>) -> Self {
        self.children = children;
        self
    }

    /// Add a pass-through display attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Whether this entry has no children to render.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Explicit bag of display attributes passed through to a rendered row.
///
/// Keys are kept sorted so rendering is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayAttrs(BTreeMap<String, String>);

impl DisplayAttrs {
    /// Create an empty attribute bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DisplayAttrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Check whether `name` is usable as an HTML attribute name.
///
/// Accepts ASCII letters, digits, `-`, `_`, `:` and `.`, and must start with a
/// letter or underscore.
///
/// ```
/// use sidenav_tree::is_valid_attr_name;
///
/// assert!(is_valid_attr_name("data-id"));
/// assert!(!is_valid_attr_name("on click"));
/// assert!(!is_valid_attr_name(""));
/// ```
#[must_use]
pub fn is_valid_attr_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}
