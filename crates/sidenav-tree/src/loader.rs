//! Navigation file loading.
//!
//! Supported documents:
//! - TOML: a table with an `items` array of tables (`[[items]]`).
//! - YAML and JSON: either a bare sequence of entries or a mapping with an
//!   `items` key.
//!
//! Nested entries use `children` (or `items`) inside each entry.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::entry::NavigationEntry;
use crate::tree::NavigationTree;

/// Error returned when a navigation file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// I/O error reading the navigation file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// File extension does not map to a known format.
    #[error("Unsupported navigation file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Navigation file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationFormat {
    Toml,
    Yaml,
    Json,
}

impl NavigationFormat {
    /// Detect the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for NavigationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        })
    }
}

/// Table form: `items = [...]`.
#[derive(Deserialize)]
struct ItemsTable {
    #[serde(default)]
    items: Vec<NavigationEntry>,
}

impl NavigationTree {
    /// Parse a tree from TOML (`[[items]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, TreeError> {
        let table: ItemsTable = toml::from_str(content)?;
        Ok(Self::new(table.items))
    }

    /// Parse a tree from YAML. Empty content yields an empty tree.
    pub fn from_yaml_str(content: &str) -> Result<Self, TreeError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        // The shape is read first so the entries are then deserialized from
        // the text itself and errors keep their location.
        let shape: serde_yaml::Value = serde_yaml::from_str(trimmed)?;
        let items = if shape.is_sequence() {
            serde_yaml::from_str(trimmed)?
        } else {
            serde_yaml::from_str::<ItemsTable>(trimmed)?.items
        };
        Ok(Self::new(items))
    }

    /// Parse a tree from JSON.
    pub fn from_json_str(content: &str) -> Result<Self, TreeError> {
        let shape: serde_json::Value = serde_json::from_str(content)?;
        let items = if shape.is_array() {
            serde_json::from_str(content)?
        } else {
            serde_json::from_str::<ItemsTable>(content)?.items
        };
        Ok(Self::new(items))
    }

    /// Parse a tree in the given format.
    pub fn parse(content: &str, format: NavigationFormat) -> Result<Self, TreeError> {
        match format {
            NavigationFormat::Toml => Self::from_toml_str(content),
            NavigationFormat::Yaml => Self::from_yaml_str(content),
            NavigationFormat::Json => Self::from_json_str(content),
        }
    }

    /// Load a tree from a navigation file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let format = NavigationFormat::from_path(path)
            .ok_or_else(|| TreeError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let tree = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            %format,
            entries = tree.entry_count(),
            "Loaded navigation tree"
        );
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn labels(tree: &NavigationTree) -> Vec<&str> {
        tree.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            NavigationFormat::from_path(Path::new("nav.toml")),
            Some(NavigationFormat::Toml)
        );
        assert_eq!(
            NavigationFormat::from_path(Path::new("nav.YML")),
            Some(NavigationFormat::Yaml)
        );
        assert_eq!(
            NavigationFormat::from_path(Path::new("dir/nav.json")),
            Some(NavigationFormat::Json)
        );
        assert_eq!(NavigationFormat::from_path(Path::new("nav.txt")), None);
        assert_eq!(NavigationFormat::from_path(Path::new("nav")), None);
    }

    #[test]
    fn test_toml_items_with_children_and_attrs() {
        let toml = r#"
[[items]]
name = "home"
label = "Home"

[[items]]
name = "billing"
label = "Billing"

[items.attrs]
title = "Billing overview"

[[items.children]]
name = "statements"
label = "Statements"

[[items.children]]
name = "reports"
label = "Reports"
"#;

        let tree = NavigationTree::from_toml_str(toml).unwrap();

        assert_eq!(labels(&tree), vec!["Home", "Billing"]);
        let billing = &tree.entries()[1];
        assert_eq!(billing.attrs.get("title"), Some("Billing overview"));
        let children: Vec<_> = billing.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(children, vec!["statements", "reports"]);
    }

    #[test]
    fn test_toml_empty_document_is_empty_tree() {
        let tree = NavigationTree::from_toml_str("").unwrap();

        assert!(tree.is_empty());
    }

    #[test]
    fn test_yaml_bare_sequence_with_items_alias() {
        let yaml = "
- name: home
  label: Home
- name: billing
  label: Billing
  items:
    - name: statements
      label: Statements
";

        let tree = NavigationTree::from_yaml_str(yaml).unwrap();

        assert_eq!(labels(&tree), vec!["Home", "Billing"]);
        assert_eq!(tree.entries()[1].children[0].label, "Statements");
    }

    #[test]
    fn test_yaml_items_table() {
        let yaml = "items:\n  - name: home\n    label: Home\n";

        let tree = NavigationTree::from_yaml_str(yaml).unwrap();

        assert_eq!(labels(&tree), vec!["Home"]);
    }

    #[test]
    fn test_yaml_empty_content_is_empty_tree() {
        let tree = NavigationTree::from_yaml_str("  \n").unwrap();

        assert!(tree.is_empty());
    }

    #[test]
    fn test_yaml_missing_label_renders_degraded() {
        let tree = NavigationTree::from_yaml_str("- name: home\n").unwrap();

        assert_eq!(tree.entries()[0].label, "");
    }

    #[test]
    fn test_json_bare_sequence() {
        let json = r#"[{"name": "home", "label": "Home"}]"#;

        let tree = NavigationTree::from_json_str(json).unwrap();

        assert_eq!(labels(&tree), vec!["Home"]);
    }

    #[test]
    fn test_json_invalid_is_error() {
        let result = NavigationTree::from_json_str("{not json");

        assert!(matches!(result, Err(TreeError::Json(_))));
    }

    #[test]
    fn test_yaml_bad_label_reports_location() {
        let err = NavigationTree::from_yaml_str("- name: home\n  label: [1, 2]\n").unwrap_err();

        let message = err.to_string();
        assert!(matches!(err, TreeError::Yaml(_)));
        assert!(message.contains("invalid type"), "{message}");
        assert!(message.contains("line 2"), "{message}");
    }

    #[test]
    fn test_yaml_items_table_bad_entry_reports_location() {
        let err = NavigationTree::from_yaml_str("items:\n  - label: Home\n").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("missing field `name`"), "{message}");
    }

    #[test]
    fn test_json_children_and_items_is_duplicate_field() {
        let json = r#"[{"name": "a", "children": [], "items": []}]"#;

        let err = NavigationTree::from_json_str(json).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("duplicate field"), "{message}");
        assert!(message.contains("line 1"), "{message}");
    }

    #[test]
    fn test_json_items_table() {
        let json = r#"{"items": [{"name": "home", "label": "Home"}]}"#;

        let tree = NavigationTree::from_json_str(json).unwrap();

        assert_eq!(labels(&tree), vec!["Home"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.yaml");
        fs::write(&path, "- name: home\n  label: Home\n").unwrap();

        let tree = NavigationTree::load(&path).unwrap();

        assert_eq!(labels(&tree), vec!["Home"]);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.txt");
        fs::write(&path, "home").unwrap();

        let err = NavigationTree::load(&path).unwrap_err();

        assert!(matches!(err, TreeError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = NavigationTree::load(&path).unwrap_err();

        assert!(matches!(err, TreeError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
