//! Built-in navigation data.
//!
//! Two shapes: a flat three-item list, and a deep variant whose `settings`
//! branch nests four levels. With the default renderer depth only the first
//! two levels of the deep variant are drawn.

use std::fmt;
use std::str::FromStr;

use crate::{NavigationEntry, NavigationTree};

/// Named built-in tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sample {
    Flat,
    #[default]
    Nested,
}

impl Sample {
    /// Build the tree for this sample.
    #[must_use]
    pub fn tree(self) -> NavigationTree {
        match self {
            Self::Flat => flat(),
            Self::Nested => nested(),
        }
    }
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "nested" => Ok(Self::Nested),
            other => Err(format!(
                "unknown sample '{other}' (expected 'flat' or 'nested')"
            )),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "flat",
            Self::Nested => "nested",
        })
    }
}

/// Flat list: Home, Billing, Settings.
#[must_use]
pub fn flat() -> NavigationTree {
    NavigationTree::new(vec![
        NavigationEntry::new("home", "Home"),
        NavigationEntry::new("billing", "Billing"),
        NavigationEntry::new("settings", "Settings"),
    ])
}

/// Deep variant with nested billing and settings branches.
#[must_use]
pub fn nested() -> NavigationTree {
    NavigationTree::new(vec![
        NavigationEntry::new("home", "Home"),
        NavigationEntry::new("billing", "Billing").with_children(vec![
            NavigationEntry::new("statements", "Statements"),
            NavigationEntry::new("reports", "Reports"),
        ]),
        NavigationEntry::new("settings", "Settings").with_children(vec![
            NavigationEntry::new("profile", "Profile"),
            NavigationEntry::new("insurance", "Insurance"),
            NavigationEntry::new("notifications", "Notifications").with_children(vec![
                NavigationEntry::new("email", "Email"),
                NavigationEntry::new("desktop", "Desktop").with_children(vec![
                    NavigationEntry::new("schedule", "Schedule"),
                    NavigationEntry::new("frequency", "Frequency"),
                ]),
                NavigationEntry::new("sms", "SMS"),
            ]),
        ]),
    ])
}
