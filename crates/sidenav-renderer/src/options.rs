//! Renderer options.

use std::fmt;
use std::str::FromStr;

/// Left padding applied to every top-level row, in pixels.
pub const DEFAULT_PADDING_LEFT: u16 = 18;

/// Class name of the sidebar container.
pub const DEFAULT_CLASS_NAME: &str = "sidebar";

/// How many levels of children the renderer expands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NestingDepth {
    /// Top-level rows plus one nested list of their children.
    ///
    /// Grandchildren are not drawn.
    #[default]
    OneLevel,
    /// Every level is drawn.
    Unlimited,
}

impl NestingDepth {
    /// Number of levels drawn, counting the top level as 1.
    ///
    /// Returns `None` when unlimited.
    #[must_use]
    pub fn rendered_levels(self) -> Option<usize> {
        match self {
            Self::OneLevel => Some(2),
            Self::Unlimited => None,
        }
    }

    /// Whether children at `level` (top level is 0) are expanded.
    #[must_use]
    pub(crate) fn expands(self, level: usize) -> bool {
        match self {
            Self::OneLevel => level == 0,
            Self::Unlimited => true,
        }
    }
}

impl FromStr for NestingDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-level" => Ok(Self::OneLevel),
            "unlimited" => Ok(Self::Unlimited),
            other => Err(format!(
                "unknown depth '{other}' (expected 'one-level' or 'unlimited')"
            )),
        }
    }
}

impl fmt::Display for NestingDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneLevel => "one-level",
            Self::Unlimited => "unlimited",
        })
    }
}

/// Options controlling the rendered view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarOptions {
    /// Left padding of top-level rows, in pixels.
    pub padding_left: u16,
    /// Nesting depth to expand.
    pub depth: NestingDepth,
    /// Class name of the sidebar container.
    pub class_name: String,
    /// Render the top-level list in compact form.
    pub dense: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            padding_left: DEFAULT_PADDING_LEFT,
            depth: NestingDepth::default(),
            class_name: DEFAULT_CLASS_NAME.to_owned(),
            dense: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SidebarOptions::default();

        assert_eq!(options.padding_left, 18);
        assert_eq!(options.depth, NestingDepth::OneLevel);
        assert_eq!(options.class_name, "sidebar");
        assert!(options.dense);
    }

    #[test]
    fn test_depth_from_str() {
        assert_eq!("one-level".parse::<NestingDepth>(), Ok(NestingDepth::OneLevel));
        assert_eq!("unlimited".parse::<NestingDepth>(), Ok(NestingDepth::Unlimited));
        assert!("two".parse::<NestingDepth>().is_err());
    }

    #[test]
    fn test_rendered_levels() {
        assert_eq!(NestingDepth::OneLevel.rendered_levels(), Some(2));
        assert_eq!(NestingDepth::Unlimited.rendered_levels(), None);
    }

    #[test]
    fn test_one_level_expands_top_level_only() {
        assert!(NestingDepth::OneLevel.expands(0));
        assert!(!NestingDepth::OneLevel.expands(1));
        assert!(NestingDepth::Unlimited.expands(5));
    }
}
