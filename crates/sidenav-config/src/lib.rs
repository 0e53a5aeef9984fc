//! Configuration management for sidenav.
//!
//! Parses `sidenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [sidebar]
//! padding_left = 18
//! depth = "one-level"
//! class = "sidebar"
//! dense = true
//!
//! [navigation]
//! source = "nav.yaml"
//!
//! [output]
//! format = "html"
//! ```
//!
//! Instead of `source`, the tree can be given inline with `[[navigation.items]]`
//! tables, or `sample = "flat"` / `sample = "nested"` selects a built-in tree.
//! With none of the three the `nested` sample is used.
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` and `${VAR:-default}` are expanded in:
//! - `navigation.source`
//! - `sidebar.class`

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use sidenav_renderer::{DEFAULT_CLASS_NAME, DEFAULT_PADDING_LEFT, NestingDepth, SidebarOptions};
use sidenav_tree::{NavigationEntry, NavigationTree, Sample, TreeError};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation source file.
    pub source: Option<PathBuf>,
    /// Use a built-in sample tree.
    pub sample: Option<Sample>,
    /// Override nesting depth.
    pub depth: Option<NestingDepth>,
    /// Override top-level row padding.
    pub padding_left: Option<u16>,
    /// Override output format.
    pub format: Option<OutputFormat>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidenav.toml";

/// Largest accepted `sidebar.padding_left`.
const MAX_PADDING_LEFT: u16 = 512;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sidebar rendering configuration.
    pub sidebar: SidebarConfig,
    /// Navigation data configuration (source path is a raw string from TOML).
    navigation: NavigationConfigRaw,
    /// Output configuration.
    pub output: OutputConfig,

    /// Resolved navigation source (set after loading).
    #[serde(skip)]
    pub navigation_resolved: NavigationSource,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Sidebar rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Left padding of top-level rows, in pixels.
    pub padding_left: u16,
    /// How many levels of children to draw.
    pub depth: NestingDepth,
    /// Container class name.
    pub class: String,
    /// Compact top-level list.
    pub dense: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            padding_left: DEFAULT_PADDING_LEFT,
            depth: NestingDepth::default(),
            class: DEFAULT_CLASS_NAME.to_owned(),
            dense: true,
        }
    }
}

/// Raw navigation configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NavigationConfigRaw {
    source: Option<String>,
    sample: Option<String>,
    items: Option<Vec<NavigationEntry>>,
}

/// Where the navigation tree comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationSource {
    /// Built-in sample tree.
    Sample(Sample),
    /// Navigation file (absolute or relative to the working directory).
    File(PathBuf),
    /// Entries given inline in the config file.
    Inline(NavigationTree),
}

impl Default for NavigationSource {
    fn default() -> Self {
        Self::Sample(Sample::default())
    }
}

impl NavigationSource {
    /// Produce the navigation tree.
    ///
    /// # Errors
    ///
    /// Returns an error if a navigation file cannot be read or parsed.
    pub fn load(&self) -> Result<NavigationTree, TreeError> {
        match self {
            Self::Sample(sample) => Ok(sample.tree()),
            Self::File(path) => NavigationTree::load(path),
            Self::Inline(tree) => Ok(tree.clone()),
        }
    }
}

impl fmt::Display for NavigationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample(sample) => write!(f, "built-in sample '{sample}'"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline(_) => f.write_str("inline [navigation] items"),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,
}

/// Rendered output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment.
    #[default]
    Html,
    /// Indented text outline.
    Text,
    /// JSON of the rendered view.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}' (expected 'html', 'text' or 'json')"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "html",
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`navigation.source`").
        field: String,
        /// Error message (e.g., "${`NAV_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered configuration file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate_sidebar()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Relative paths are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.resolve_navigation(base_dir)?;
        config.validate()?;

        Ok(config)
    }

    /// Renderer options derived from the `[sidebar]` section.
    #[must_use]
    pub fn sidebar_options(&self) -> SidebarOptions {
        SidebarOptions {
            padding_left: self.sidebar.padding_left,
            depth: self.sidebar.depth,
            class_name: self.sidebar.class.clone(),
            dense: self.sidebar.dense,
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.navigation_resolved = NavigationSource::File(source.clone());
        } else if let Some(sample) = settings.sample {
            self.navigation_resolved = NavigationSource::Sample(sample);
        }
        if let Some(depth) = settings.depth {
            self.sidebar.depth = depth;
        }
        if let Some(padding_left) = settings.padding_left {
            self.sidebar.padding_left = padding_left;
        }
        if let Some(format) = settings.format {
            self.output.format = format;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));

        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_sidebar()?;
        self.validate_navigation()?;
        Ok(())
    }

    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.sidebar.class, "sidebar.class")?;

        if self.sidebar.padding_left > MAX_PADDING_LEFT {
            return Err(ConfigError::Validation(format!(
                "sidebar.padding_left cannot exceed {MAX_PADDING_LEFT}"
            )));
        }

        Ok(())
    }

    fn validate_navigation(&self) -> Result<(), ConfigError> {
        let nav = &self.navigation;
        let set = [nav.source.is_some(), nav.sample.is_some(), nav.items.is_some()]
            .into_iter()
            .filter(|&is_set| is_set)
            .count();
        if set > 1 {
            return Err(ConfigError::Validation(
                "[navigation] accepts only one of source, sample or items".to_owned(),
            ));
        }

        if let Some(source) = &nav.source {
            require_non_empty(source, "navigation.source")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.sidebar.class = expand::expand_env(&self.sidebar.class, "sidebar.class")?;

        if let Some(ref source) = self.navigation.source {
            self.navigation.source = Some(expand::expand_env(source, "navigation.source")?);
        }

        Ok(())
    }

    /// Resolve the navigation source, with paths relative to the config directory.
    fn resolve_navigation(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let nav = &self.navigation;

        self.navigation_resolved = if let Some(source) = &nav.source {
            NavigationSource::File(config_dir.join(source))
        } else if let Some(sample) = &nav.sample {
            let sample = sample.parse().map_err(|e: String| {
                ConfigError::Validation(format!("navigation.sample: {e}"))
            })?;
            NavigationSource::Sample(sample)
        } else if let Some(items) = &nav.items {
            NavigationSource::Inline(NavigationTree::new(items.clone()))
        } else {
            NavigationSource::default()
        };

        Ok(())
    }
}
