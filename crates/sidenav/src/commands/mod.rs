//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use sidenav_config::{CliSettings, Config};
use sidenav_renderer::NestingDepth;
use sidenav_tree::{NavigationTree, Sample};

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Arguments selecting the navigation data, shared by all commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long, env = "SIDENAV_CONFIG")]
    config: Option<PathBuf>,

    /// Navigation file: .toml, .yaml/.yml or .json (overrides config).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Use a built-in tree: flat or nested (overrides config).
    #[arg(long, conflicts_with = "source")]
    sample: Option<Sample>,

    /// Nesting depth: one-level or unlimited (overrides config).
    #[arg(short, long)]
    depth: Option<NestingDepth>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// CLI settings carrying the source-related overrides.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            source: self.source.clone(),
            sample: self.sample,
            depth: self.depth,
            ..CliSettings::default()
        }
    }

    /// Load configuration with `settings` applied, then load the tree.
    fn load(&self, settings: &CliSettings) -> Result<(Config, NavigationTree), CliError> {
        let config = Config::load(self.config.as_deref(), Some(settings))?;
        tracing::info!(source = %config.navigation_resolved, "Loading navigation");

        let tree = config.navigation_resolved.load()?;
        tracing::info!(
            entries = tree.len(),
            depth = tree.depth(),
            "Navigation loaded"
        );

        Ok((config, tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sidenav_config::NavigationSource;
    use std::fs;

    fn args_for(config: PathBuf) -> SourceArgs {
        SourceArgs {
            config: Some(config),
            source: None,
            sample: None,
            depth: None,
            verbose: false,
        }
    }

    fn write_project(dir: &std::path::Path) -> PathBuf {
        let config_path = dir.join("sidenav.toml");
        fs::write(
            &config_path,
            "[sidebar]\ndepth = \"unlimited\"\n\n[navigation]\nsource = \"nav.yaml\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("nav.yaml"),
            "- name: home\n  label: Home\n- name: billing\n  label: Billing\n  children:\n    - name: reports\n      label: Reports\n",
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_load_reads_source_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(write_project(dir.path()));

        let (config, tree) = args.load(&args.cli_settings()).unwrap();

        assert_eq!(
            config.navigation_resolved,
            NavigationSource::File(dir.path().join("nav.yaml"))
        );
        assert_eq!(config.sidebar.depth, NestingDepth::Unlimited);
        let labels: Vec<_> = tree.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Billing"]);
        assert_eq!(tree.entry_count(), 3);
    }

    #[test]
    fn test_load_cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args_for(write_project(dir.path()));
        args.sample = Some(Sample::Flat);
        args.depth = Some(NestingDepth::OneLevel);

        let (config, tree) = args.load(&args.cli_settings()).unwrap();

        assert_eq!(config.navigation_resolved, NavigationSource::Sample(Sample::Flat));
        assert_eq!(config.sidebar.depth, NestingDepth::OneLevel);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_load_missing_navigation_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sidenav.toml");
        fs::write(&config_path, "[navigation]\nsource = \"missing.yaml\"\n").unwrap();
        let args = args_for(config_path);

        let err = args.load(&args.cli_settings()).unwrap_err();

        assert!(matches!(err, CliError::Tree(_)));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
