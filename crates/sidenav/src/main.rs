//! sidenav CLI - navigation sidebar renderer.
//!
//! Provides commands for:
//! - `render`: Render the sidebar to stdout
//! - `check`: Report navigation data problems

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs};
use output::Output;

/// sidenav - navigation sidebar renderer.
#[derive(Parser)]
#[command(name = "sidenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sidebar.
    Render(RenderArgs),
    /// Check navigation data for problems.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.source.verbose,
            Self::Check(args) => args.source.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag_detected() {
        let cli = Cli::try_parse_from(["sidenav", "render", "--verbose"]).unwrap();

        assert!(cli.command.verbose());
    }

    #[test]
    fn test_source_and_sample_conflict() {
        let result = Cli::try_parse_from([
            "sidenav", "render", "--source", "nav.yaml", "--sample", "flat",
        ]);

        assert!(result.is_err());
    }
}
