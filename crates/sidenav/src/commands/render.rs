//! `sidenav render` command implementation.

use clap::Args;
use sidenav_config::{Config, OutputFormat};
use sidenav_renderer::{HtmlBackend, SidebarRenderer, TextBackend};
use sidenav_tree::NavigationTree;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::write_stdout;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format: html, text or json (overrides config).
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Left padding of top-level rows in pixels (overrides config).
    #[arg(long)]
    padding_left: Option<u16>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or navigation loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut settings = self.source.cli_settings();
        settings.format = self.format;
        settings.padding_left = self.padding_left;

        let (config, tree) = self.source.load(&settings)?;
        let rendered = render(&config, &tree)?;

        write_stdout(&rendered)?;
        Ok(())
    }
}

/// Render `tree` in the configured format.
fn render(config: &Config, tree: &NavigationTree) -> Result<String, CliError> {
    let options = config.sidebar_options();

    let rendered = match config.output.format {
        OutputFormat::Html => {
            SidebarRenderer::<HtmlBackend>::with_options(options).render(tree.entries())
        }
        OutputFormat::Text => {
            SidebarRenderer::<TextBackend>::with_options(options).render(tree.entries())
        }
        OutputFormat::Json => {
            let view = SidebarRenderer::<HtmlBackend>::with_options(options).build(tree.entries());
            serde_json::to_string_pretty(&view)?
        }
    };

    Ok(rendered)
}
