//! `sidenav check` command implementation.

use clap::Args;
use sidenav_tree::{NavigationTree, TreeIssue};

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Fail when any issue is found.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, or if `--strict` is set and issues
    /// were found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let settings = self.source.cli_settings();

        let (config, tree) = self.source.load(&settings)?;
        let issues = tree.check(config.sidebar.depth.rendered_levels());

        output.info(&summary(&tree));
        if issues.is_empty() {
            output.success("No issues found");
            return Ok(());
        }

        output.issues(&issues);

        strict_result(&issues, self.strict)
    }
}

fn summary(tree: &NavigationTree) -> String {
    format!(
        "{} top-level entries, {} total, {} levels",
        tree.len(),
        tree.entry_count(),
        tree.depth()
    )
}

fn strict_result(issues: &[TreeIssue], strict: bool) -> Result<(), CliError> {
    if strict && !issues.is_empty() {
        return Err(CliError::Validation(format!(
            "{} issue(s) found in navigation",
            issues.len()
        )));
    }
    Ok(())
}
