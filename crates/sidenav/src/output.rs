//! Terminal output utilities.
//!
//! Status messages go to stderr with color; rendered sidebars go to stdout
//! untouched so they can be piped.

use std::io::Write;

use console::{Style, Term};
use sidenav_tree::TreeIssue;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print one warning line per navigation issue.
    pub(crate) fn issues(&self, issues: &[TreeIssue]) {
        for issue in issues {
            self.warning(&issue_line(issue));
        }
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

fn issue_line(issue: &TreeIssue) -> String {
    format!("warning: {issue}")
}

/// Write rendered content to stdout, ending with a newline.
pub(crate) fn write_stdout(content: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_issue_line() {
        let issue = TreeIssue::HiddenByDepth {
            path: "settings/notifications/email".to_owned(),
            level: 2,
        };

        assert_eq!(
            issue_line(&issue),
            "warning: entry 'settings/notifications/email' at level 2 is not rendered"
        );
    }
}
