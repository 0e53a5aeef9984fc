//! Plain-text outline backend.
//!
//! One line per row, indented two spaces per nesting level.

use crate::backend::RenderBackend;
use crate::view::Row;

/// Text render backend.
pub struct TextBackend;

impl RenderBackend for TextBackend {
    fn row_start(row: &Row, out: &mut String) {
        for _ in 0..row.level {
            out.push_str("  ");
        }
        out.push_str(&row.label);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SidebarRenderer;
    use pretty_assertions::assert_eq;
    use sidenav_tree::{NavigationEntry, samples};

    #[test]
    fn test_outline_of_nested_sample() {
        let tree = samples::nested();

        let text = SidebarRenderer::<TextBackend>::new().render(tree.entries());

        assert_eq!(
            text,
            "Home\nBilling\n  Statements\n  Reports\nSettings\n  Profile\n  Insurance\n  Notifications\n"
        );
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        let text = SidebarRenderer::<TextBackend>::new().render(&[]);

        assert_eq!(text, "");
    }

    #[test]
    fn test_empty_label_renders_blank_line() {
        let text = SidebarRenderer::<TextBackend>::new().render(&[NavigationEntry::new("x", "")]);

        assert_eq!(text, "\n");
    }
}
