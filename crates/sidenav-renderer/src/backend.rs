//! Render backend trait for format-specific output.
//!
//! The renderer walks a [`SidebarView`] and calls into a backend for each
//! container, list and row. Backends only decide how those pieces are
//! written; ordering and nesting come from the view.

use crate::view::{Row, SidebarView};

/// Backend trait for format-specific rendering operations.
pub trait RenderBackend {
    /// Render the opening of the sidebar container.
    fn container_start(_view: &SidebarView, _out: &mut String) {}

    /// Render the closing of the sidebar container.
    fn container_end(_view: &SidebarView, _out: &mut String) {}

    /// Render the opening of a list.
    ///
    /// # Arguments
    ///
    /// * `level` - Nesting level of the list's rows (0 for the top level)
    /// * `dense` - Whether the view requested a compact top-level list
    /// * `out` - Output buffer to write to
    fn list_start(_level: usize, _dense: bool, _out: &mut String) {}

    /// Render the closing of a list.
    fn list_end(_level: usize, _out: &mut String) {}

    /// Render the opening of a row, including its label.
    fn row_start(row: &Row, out: &mut String);

    /// Render the closing of a row, after any nested list.
    fn row_end(_row: &Row, _out: &mut String) {}
}

/// Write `view` through backend `B`.
pub(crate) fn write_view<B: RenderBackend>(view: &SidebarView, out: &mut String) {
    B::container_start(view, out);
    write_list::<B>(&view.rows, 0, view.dense, out);
    B::container_end(view, out);
}

fn write_list<B: RenderBackend>(rows: &[Row], level: usize, dense: bool, out: &mut String) {
    B::list_start(level, dense, out);
    for row in rows {
        B::row_start(row, out);
        if row.has_children() {
            write_list::<B>(&row.children, level + 1, dense, out);
        }
        B::row_end(row, out);
    }
    B::list_end(level, out);
}
