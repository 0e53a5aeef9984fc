//! Sidebar renderer generic over the output backend.

use std::marker::PhantomData;

use sidenav_tree::NavigationEntry;

use crate::backend::{RenderBackend, write_view};
use crate::options::{NestingDepth, SidebarOptions};
use crate::view::{Row, SidebarView};

/// Renders navigation entries into a sidebar.
///
/// Each top-level entry becomes a row showing its label, padded by
/// [`SidebarOptions::padding_left`]. An entry with children gets a nested
/// list of child rows directly beneath it. With [`NestingDepth::OneLevel`]
/// the children's own children are not drawn.
///
/// No validation is performed: an empty label renders as an empty row.
pub struct SidebarRenderer<B: RenderBackend> {
    options: SidebarOptions,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> SidebarRenderer<B> {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SidebarOptions::default())
    }

    /// Create a renderer with the given options.
    #[must_use]
    pub fn with_options(options: SidebarOptions) -> Self {
        Self {
            options,
            _backend: PhantomData,
        }
    }

    /// Set the nesting depth.
    #[must_use]
    pub fn with_depth(mut self, depth: NestingDepth) -> Self {
        self.options.depth = depth;
        self
    }

    /// Set the left padding of top-level rows.
    #[must_use]
    pub fn with_padding_left(mut self, padding_left: u16) -> Self {
        self.options.padding_left = padding_left;
        self
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    /// Build the visual tree for `entries`.
    #[must_use]
    pub fn build(&self, entries: &[NavigationEntry]) -> SidebarView {
        SidebarView {
            class_name: self.options.class_name.clone(),
            dense: self.options.dense,
            rows: self.build_rows(entries, 0),
        }
    }

    /// Render `entries` through the backend.
    #[must_use]
    pub fn render(&self, entries: &[NavigationEntry]) -> String {
        self.render_view(&self.build(entries))
    }

    /// Render an already built view through the backend.
    #[must_use]
    pub fn render_view(&self, view: &SidebarView) -> String {
        let mut out = String::with_capacity(256);
        write_view::<B>(view, &mut out);
        out
    }

    fn build_rows(&self, entries: &[NavigationEntry], level: usize) -> Vec<Row> {
        entries
            .iter()
            .map(|entry| self.build_row(entry, level))
            .collect()
    }

    fn build_row(&self, entry: &NavigationEntry, level: usize) -> Row {
        let children = if self.options.depth.expands(level) {
            self.build_rows(&entry.children, level + 1)
        } else {
            Vec::new()
        };

        Row {
            key: entry.name.clone(),
            label: entry.label.clone(),
            level,
            padding_left: (level == 0).then_some(self.options.padding_left),
            attrs: entry.attrs.clone(),
            children,
        }
    }
}

impl<B: RenderBackend> Default for SidebarRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}
