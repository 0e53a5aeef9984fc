//! Sidebar renderer with pluggable output backends.
//!
//! [`SidebarRenderer`] turns a sequence of
//! [`NavigationEntry`](sidenav_tree::NavigationEntry) values into a
//! [`SidebarView`]: one row per top-level entry, in order, with a nested list
//! of child rows under each entry that has children.
//!
//! Rendering is a pure function of its input. No state is kept between calls
//! and the same input always produces the same output.
//!
//! # Architecture
//!
//! - [`SidebarView`] / [`Row`]: the rendered visual tree
//! - [`RenderBackend`]: format-specific output of the view
//! - [`HtmlBackend`]: HTML fragment (`<div>`/`<ul>`/`<li>`)
//! - [`TextBackend`]: indented plain-text outline
//!
//! # Example
//!
//! ```
//! use sidenav_renderer::{HtmlBackend, SidebarRenderer};
//! use sidenav_tree::NavigationEntry;
//!
//! let entries = vec![NavigationEntry::new("home", "Home")];
//! let html = SidebarRenderer::<HtmlBackend>::new().render(&entries);
//!
//! assert!(html.contains(">Home</span>"));
//! ```

mod backend;
mod html;
mod options;
mod renderer;
mod text;
mod view;

pub use backend::RenderBackend;
pub use html::{HtmlBackend, escape_html};
pub use options::{DEFAULT_CLASS_NAME, DEFAULT_PADDING_LEFT, NestingDepth, SidebarOptions};
pub use renderer::SidebarRenderer;
pub use text::TextBackend;
pub use view::{Row, SidebarView};
