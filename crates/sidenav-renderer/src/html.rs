//! HTML backend for sidebar rendering.
//!
//! Produces an HTML fragment:
//!
//! ```html
//! <div class="sidebar">
//!   <ul class="sidebar-list sidebar-list-dense">
//!     <li class="sidebar-item" data-key="billing" style="padding-left: 18px">
//!       <span class="sidebar-item-text">Billing</span>
//!       <ul class="sidebar-list sidebar-list-nested">...</ul>
//!     </li>
//!   </ul>
//! </div>
//! ```
//!
//! Output is emitted without whitespace between tags.

use std::fmt::Write;

use sidenav_tree::is_valid_attr_name;

use crate::backend::RenderBackend;
use crate::view::{Row, SidebarView};

/// Attributes the backend writes itself. Pass-through values for `class`
/// and `style` are merged; `data-key` is never overridden. HTML attribute
/// names are case-insensitive, so matching is too.
const RESERVED_ATTRS: [&str; 3] = ["class", "style", "data-key"];

fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRS.iter().any(|r| r.eq_ignore_ascii_case(name))
}

/// First non-empty pass-through value for `name`, ignoring ASCII case.
fn merged_attr<'a>(row: &'a Row, name: &str) -> Option<&'a str> {
    row.attrs
        .iter()
        .find(|(key, value)| key.eq_ignore_ascii_case(name) && !value.is_empty())
        .map(|(_, value)| value)
}

/// HTML render backend.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn container_start(view: &SidebarView, out: &mut String) {
        out.push_str(r#"<div class=""#);
        out.push_str(&escape_html(&view.class_name));
        out.push_str(r#"">"#);
    }

    fn container_end(_view: &SidebarView, out: &mut String) {
        out.push_str("</div>");
    }

    fn list_start(level: usize, dense: bool, out: &mut String) {
        if level > 0 {
            out.push_str(r#"<ul class="sidebar-list sidebar-list-nested">"#);
        } else if dense {
            out.push_str(r#"<ul class="sidebar-list sidebar-list-dense">"#);
        } else {
            out.push_str(r#"<ul class="sidebar-list">"#);
        }
    }

    fn list_end(_level: usize, out: &mut String) {
        out.push_str("</ul>");
    }

    fn row_start(row: &Row, out: &mut String) {
        out.push_str(r#"<li class="sidebar-item"#);
        if let Some(class) = merged_attr(row, "class") {
            out.push(' ');
            out.push_str(&escape_html(class));
        }
        out.push('"');

        write!(out, r#" data-key="{}""#, escape_html(&row.key)).unwrap();

        let extra_style = merged_attr(row, "style");
        match (row.padding_left, extra_style) {
            (Some(px), Some(style)) => {
                write!(out, r#" style="padding-left: {px}px; {}""#, escape_html(style)).unwrap();
            }
            (Some(px), None) => write!(out, r#" style="padding-left: {px}px""#).unwrap(),
            (None, Some(style)) => write!(out, r#" style="{}""#, escape_html(style)).unwrap(),
            (None, None) => {}
        }

        for (name, value) in row.attrs.iter() {
            if is_reserved(name) || !is_valid_attr_name(name) {
                continue;
            }
            write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
        }

        out.push('>');
        write!(
            out,
            r#"<span class="sidebar-item-text">{}</span>"#,
            escape_html(&row.label)
        )
        .unwrap();
    }

    fn row_end(_row: &Row, out: &mut String) {
        out.push_str("</li>");
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
