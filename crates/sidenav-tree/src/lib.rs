//! Navigation tree data model for sidenav.
//!
//! A [`NavigationTree`] is an immutable, ordered sequence of
//! [`NavigationEntry`] values. Entries may carry nested children; the order of
//! every sequence is the display order.
//!
//! Trees are built once, either from literal data (see [`samples`]) or from a
//! navigation file via [`NavigationTree::load`], and are never mutated
//! afterwards.
//!
//! # Example
//!
//! ```
//! use sidenav_tree::{NavigationEntry, NavigationTree};
//!
//! let tree = NavigationTree::new(vec![
//!     NavigationEntry::new("home", "Home"),
//!     NavigationEntry::new("billing", "Billing").with_children(vec![
//!         NavigationEntry::new("statements", "Statements"),
//!         NavigationEntry::new("reports", "Reports"),
//!     ]),
//! ]);
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.depth(), 2);
//! ```

mod check;
mod entry;
mod loader;
pub mod samples;
mod tree;

pub use check::TreeIssue;
pub use entry::{DisplayAttrs, NavigationEntry, is_valid_attr_name};
pub use loader::{NavigationFormat, TreeError};
pub use samples::Sample;
pub use tree::NavigationTree;
