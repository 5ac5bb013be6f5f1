//! # selector-kata
//!
//! Three independent components, re-exported from their own crates:
//!
//! - [`selector`]: a chainable CSS selector builder that enforces part order
//!   and uniqueness, plus `combine` for joining selectors with combinators
//! - [`shapes`]: a rectangle value object with a computed area
//! - [`json_bridge`]: JSON text round-tripping with prototype-style
//!   capability attachment
//!
//! ```rust
//! use selector_kata::selector::{BUILDER, Stringify};
//!
//! let mut sel = BUILDER.element("a").id("x").unwrap().class("y").unwrap();
//! assert_eq!(sel.stringify(), "a#x.y");
//! ```

pub mod log_init;

pub use json_bridge;
pub use selector;
pub use shapes;

// Re-export the log crate so users can use selector_kata::log::info!, etc.
pub use log;
