//! # selector - chainable CSS selector builder
//!
//! Builds CSS selector strings from typed parts while enforcing the rules a
//! compound selector must obey:
//!
//! - element, id and pseudo-element appear at most once
//! - parts come in the order element, id, class, attribute, pseudo-class,
//!   pseudo-element
//!
//! ## Quick Start
//!
//! ```rust
//! use selector::{BUILDER, SelectorError, Stringify, combine};
//!
//! let mut link = BUILDER
//!     .element("a")
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let mut sel = combine!(
//!     BUILDER.element("div").id("main")?,
//!     "+",
//!     BUILDER.element("table").id("data")?
//! );
//! assert_eq!(sel.stringify(), "div#main + table#data");
//! # Ok::<(), SelectorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`builder`]: the [`SelectorBuilder`] facade and [`Compound`] chains
//! - [`combine`](mod@combine): joining selectors with combinators
//! - [`fragment`]: fragment kinds, ranks and specificity
//! - [`parser`]: parsing selector text back into validated chains
//! - [`error`]: error types

pub mod builder;
pub mod combine;
pub mod error;
pub mod fragment;
pub mod parser;

pub use builder::{BUILDER, Compound, SelectorBuilder, Stringify};
pub use combine::{CombinedSelector, Combinator, Piece, combine};
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind, Specificity};
pub use parser::{ComplexSelector, parse_compound, parse_selector, specificity};

/// Variadic form of [`combine()`]: each argument is anything convertible into
/// a [`Piece`].
#[macro_export]
macro_rules! combine {
    ($($piece:expr),* $(,)?) => {
        $crate::combine::combine([$($crate::combine::Piece::from($piece)),*])
    };
}
