//! Error types for selector building and parsing.
//!
//! Building a compound selector can fail in two ways: a one-of-a-kind part is
//! repeated, or parts are appended out of the canonical CSS order. Parsing
//! selector text adds a third failure for malformed input.

use thiserror::Error;

/// Errors that can occur while building or parsing a selector.
///
/// # Examples
///
/// ```rust
/// use selector::{SelectorBuilder, SelectorError};
///
/// let result = SelectorBuilder.id("a").id("b");
/// assert_eq!(result.unwrap_err(), SelectorError::DuplicatePart);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended to a compound selector
    /// that already holds one.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    DuplicatePart,

    /// A part was appended whose rank is lower than a part already present.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder,

    /// Selector text could not be parsed.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("selector syntax error: {0}")]
    Syntax(String),
}
