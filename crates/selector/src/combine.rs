//! Joining selectors with combinators.
//!
//! [`combine`] renders each selector piece eagerly and wraps every literal
//! token in one space on each side, so `"+"` becomes `" + "`. The result is a
//! [`CombinedSelector`] that only knows its precomputed text.

use std::fmt;

use crate::builder::{Compound, Stringify};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    pub const fn token(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One argument to [`combine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    Compound(Compound),
    Combined(CombinedSelector),
    Token(String),
}

impl From<Compound> for Piece {
    fn from(value: Compound) -> Self {
        Piece::Compound(value)
    }
}

impl From<CombinedSelector> for Piece {
    fn from(value: CombinedSelector) -> Self {
        Piece::Combined(value)
    }
}

impl From<Combinator> for Piece {
    fn from(value: Combinator) -> Self {
        Piece::Token(value.token().to_string())
    }
}

impl From<&str> for Piece {
    fn from(value: &str) -> Self {
        Piece::Token(value.to_string())
    }
}

impl From<String> for Piece {
    fn from(value: String) -> Self {
        Piece::Token(value)
    }
}

/// The rendered result of [`combine`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&mut self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenates selectors and combinator tokens in argument order.
///
/// Selector pieces are consumed by rendering. No ordering or uniqueness rules
/// apply across pieces.
///
/// ```rust
/// use selector::{BUILDER, Piece, Stringify, combine};
///
/// let mut sel = combine([
///     Piece::from(BUILDER.element("div")),
///     Piece::from(">"),
///     Piece::from(BUILDER.class("item")),
/// ]);
/// assert_eq!(sel.stringify(), "div > .item");
/// ```
pub fn combine<I>(pieces: I) -> CombinedSelector
where
    I: IntoIterator<Item = Piece>,
{
    let mut text = String::new();
    for piece in pieces {
        match piece {
            Piece::Compound(mut compound) => text.push_str(&compound.stringify()),
            Piece::Combined(mut combined) => text.push_str(&combined.stringify()),
            Piece::Token(token) => {
                text.push(' ');
                text.push_str(&token);
                text.push(' ');
            }
        }
    }
    log::debug!("selector: combined {text:?}");
    CombinedSelector { text }
}
