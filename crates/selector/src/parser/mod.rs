//! Selector text parsing.
//!
//! Parsed selectors go through the same [`Compound`] append path as builder
//! calls, so `"a.x#y"` is rejected exactly like
//! `BUILDER.element("a").class("x")?.id("y")`.
//!
//! - [`parse_compound`]: one compound selector (`input#name.wide:focus`)
//! - [`parse_selector`]: compounds joined by combinators (`nav > ul li`)
//! - [`specificity`]: summed specificity of a selector
//!
//! ```rust
//! use selector::parser::parse_selector;
//!
//! let sel = parse_selector("nav > a.active").unwrap();
//! assert_eq!(sel.to_string(), "nav > a.active");
//! assert_eq!(sel.specificity().classes, 1);
//! ```

pub mod selectors;

use std::fmt;

use crate::SelectorError;
use crate::builder::Compound;
use crate::combine::{CombinedSelector, Combinator, Piece, combine};
use crate::fragment::Specificity;
use crate::parser::selectors::{RawCompound, parse_complex_selector, parse_compound_selector};

/// A compound selector and the combinator linking it to the next one.
///
/// The last part of a [`ComplexSelector`] has no combinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorPart {
    pub compound: Compound,
    pub combinator: Option<Combinator>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

impl ComplexSelector {
    pub fn specificity(&self) -> Specificity {
        self.parts
            .iter()
            .map(|p| p.compound.specificity())
            .fold(Specificity::default(), |acc, x| acc + x)
    }

    /// Hands the parts to [`combine`], consuming every compound.
    ///
    /// Combinator tokens get the usual one-space padding, so a descendant
    /// combinator renders as three spaces.
    pub fn into_combined(self) -> CombinedSelector {
        let mut pieces = Vec::with_capacity(self.parts.len() * 2);
        for part in self.parts {
            pieces.push(Piece::from(part.compound));
            if let Some(combinator) = part.combinator {
                pieces.push(Piece::from(combinator));
            }
        }
        combine(pieces)
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part.compound)?;
            match part.combinator {
                Some(Combinator::Descendant) => f.write_str(" ")?,
                Some(c) => write!(f, " {c} ")?,
                None => {}
            }
        }
        Ok(())
    }
}

fn build(raw: RawCompound) -> Result<Compound, SelectorError> {
    raw.into_iter()
        .try_fold(Compound::new(), |compound, fragment| compound.append(fragment))
}

fn ensure_consumed(remaining: &str) -> Result<(), SelectorError> {
    if remaining.trim().is_empty() {
        Ok(())
    } else {
        Err(SelectorError::Syntax(format!(
            "Unexpected tokens at end of selector: {}",
            remaining.trim()
        )))
    }
}

/// Parses and validates a single compound selector.
pub fn parse_compound(input: &str) -> Result<Compound, SelectorError> {
    let (remaining, raw) = parse_compound_selector(input.trim())
        .map_err(|e| SelectorError::Syntax(e.to_string()))?;
    ensure_consumed(remaining)?;
    build(raw)
}

/// Parses and validates a selector made of compounds and combinators.
pub fn parse_selector(input: &str) -> Result<ComplexSelector, SelectorError> {
    let (remaining, (first, rest)) = parse_complex_selector(input.trim())
        .map_err(|e| SelectorError::Syntax(e.to_string()))?;
    ensure_consumed(remaining)?;

    let mut parts = Vec::with_capacity(rest.len() + 1);
    let mut current = build(first)?;
    for (combinator, raw) in rest {
        parts.push(SelectorPart {
            compound: current,
            combinator: Some(combinator),
        });
        current = build(raw)?;
    }
    parts.push(SelectorPart {
        compound: current,
        combinator: None,
    });

    log::trace!("selector: parsed {} part(s) from {input:?}", parts.len());
    Ok(ComplexSelector { parts })
}

/// Specificity of a selector given as text.
pub fn specificity(input: &str) -> Result<Specificity, SelectorError> {
    parse_selector(input).map(|sel| sel.specificity())
}
