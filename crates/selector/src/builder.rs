//! Chainable compound-selector builder.
//!
//! [`SelectorBuilder`] is a stateless facade: each of its methods starts a
//! fresh [`Compound`] holding exactly one fragment. Every method on a
//! [`Compound`] returns a new chain with one more fragment, leaving the
//! receiver untouched, so chains started from the same facade never share
//! fragments.
//!
//! ```rust
//! use selector::{SelectorBuilder, SelectorError, Stringify};
//!
//! let mut sel = SelectorBuilder.element("a").id("x")?.class("y")?;
//! assert_eq!(sel.stringify(), "a#x.y");
//! # Ok::<(), SelectorError>(())
//! ```

use std::fmt;

use crate::SelectorError;
use crate::fragment::{Fragment, FragmentKind, Specificity};

/// Anything that renders to selector text.
pub trait Stringify {
    /// Renders the selector. Compound chains are consumed by rendering.
    fn stringify(&mut self) -> String;
}

/// Stateless entry point for building selectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder;

/// Shared facade instance.
pub const BUILDER: SelectorBuilder = SelectorBuilder;

impl SelectorBuilder {
    pub fn element(&self, name: impl Into<String>) -> Compound {
        Compound::start(Fragment::new(FragmentKind::Element, name))
    }

    pub fn id(&self, name: impl Into<String>) -> Compound {
        Compound::start(Fragment::new(FragmentKind::Id, name))
    }

    pub fn class(&self, name: impl Into<String>) -> Compound {
        Compound::start(Fragment::new(FragmentKind::Class, name))
    }

    /// Starts a chain with an attribute fragment. `expr` is the raw text
    /// placed inside the brackets, e.g. `href$=".png"`.
    pub fn attr(&self, expr: impl Into<String>) -> Compound {
        Compound::start(Fragment::new(FragmentKind::Attribute, expr))
    }

    pub fn pseudo_class(&self, name: impl Into<String>) -> Compound {
        Compound::start(Fragment::new(FragmentKind::PseudoClass, name))
    }

    pub fn pseudo_element(&self, name: impl Into<String>) -> Compound {
        Compound::start(Fragment::new(FragmentKind::PseudoElement, name))
    }
}

/// An in-progress compound selector (e.g. `input#name.wide[required]:focus`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    fragments: Vec<Fragment>,
}

impl Compound {
    /// An empty chain. Its first appended fragment skips validation.
    pub fn new() -> Self {
        Self::default()
    }

    fn start(fragment: Fragment) -> Self {
        log::trace!("selector: new chain at {fragment}");
        Self {
            fragments: vec![fragment],
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn element(&self, name: impl Into<String>) -> Result<Compound, SelectorError> {
        self.append(Fragment::new(FragmentKind::Element, name))
    }

    pub fn id(&self, name: impl Into<String>) -> Result<Compound, SelectorError> {
        self.append(Fragment::new(FragmentKind::Id, name))
    }

    pub fn class(&self, name: impl Into<String>) -> Result<Compound, SelectorError> {
        self.append(Fragment::new(FragmentKind::Class, name))
    }

    pub fn attr(&self, expr: impl Into<String>) -> Result<Compound, SelectorError> {
        self.append(Fragment::new(FragmentKind::Attribute, expr))
    }

    pub fn pseudo_class(&self, name: impl Into<String>) -> Result<Compound, SelectorError> {
        self.append(Fragment::new(FragmentKind::PseudoClass, name))
    }

    pub fn pseudo_element(&self, name: impl Into<String>) -> Result<Compound, SelectorError> {
        self.append(Fragment::new(FragmentKind::PseudoElement, name))
    }

    /// Returns a new chain with `fragment` appended, leaving `self` as is.
    pub fn append(&self, fragment: Fragment) -> Result<Compound, SelectorError> {
        if !self.fragments.is_empty() {
            self.validate(&fragment)?;
        }
        log::trace!("selector: append {fragment} to {self}");

        let mut fragments = Vec::with_capacity(self.fragments.len() + 1);
        fragments.extend(self.fragments.iter().cloned());
        fragments.push(fragment);
        Ok(Compound { fragments })
    }

    fn validate(&self, fragment: &Fragment) -> Result<(), SelectorError> {
        let kind = fragment.kind();
        if kind.is_unique() && self.fragments.iter().any(|f| f.kind() == kind) {
            log::debug!("selector: duplicate {kind:?} in {self}");
            return Err(SelectorError::DuplicatePart);
        }

        let ranks: Vec<u8> = self
            .fragments
            .iter()
            .chain(std::iter::once(fragment))
            .map(Fragment::rank)
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        if ranks != sorted {
            log::debug!("selector: {fragment} out of order after {self}");
            return Err(SelectorError::OutOfOrder);
        }

        Ok(())
    }

    /// Renders the chain without consuming it.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn specificity(&self) -> Specificity {
        self.fragments
            .iter()
            .map(Fragment::specificity)
            .fold(Specificity::default(), |acc, s| acc + s)
    }
}

impl Stringify for Compound {
    /// Renders the chain and empties it; calling again yields `""`.
    fn stringify(&mut self) -> String {
        let text = self.render();
        self.fragments.clear();
        log::trace!("selector: rendered {text:?}");
        text
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
