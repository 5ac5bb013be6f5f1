//! Typed selector fragments.
//!
//! A [`Fragment`] is one simple-selector token (`div`, `#main`, `.active`,
//! `[href]`, `:hover`, `::before`). Its [`FragmentKind`] fixes the glyph it is
//! rendered with and its rank in the canonical compound-selector order.

use std::fmt;

/// CSS specificity of a selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Self) -> Self::Output {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}

/// The kind of a selector fragment.
///
/// Variants are declared in rank order, so the derived `Ord` agrees with
/// [`FragmentKind::rank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    /// Position of this kind in the required order
    /// `element, id, class, attribute, pseudo-class, pseudo-element`.
    pub const fn rank(self) -> u8 {
        match self {
            FragmentKind::Element => 0,
            FragmentKind::Id => 1,
            FragmentKind::Class => 2,
            FragmentKind::Attribute => 3,
            FragmentKind::PseudoClass => 4,
            FragmentKind::PseudoElement => 5,
        }
    }

    /// Literal prefix rendered before the fragment value.
    ///
    /// Attributes carry their own brackets in the value, so their glyph is
    /// empty just like an element's.
    pub const fn glyph(self) -> &'static str {
        match self {
            FragmentKind::Element | FragmentKind::Attribute => "",
            FragmentKind::Id => "#",
            FragmentKind::Class => ".",
            FragmentKind::PseudoClass => ":",
            FragmentKind::PseudoElement => "::",
        }
    }

    pub const fn is_element(self) -> bool {
        matches!(self, FragmentKind::Element)
    }

    /// Whether at most one fragment of this kind may appear in a compound.
    pub const fn is_unique(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }
}

/// A single typed token within a compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    kind: FragmentKind,
    value: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = match kind {
            FragmentKind::Attribute => format!("[{value}]"),
            _ => value,
        };
        Self { kind, value }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The rendered payload without its glyph. Attribute values include
    /// their brackets.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rank(&self) -> u8 {
        self.kind.rank()
    }

    /// The `*` element matches anything.
    pub fn is_universal(&self) -> bool {
        self.kind.is_element() && self.value == "*"
    }

    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        if self.is_universal() {
            return spec;
        }
        match self.kind {
            FragmentKind::Id => spec.ids += 1,
            // Attributes have the same specificity as classes and pseudo-classes
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                spec.classes += 1;
            }
            FragmentKind::Element | FragmentKind::PseudoElement => spec.types += 1,
        }
        spec
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.glyph(), self.value)
    }
}
