use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The elements that can occur in the residues and modifications handled by this crate. Sorted
/// alphabetically on their symbol.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[allow(missing_docs)]
pub enum Element {
    C,
    H,
    K,
    N,
    Na,
    O,
    P,
    S,
    Se,
}

/// All elements in the order they should be tried when parsing a symbol, two letter symbols first
pub(crate) const ELEMENT_PARSE_LIST: &[(&str, Element)] = &[
    ("Na", Element::Na),
    ("Se", Element::Se),
    ("C", Element::C),
    ("H", Element::H),
    ("K", Element::K),
    ("N", Element::N),
    ("O", Element::O),
    ("P", Element::P),
    ("S", Element::S),
];

impl Element {
    /// The symbol of this element as used in molecular formulas
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::H => "H",
            Self::K => "K",
            Self::N => "N",
            Self::Na => "Na",
            Self::O => "O",
            Self::P => "P",
            Self::S => "S",
            Self::Se => "Se",
        }
    }

    /// The mass of the most abundant (monoisotopic) isotope of this element in Dalton
    pub const fn monoisotopic_mass(self) -> f64 {
        match self {
            Self::C => 12.0,
            Self::H => 1.00782503207,
            Self::K => 38.96370668,
            Self::N => 14.0030740048,
            Self::Na => 22.9897692809,
            Self::O => 15.99491461956,
            Self::P => 30.97376163,
            Self::S => 31.97207100,
            Self::Se => 79.9165213,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
