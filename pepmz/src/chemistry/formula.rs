use std::{
    fmt::{Display, Write},
    ops::{Add, AddAssign},
};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::{ELEMENT_PARSE_LIST, Element},
    error::{PeptideError, PeptideErrorKind},
    helper_functions::explain_number_error,
};

/// A molecular formula, a selection of elements with their number. The elements are kept sorted
/// and elements with a count of zero are never stored, so two formulas with the same
/// composition are always equal.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct MolecularFormula {
    elements: Vec<(Element, i32)>,
}

/// Easily define molecular formulas using the following syntax: `<element> <num>`
/// ```
/// # use pepmz::molecular_formula;
/// let water = molecular_formula!(H 2 O 1);
/// assert_eq!(water.hill_notation(), "H2O");
/// let deamidation = molecular_formula!(H -1 N -1 O 1);
/// assert_eq!(deamidation.hill_notation(), "H-1N-1O");
/// ```
#[macro_export]
macro_rules! molecular_formula {
    ($($element:ident $count:literal)*) => {
        $crate::chemistry::MolecularFormula::new(&[$(($crate::chemistry::Element::$element, $count)),*])
    };
}

impl MolecularFormula {
    /// Create a new molecular formula, the elements may be given in any order and may contain duplicates
    pub fn new(elements: &[(Element, i32)]) -> Self {
        let mut result = Self::default();
        for part in elements {
            result.add_element(*part);
        }
        result
    }

    /// Add the given number of atoms of the given element to this formula, the count saturates
    /// at the bounds of `i32`
    pub fn add_element(&mut self, (element, count): (Element, i32)) {
        self.merge_element(element, count, i32::saturating_add);
    }

    /// Add the given number of atoms of the given element to this formula. Returns `None`, and
    /// leaves the formula unchanged, if the count would overflow.
    pub fn checked_add_element(&mut self, (element, count): (Element, i32)) -> Option<()> {
        self.merge_element(element, count, i32::checked_add)
    }

    fn merge_element<R: Into<Option<i32>>>(
        &mut self,
        element: Element,
        count: i32,
        combine: impl Fn(i32, i32) -> R,
    ) -> Option<()> {
        if count == 0 {
            return Some(());
        }
        match self.elements.binary_search_by_key(&element, |(e, _)| *e) {
            Ok(index) => {
                let total: Option<i32> = combine(self.elements[index].1, count).into();
                let total = total?;
                if total == 0 {
                    self.elements.remove(index);
                } else {
                    self.elements[index].1 = total;
                }
            }
            Err(index) => self.elements.insert(index, (element, count)),
        }
        Some(())
    }

    /// The elements of this formula, sorted and without zero counts
    pub fn elements(&self) -> &[(Element, i32)] {
        &self.elements
    }

    /// Check if this formula contains no elements at all
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The number of atoms of the given element
    pub fn count(&self, element: Element) -> i32 {
        self.elements
            .binary_search_by_key(&element, |(e, _)| *e)
            .map_or(0, |index| self.elements[index].1)
    }

    /// The monoisotopic mass of this formula in Dalton
    pub fn monoisotopic_mass(&self) -> f64 {
        self.elements
            .iter()
            .map(|(element, count)| element.monoisotopic_mass() * f64::from(*count))
            .sum()
    }

    /// Create a [Hill notation](https://en.wikipedia.org/wiki/Chemical_formula#Hill_system)
    /// from this formula. Carbon first, hydrogen second, then all other elements alphabetically.
    /// If there is no carbon all elements are sorted alphabetically. A count of one is not
    /// written, negative counts are written with their sign.
    pub fn hill_notation(&self) -> String {
        let mut buffer = String::new();
        let carbon = self.count(Element::C) != 0;
        let mut write_element = |element: Element, count: i32| {
            if count == 1 {
                let _ = write!(buffer, "{element}");
            } else {
                let _ = write!(buffer, "{element}{count}");
            }
        };
        if carbon {
            write_element(Element::C, self.count(Element::C));
            if self.count(Element::H) != 0 {
                write_element(Element::H, self.count(Element::H));
            }
        }
        for (element, count) in &self.elements {
            if !carbon || !matches!(element, Element::C | Element::H) {
                write_element(*element, *count);
            }
        }
        buffer
    }

    /// Parse a molecular formula written as pairs of elements with an optional signed count, eg
    /// `H3C2NO`, `C2 H3 N O`, or `H-1N-1O`. A missing count means one. Elements may repeat, their
    /// counts are summed.
    /// # Errors
    /// If the formula is empty, contains an unknown element, or contains an invalid count.
    pub fn from_text(value: &str) -> Result<Self, PeptideError<'_>> {
        let base_context = Context::none().lines(0, value);
        let bytes = value.as_bytes();
        let mut result = Self::default();
        let mut index = 0;
        let mut any = false;
        while index < bytes.len() {
            if bytes[index].is_ascii_whitespace() {
                index += 1;
                continue;
            }
            let Some((symbol, element)) = ELEMENT_PARSE_LIST
                .iter()
                .find(|(symbol, _)| value[index..].starts_with(symbol))
            else {
                return Err(BoxedError::new(
                    PeptideErrorKind::InvalidConfiguration,
                    "Invalid molecular formula",
                    "Invalid element, only C, H, K, N, Na, O, P, S, and Se are supported",
                    base_context
                        .clone()
                        .add_highlight((0, index..index + value[index..].chars().next().map_or(1, char::len_utf8))),
                ));
            };
            index += symbol.len();
            let length = bytes[index..]
                .iter()
                .enumerate()
                .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && **c == b'-'))
                .count();
            let count = if length == 0 {
                1
            } else {
                value[index..index + length].parse::<i32>().map_err(|err| {
                    BoxedError::new(
                        PeptideErrorKind::InvalidConfiguration,
                        "Invalid molecular formula",
                        format!("The element count {}", explain_number_error(&err)),
                        base_context.clone().add_highlight((0, index..index + length)),
                    )
                })?
            };
            result
                .checked_add_element((*element, count))
                .ok_or_else(|| {
                    BoxedError::new(
                        PeptideErrorKind::InvalidConfiguration,
                        "Invalid molecular formula",
                        format!("The total number of {element} atoms is too big"),
                        base_context.clone().add_highlight((0, index..index + length.max(1))),
                    )
                })?;
            any = true;
            index += length;
        }
        if any {
            Ok(result)
        } else {
            Err(BoxedError::new(
                PeptideErrorKind::InvalidConfiguration,
                "Invalid molecular formula",
                "The formula is empty",
                base_context.add_highlight((0, 0..value.len())),
            ))
        }
    }
}

impl Display for MolecularFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hill_notation())
    }
}

impl AddAssign<&Self> for MolecularFormula {
    fn add_assign(&mut self, rhs: &Self) {
        for part in &rhs.elements {
            self.add_element(*part);
        }
    }
}

impl AddAssign for MolecularFormula {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Add<&MolecularFormula> for &MolecularFormula {
    type Output = MolecularFormula;
    fn add(self, rhs: &MolecularFormula) -> Self::Output {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl Add for MolecularFormula {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}
