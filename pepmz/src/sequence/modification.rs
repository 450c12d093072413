//! Resolving annotations into modifications

use std::{
    fmt::Display,
    ops::Range,
    sync::{Arc, LazyLock},
};

use ordered_float::OrderedFloat;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::MolecularFormula,
    error::{PeptideError, PeptideErrorKind, error_at},
    helper_functions::{explain_number_error, str_starts_with},
    ontology::{ModificationDatabase, ModificationDefinition},
    sequence::{SequencePosition, Token},
};

/// A signed decimal number, optionally in scientific notation
static MASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-](?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap());

const UNIMOD_PREFIX: &str = "UNIMOD:";

/// A resolved modification
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Modification {
    /// A modification referenced by name or synonym
    Named(Arc<ModificationDefinition>),
    /// A modification referenced by its Unimod accession
    UnimodId(Arc<ModificationDefinition>),
    /// A bare mass shift, the elemental composition is unknown
    MassDelta {
        /// The mass in Dalton
        mass: OrderedFloat<f64>,
        /// The text as written, eg `+42.0106`
        raw: Box<str>,
    },
}

impl Modification {
    /// The monoisotopic mass difference in Dalton
    pub fn monoisotopic_mass(&self) -> f64 {
        match self {
            Self::Named(definition) | Self::UnimodId(definition) => *definition.mass,
            Self::MassDelta { mass, .. } => **mass,
        }
    }

    /// The elemental difference, if known
    pub fn formula(&self) -> Option<&MolecularFormula> {
        self.definition()
            .and_then(|definition| definition.formula.as_ref())
    }

    /// The definition, if this is not a bare mass shift
    pub fn definition(&self) -> Option<&ModificationDefinition> {
        match self {
            Self::Named(definition) | Self::UnimodId(definition) => Some(definition.as_ref()),
            Self::MassDelta { .. } => None,
        }
    }

    /// The Unimod accession, if this is a Unimod modification
    pub fn unimod_id(&self) -> Option<usize> {
        self.definition().and_then(|definition| definition.unimod_id)
    }

    /// A human readable name, the canonical name or the mass as written
    pub fn name(&self) -> &str {
        match self {
            Self::Named(definition) | Self::UnimodId(definition) => &definition.name,
            Self::MassDelta { raw, .. } => raw,
        }
    }

    /// Resolve the annotation in `line` at `range`, attached to `position`. The content is
    /// tried in this order:
    /// 1. `UNIMOD:<id>` (ignoring casing), looked up by accession
    /// 2. a signed number, eg `+42.0106`, `-79.9663`, or `+1.5e2`, used as a bare mass shift
    /// 3. anything else, looked up by name or synonym (ignoring casing)
    ///
    /// # Errors
    /// * [`PeptideErrorKind::UnknownUnimodId`] if the accession is invalid or not known
    /// * [`PeptideErrorKind::NumberParseError`] if the content starts with a sign but is not a valid number
    /// * [`PeptideErrorKind::UnknownModification`] if the name is not known, or the content is empty
    pub fn resolve<'a>(
        line: &'a str,
        range: Range<usize>,
        position: SequencePosition,
        database: &ModificationDatabase,
    ) -> Result<Self, PeptideError<'a>> {
        let full = &line[range.clone()];
        let content = full.trim();
        let offset = range.start + (full.len() - full.trim_start().len());
        let location = match position {
            SequencePosition::Index(index) => format!("at residue {}", index + 1),
            terminal => format!("at the {terminal} position"),
        };

        if content.is_empty() {
            Err(error_at(
                PeptideErrorKind::UnknownModification,
                "Invalid modification",
                format!("An empty modification is not allowed ({location})"),
                line,
                range.start.saturating_sub(1),
                range.len() + 2,
            ))
        } else if str_starts_with::<true>(content, UNIMOD_PREFIX) {
            let number = &content[UNIMOD_PREFIX.len()..];
            let id = number.parse::<usize>().map_err(|err| {
                error_at(
                    PeptideErrorKind::UnknownUnimodId,
                    "Invalid Unimod accession",
                    format!("The Unimod accession number {}", explain_number_error(&err)),
                    line,
                    offset + UNIMOD_PREFIX.len(),
                    number.len(),
                )
            })?;
            database
                .get_by_id(id)
                .map(|definition| Self::UnimodId(definition.clone()))
                .ok_or_else(|| {
                    error_at(
                        PeptideErrorKind::UnknownUnimodId,
                        "Unknown Unimod accession",
                        format!("UNIMOD:{id} is not a known modification ({location})"),
                        line,
                        offset,
                        content.len(),
                    )
                })
        } else if content.starts_with(['+', '-']) {
            let number_error = |long: String| {
                error_at(
                    PeptideErrorKind::NumberParseError,
                    "Invalid mass shift",
                    long,
                    line,
                    offset,
                    content.len(),
                )
            };
            if !MASS_REGEX.is_match(content) {
                return Err(number_error(format!(
                    "'{content}' is not a valid mass shift ({location}), use a sign followed by a number, eg '+15.9949' or '-1.5e2'"
                )));
            }
            let mass = content
                .parse::<f64>()
                .map_err(|err| number_error(format!("'{content}' {err}")))?;
            if mass.is_finite() {
                Ok(Self::MassDelta {
                    mass: OrderedFloat(mass),
                    raw: content.into(),
                })
            } else {
                Err(number_error(format!(
                    "'{content}' is too big to be a mass shift"
                )))
            }
        } else {
            database
                .get_by_name(content)
                .map(|definition| Self::Named(definition.clone()))
                .ok_or_else(|| {
                    error_at(
                        PeptideErrorKind::UnknownModification,
                        "Unknown modification",
                        format!(
                            "'{content}' is not a known modification ({location}), use a known name, a Unimod accession ('UNIMOD:35'), or a mass shift ('+15.9949')"
                        ),
                        line,
                        offset,
                        content.len(),
                    )
                })
        }
    }
}

/// A resolved annotation, still linked to the place where it was written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAnnotation {
    /// The modification
    pub modification: Modification,
    /// What it is attached to
    pub attachment: SequencePosition,
    /// The range of the annotation content in the line
    pub range: Range<usize>,
}

/// Resolve all annotations in the tokens, in order.
/// # Errors
/// The first resolution error, see [`Modification::resolve`].
pub fn resolve_annotations<'a>(
    line: &'a str,
    tokens: &[Token<'a>],
    database: &ModificationDatabase,
) -> Result<Vec<ResolvedAnnotation>, PeptideError<'a>> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Annotation {
                range, attachment, ..
            } => Some((range, *attachment)),
            _ => None,
        })
        .map(|(range, attachment)| {
            Modification::resolve(line, range.clone(), attachment, database).map(|modification| {
                ResolvedAnnotation {
                    modification,
                    attachment,
                    range: range.clone(),
                }
            })
        })
        .collect()
}

/// Writes the normalized annotation content: the canonical name, `UNIMOD:<id>`, or the mass as written
impl Display for Modification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(definition) => write!(f, "{}", definition.name),
            Self::UnimodId(definition) => match definition.unimod_id {
                Some(id) => write!(f, "UNIMOD:{id}"),
                None => write!(f, "{}", definition.name),
            },
            Self::MassDelta { raw, .. } => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use approx::assert_relative_eq;
    use context_error::FullErrorContent;

    use super::*;
    use crate::ontology::STATIC_DATABASE;

    fn resolve(content: &str) -> Result<Modification, PeptideErrorKind> {
        let line = format!("M[{content}]");
        Modification::resolve(
            &line,
            2..2 + content.len(),
            SequencePosition::Index(0),
            &STATIC_DATABASE,
        )
        .map_err(|err| err.get_kind().clone())
    }

    #[test]
    fn resolution_order() {
        let Ok(Modification::UnimodId(definition)) = resolve("unimod:35") else {
            panic!("UNIMOD:35 should resolve by accession")
        };
        assert_eq!(&*definition.name, "Oxidation");
        let Ok(Modification::Named(definition)) = resolve(" Oxidation ") else {
            panic!("Oxidation should resolve by name")
        };
        assert_eq!(definition.unimod_id, Some(35));
        let Ok(Modification::MassDelta { mass, raw }) = resolve("+1.5e2") else {
            panic!("+1.5e2 should be a mass shift")
        };
        assert_relative_eq!(mass.0, 150.0);
        assert_eq!(&*raw, "+1.5e2");
        assert!(matches!(
            resolve("-.5"),
            Ok(Modification::MassDelta { .. })
        ));
    }

    #[test]
    fn resolution_errors() {
        for (content, kind) in [
            ("", PeptideErrorKind::UnknownModification),
            ("  ", PeptideErrorKind::UnknownModification),
            ("Oxidised", PeptideErrorKind::UnknownModification),
            ("UNIMOD:", PeptideErrorKind::UnknownUnimodId),
            ("UNIMOD:x", PeptideErrorKind::UnknownUnimodId),
            ("UNIMOD:999999", PeptideErrorKind::UnknownUnimodId),
            ("+", PeptideErrorKind::NumberParseError),
            ("+4.2.1", PeptideErrorKind::NumberParseError),
            ("-1e", PeptideErrorKind::NumberParseError),
            ("+1e999", PeptideErrorKind::NumberParseError),
            ("+inf", PeptideErrorKind::NumberParseError),
        ] {
            assert_eq!(resolve(content), Err(kind), "{content:?}");
        }
    }

    #[test]
    fn masses_and_formulas() {
        let oxidation = resolve("Oxidation").unwrap();
        assert_relative_eq!(oxidation.monoisotopic_mass(), 15.994915, epsilon = 1e-6);
        assert!(oxidation.formula().is_some());
        assert_eq!(oxidation.unimod_id(), Some(35));
        assert_eq!(oxidation.to_string(), "Oxidation");
        assert_eq!(resolve("UNIMOD:35").unwrap().to_string(), "UNIMOD:35");
        let shift = resolve("-17.0265").unwrap();
        assert_relative_eq!(shift.monoisotopic_mass(), -17.0265);
        assert_eq!(shift.formula(), None);
        assert_eq!(shift.name(), "-17.0265");
    }
}
