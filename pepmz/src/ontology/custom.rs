//! Custom modifications, defined by the user in a JSON file
use context_error::*;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::MolecularFormula,
    error::{PeptideError, PeptideErrorKind},
    helper_functions::str_starts_with,
    ontology::ModificationDefinition,
    parse_json::{ParseJson, use_serde},
};

/// A custom modification as written in the JSON database. At least one of `formula` and `mass`
/// has to be given. If only the mass is given the modification has no elemental formula, so
/// peptides carrying it do not have a known formula either.
///
/// ```json
/// [
///   {"name": "Propionamide", "synonyms": ["Acrylamide adduct"], "formula": "C3H5NO"},
///   {"name": "Mystery", "mass": 123.456}
/// ]
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CustomModification {
    /// The canonical name
    pub name: String,
    /// Alternative names
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// The elemental difference, eg `H3C2NO`
    #[serde(default)]
    pub formula: Option<String>,
    /// The monoisotopic mass difference
    #[serde(default)]
    pub mass: Option<f64>,
}

impl ParseJson for CustomModification {
    fn from_json_value(value: serde_json::Value) -> Result<Self, PeptideError<'static>> {
        use_serde(value)
    }
}

impl CustomModification {
    /// Validate this custom modification and create its definition
    /// # Errors
    /// If a name cannot be used (empty, looks like a mass, or looks like an accession), if the
    /// formula is invalid, if neither formula nor mass is given, or if both are given and they
    /// disagree.
    pub fn into_definition(self) -> Result<ModificationDefinition, PeptideError<'static>> {
        let invalid = |long: String| {
            BoxedError::new(
                PeptideErrorKind::InvalidConfiguration,
                "Invalid custom modification",
                long,
                Context::show(self.name.clone()),
            )
        };
        for name in std::iter::once(&self.name).chain(&self.synonyms) {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(invalid("A name cannot be empty".to_string()));
            }
            if trimmed.starts_with(['+', '-']) || str_starts_with::<true>(trimmed, "UNIMOD:") {
                return Err(invalid(format!(
                    "The name '{trimmed}' would be read as a mass or Unimod accession"
                )));
            }
            if trimmed.contains(['[', ']', '(', ')']) {
                return Err(invalid(format!(
                    "The name '{trimmed}' cannot contain brackets"
                )));
            }
        }
        if let Some(mass) = self.mass
            && !mass.is_finite()
        {
            return Err(invalid("The mass has to be a finite number".to_string()));
        }
        let formula = self
            .formula
            .as_deref()
            .map(|formula| MolecularFormula::from_text(formula).map_err(BoxedError::to_owned))
            .transpose()?;
        let mass = match (&formula, self.mass) {
            (Some(formula), Some(mass)) => {
                let derived = formula.monoisotopic_mass();
                if (derived - mass).abs() > 1e-4 {
                    return Err(invalid(format!(
                        "The mass {mass} does not match the mass of the formula {formula} ({derived})"
                    )));
                }
                derived
            }
            (Some(formula), None) => formula.monoisotopic_mass(),
            (None, Some(mass)) => mass,
            (None, None) => {
                return Err(invalid(
                    "Either a formula or a mass has to be given".to_string(),
                ));
            }
        };
        Ok(ModificationDefinition {
            unimod_id: None,
            name: self.name.trim().into(),
            synonyms: self.synonyms.iter().map(|s| s.trim().into()).collect(),
            formula,
            mass: OrderedFloat(mass),
        })
    }
}

/// Parse a JSON list of custom modifications and validate all of them
/// # Errors
/// If the JSON is invalid or any of the modifications is invalid.
pub fn parse_custom_modifications(
    json: &str,
) -> Result<Vec<ModificationDefinition>, PeptideError<'static>> {
    Vec::<CustomModification>::from_json(json)?
        .into_iter()
        .map(CustomModification::into_definition)
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::molecular_formula;

    #[test]
    fn parse_database() {
        let definitions = parse_custom_modifications(
            r#"[
                {"name": "Heavy", "synonyms": ["HeavyLabel"], "formula": "C2H3NO"},
                {"name": "Mystery", "mass": 123.456}
            ]"#,
        )
        .unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].formula, Some(molecular_formula!(C 2 H 3 N 1 O 1)));
        assert_relative_eq!(*definitions[0].mass, 57.021464, epsilon = 1e-6);
        assert_eq!(definitions[0].unimod_id, None);
        assert_eq!(definitions[1].formula, None);
        assert_relative_eq!(*definitions[1].mass, 123.456);
    }

    #[test]
    fn reject_invalid() {
        for json in [
            r#"[{"name": "Nothing"}]"#,
            r#"[{"name": "", "mass": 1.0}]"#,
            r#"[{"name": "+12", "mass": 12.0}]"#,
            r#"[{"name": "unimod:12", "mass": 12.0}]"#,
            r#"[{"name": "A[b]", "mass": 12.0}]"#,
            r#"[{"name": "Wrong", "formula": "O", "mass": 12.0}]"#,
            r#"[{"name": "Bad", "formula": "Xx2"}]"#,
            r#"{"name": "NotAList", "mass": 1.0}"#,
            r#"[{"mass": 1.0}]"#,
        ] {
            let error = parse_custom_modifications(json).unwrap_err();
            assert!(
                matches!(error.get_kind(), PeptideErrorKind::InvalidConfiguration),
                "{json}"
            );
        }
    }

    #[test]
    fn matching_mass_and_formula() {
        let definition = CustomModification {
            name: "Ox".to_string(),
            formula: Some("O".to_string()),
            mass: Some(15.9949),
            ..CustomModification::default()
        }
        .into_definition()
        .unwrap();
        assert_relative_eq!(*definition.mass, 15.99491461956, epsilon = 1e-9);
    }
}
