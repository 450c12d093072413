use context_error::*;
use itertools::Itertools;

use crate::{
    analysis::{
        CalculationResult, ModificationPreset, SequenceAnalysis, modification_label,
    },
    chemistry::{ChargeSource, ChargeSpec},
    error::{PeptideError, error_message},
    ontology::{ModificationDatabase, STATIC_DATABASE},
    sequence::{PeptideModel, embedded_charge, resolve_annotations, tokenize},
    settings::Settings,
};

/// Analyses annotated sequences using a modification database and settings. Any number of
/// analyses can run at the same time, the analyzer is never changed by an analysis.
///
/// ```rust
/// use pepmz::analysis::Analyzer;
/// let analyzer = Analyzer::default();
/// let result = analyzer.calculate_mz("PEPTIDE", 2, None).unwrap();
/// assert!((result.mz_ratio - 400.687259).abs() < 1e-5);
/// assert_eq!(result.molecular_formula, "C34H53N7O15");
/// ```
#[derive(Clone, Debug)]
pub struct Analyzer<'db> {
    database: &'db ModificationDatabase,
    settings: Settings,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(&STATIC_DATABASE, Settings::default())
    }
}

impl<'db> Analyzer<'db> {
    /// Create an analyzer with the given database and settings
    pub const fn new(database: &'db ModificationDatabase, settings: Settings) -> Self {
        Self { database, settings }
    }

    /// The settings
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The modification database
    pub const fn database(&self) -> &'db ModificationDatabase {
        self.database
    }

    /// Run all steps on an annotated sequence: tokenize, resolve the modifications, resolve
    /// the charge (`charge` is used if the sequence contains no charge), and build the peptide.
    /// # Errors
    /// The error of the first step that fails.
    pub fn parse<'a>(
        &self,
        line: &'a str,
        charge: isize,
    ) -> Result<(PeptideModel, ChargeSpec), PeptideError<'a>> {
        let tokens = tokenize(line)?;
        let annotations = resolve_annotations(line, &tokens, self.database)?;
        let charge = ChargeSpec::resolve(line, embedded_charge(&tokens), charge)?;
        let peptide = PeptideModel::build(line, &tokens, annotations)?;
        Ok((peptide, charge))
    }

    /// Check if the sequence is valid, returns the clean sequence, or the upper cased letters
    /// of the input if it is not valid.
    pub fn validate_sequence(&self, raw: &str) -> (bool, String) {
        match self.parse(raw, self.settings.default_charge) {
            Ok((peptide, _)) => (true, peptide.clean_sequence()),
            Err(_) => (false, fallback_clean_sequence(raw)),
        }
    }

    /// Analyse the sequence, any errors are reported in the analysis
    pub fn analyze_sequence(&self, raw: &str) -> SequenceAnalysis {
        log::debug!("Analysing '{raw}'");
        match self.parse(raw, self.settings.default_charge) {
            Ok((peptide, charge)) => {
                let labels = labels(&peptide);
                let detected = labels.iter().unique().count() == 1;
                SequenceAnalysis {
                    is_valid: true,
                    clean_sequence: peptide.clean_sequence(),
                    modification: if detected {
                        labels[0].clone()
                    } else {
                        ModificationPreset::None.to_string()
                    },
                    modification_detected: detected,
                    modifications: labels,
                    charge: charge.charge,
                    charge_detected: charge.source.is_embedded(),
                    charge_source: charge.source,
                    error_message: None,
                }
            }
            Err(err) => {
                log::debug!("Invalid sequence '{raw}': {err}");
                SequenceAnalysis {
                    is_valid: false,
                    clean_sequence: fallback_clean_sequence(raw),
                    modification: ModificationPreset::None.to_string(),
                    modification_detected: false,
                    modifications: Vec::new(),
                    charge: self.settings.default_charge,
                    charge_detected: false,
                    charge_source: ChargeSource::UserInput,
                    error_message: Some(error_message(&err)),
                }
            }
        }
    }

    /// Place the named preset on the sequence and return the normalized notation, including
    /// the embedded charge if any. The preset `None` returns the sequence unchanged.
    /// # Errors
    /// If the preset name is unknown or the sequence is invalid.
    pub fn apply_modification(
        &self,
        raw: &str,
        modification: &str,
    ) -> Result<String, PeptideError<'static>> {
        let preset = modification.parse::<ModificationPreset>()?;
        self.annotate(raw, preset, self.settings.default_charge)
    }

    /// Parse, apply the preset, and render again. Placed presets are written as Unimod
    /// accessions so they resolve to the same definition when parsed again.
    fn annotate(
        &self,
        raw: &str,
        preset: ModificationPreset,
        charge: isize,
    ) -> Result<String, PeptideError<'static>> {
        if preset == ModificationPreset::None {
            return Ok(raw.to_string());
        }
        let (mut peptide, charge) = self.parse(raw, charge).map_err(BoxedError::to_owned)?;
        preset.apply(&mut peptide, self.database)?;
        let annotated = match charge.source {
            ChargeSource::UserInput => peptide.to_string(),
            ChargeSource::SequenceSlash => format!("{peptide}/{}", charge.charge),
            ChargeSource::SequenceTrailingDigit => format!("{peptide}{}", charge.charge),
        };
        Ok(annotated)
    }

    /// Calculate the mass over charge and other properties of the sequence. If a modification
    /// preset is named it is placed on the sequence first, then the annotated sequence is
    /// analysed. A charge embedded in the sequence overrides the given charge. The reported
    /// modification lists the labels of all modifications on the final peptide, from N to C
    /// terminal, or `None` if there are none.
    /// # Errors
    /// If the preset name is unknown, the sequence is invalid, or the charge is out of range.
    pub fn calculate_mz(
        &self,
        raw: &str,
        charge: isize,
        modification: Option<&str>,
    ) -> Result<CalculationResult, PeptideError<'static>> {
        let preset = modification
            .map(str::parse::<ModificationPreset>)
            .transpose()?
            .unwrap_or_default();
        let annotated = self.annotate(raw, preset, charge)?;
        let (peptide, charge) = self
            .parse(&annotated, charge)
            .map_err(BoxedError::to_owned)?;
        let detected = labels(&peptide);
        let modification = if detected.is_empty() {
            ModificationPreset::None.to_string()
        } else {
            detected.into_iter().unique().join(", ")
        };
        let result = CalculationResult {
            mz_ratio: peptide.mz(charge.charge),
            monoisotopic_mass: peptide.monoisotopic_mass(),
            charge_state: charge.charge,
            charge_source: charge.source,
            original_sequence: raw.to_string(),
            modified_sequence: peptide.to_string(),
            clean_sequence: peptide.clean_sequence(),
            molecular_formula: peptide.formula().map_or_else(
                || self.settings.formula_unknown_marker.clone(),
                |formula| formula.hill_notation(),
            ),
            sequence_length: peptide.len(),
            aa_composition: peptide.amino_acid_composition(),
            modification,
        };
        log::debug!(
            "Calculated '{}' at charge {}: m/z {:.6}",
            result.modified_sequence,
            result.charge_state,
            result.mz_ratio
        );
        Ok(result)
    }

    /// All names and synonyms that can be used in modification annotations
    pub fn list_modification_names(&self) -> Vec<String> {
        self.database.names()
    }
}

fn labels(peptide: &PeptideModel) -> Vec<String> {
    peptide
        .modifications()
        .map(|(position, modification)| modification_label(peptide, position, modification))
        .collect()
}

/// The upper cased ASCII letters of the input
fn fallback_clean_sequence(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
