//! Analysis of annotated sequences: validation, detection of modifications and charges, and
//! calculation of the mass over charge. The free functions use the built in modifications and
//! the default settings, use an [`Analyzer`] to use other settings or custom modifications.

mod analyzer;
mod notation;
mod preset;
mod result;

pub use analyzer::*;
pub use notation::*;
pub use preset::*;
pub use result::*;

use crate::error::PeptideError;

/// Check if the sequence is valid, see [`Analyzer::validate_sequence`]
pub fn validate_sequence(raw: &str) -> (bool, String) {
    Analyzer::default().validate_sequence(raw)
}

/// Analyse the sequence, see [`Analyzer::analyze_sequence`]
pub fn analyze_sequence(raw: &str) -> SequenceAnalysis {
    Analyzer::default().analyze_sequence(raw)
}

/// Calculate the mass over charge, see [`Analyzer::calculate_mz`]
/// # Errors
/// If the preset name is unknown, the sequence is invalid, or the charge is out of range.
pub fn calculate_mz(
    raw: &str,
    charge: isize,
    modification: Option<&str>,
) -> Result<CalculationResult, PeptideError<'static>> {
    Analyzer::default().calculate_mz(raw, charge, modification)
}

/// Place a modification preset on the sequence, see [`Analyzer::apply_modification`]
/// # Errors
/// If the preset name is unknown or the sequence is invalid.
pub fn apply_modification(raw: &str, modification: &str) -> Result<String, PeptideError<'static>> {
    Analyzer::default().apply_modification(raw, modification)
}

/// The display names of all modification presets, `None` first
pub fn list_supported_modifications() -> Vec<&'static str> {
    ModificationPreset::ALL
        .iter()
        .map(|preset| preset.display_name())
        .collect()
}

/// Examples of all supported notations with a description
pub const fn list_notation_examples() -> &'static [(&'static str, &'static str)] {
    NOTATION_EXAMPLES
}
