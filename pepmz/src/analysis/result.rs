use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chemistry::ChargeSource;

/// The outcome of analysing an annotated sequence, for pre-filling the fields of a user interface
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct SequenceAnalysis {
    /// If the sequence could be parsed completely
    pub is_valid: bool,
    /// The residues without any notation, if invalid the upper cased letters of the input
    pub clean_sequence: String,
    /// The detected modification if exactly one kind was found, otherwise `None`
    pub modification: String,
    /// If exactly one kind of modification was found
    pub modification_detected: bool,
    /// The labels for all modifications, from N to C terminal
    pub modifications: Vec<String>,
    /// The embedded charge, or the default charge
    pub charge: isize,
    /// If the charge was embedded in the sequence
    pub charge_detected: bool,
    /// Where the charge came from
    pub charge_source: ChargeSource,
    /// The reason the sequence is not valid
    pub error_message: Option<String>,
}

/// The calculated properties of a peptide
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CalculationResult {
    /// The mass over charge
    pub mz_ratio: f64,
    /// The neutral monoisotopic mass in Dalton
    pub monoisotopic_mass: f64,
    /// The charge used
    pub charge_state: isize,
    /// Where the charge came from
    pub charge_source: ChargeSource,
    /// The sequence as given
    pub original_sequence: String,
    /// The normalized notation of the sequence that was used, with all modifications
    pub modified_sequence: String,
    /// The residues without any notation
    pub clean_sequence: String,
    /// The formula in Hill notation, or the unknown marker if any modification has no formula
    pub molecular_formula: String,
    /// The number of residues
    pub sequence_length: usize,
    /// The number of times each amino acid occurs, sorted on the one letter code
    pub aa_composition: BTreeMap<char, usize>,
    /// The applied or detected modification
    pub modification: String,
}
