#![doc = include_str!("../README.md")]

mod helper_functions;

/// Validation, modification detection, and mass over charge calculation of annotated sequences.
pub mod analysis;
/// Contains all things related to the underlying chemistry.
pub mod chemistry;
pub mod error;
pub mod ontology;
/// Contains logic to parse the settings and custom modifications from JSON
pub mod parse_json;
/// Contains all things related to sequences, from the notation to the peptide with its modifications.
pub mod sequence;
pub mod settings;

/// A subset of the types and traits that are envisioned to be used the most, importing this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::analysis::{
        Analyzer, CalculationResult, ModificationPreset, SequenceAnalysis, analyze_sequence,
        apply_modification, calculate_mz, list_notation_examples, list_supported_modifications,
        validate_sequence,
    };
    pub use crate::chemistry::{ChargeSource, ChargeSpec, Element, MolecularFormula};
    pub use crate::error::{PeptideError, PeptideErrorKind};
    pub use crate::molecular_formula;
    pub use crate::ontology::{ModificationDatabase, ModificationDefinition, STATIC_DATABASE};
    pub use crate::parse_json::ParseJson;
    pub use crate::sequence::{AminoAcid, Modification, PeptideModel, SequencePosition};
    pub use crate::settings::Settings;
}
