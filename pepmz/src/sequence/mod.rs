//! Annotated peptide sequences: tokenizing, resolving modifications, and building the peptide model

mod amino_acid;
mod modification;
mod peptide;
mod sequence_position;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use amino_acid::*;
pub use modification::*;
pub use peptide::*;
pub use sequence_position::*;
pub use tokenizer::*;
