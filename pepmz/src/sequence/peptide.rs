//! The structured peptide model and its mass calculations

use std::{collections::BTreeMap, fmt::Display, ops::Range};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::{ChargeSource, MolecularFormula, mass_over_charge, water},
    error::{PeptideError, PeptideErrorKind, error_at},
    ontology::ModificationDatabase,
    sequence::{
        AminoAcid, Modification, ResolvedAnnotation, SequencePosition, Token, embedded_charge,
        resolve_annotations, tokenize,
    },
};

/// A single residue in a peptide
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Residue {
    /// The amino acid
    pub amino_acid: AminoAcid,
    /// The modification on this residue, if any
    pub modification: Option<Modification>,
}

impl From<AminoAcid> for Residue {
    fn from(amino_acid: AminoAcid) -> Self {
        Self {
            amino_acid,
            modification: None,
        }
    }
}

/// A linear peptide with at most one modification per residue and per terminus. A model
/// always contains at least one residue.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PeptideModel {
    n_term: Option<Modification>,
    residues: Vec<Residue>,
    c_term: Option<Modification>,
}

impl PeptideModel {
    /// Create an unmodified peptide, returns None if there are no amino acids
    pub fn from_amino_acids(amino_acids: impl IntoIterator<Item = AminoAcid>) -> Option<Self> {
        let residues = amino_acids
            .into_iter()
            .map(Residue::from)
            .collect::<Vec<_>>();
        (!residues.is_empty()).then_some(Self {
            n_term: None,
            residues,
            c_term: None,
        })
    }

    /// Parse an annotated sequence: tokenize, resolve all annotations, and build the model.
    /// Also returns the location and notation of the embedded charge, if any.
    /// # Errors
    /// If any of the steps fails, see [`tokenize`], [`Modification::resolve`], and [`Self::build`].
    pub fn parse<'a>(
        line: &'a str,
        database: &ModificationDatabase,
    ) -> Result<(Self, Option<(Range<usize>, ChargeSource)>), PeptideError<'a>> {
        let tokens = tokenize(line)?;
        let annotations = resolve_annotations(line, &tokens, database)?;
        let peptide = Self::build(line, &tokens, annotations)?;
        Ok((peptide, embedded_charge(&tokens)))
    }

    /// Build a model from tokens and the resolved annotations for these tokens.
    /// # Errors
    /// An [`PeptideErrorKind::InvalidSequence`] error if any residue is not one of the 20
    /// standard amino acids, if there are no residues, or if a position carries two modifications.
    pub fn build<'a>(
        line: &'a str,
        tokens: &[Token<'a>],
        annotations: Vec<ResolvedAnnotation>,
    ) -> Result<Self, PeptideError<'a>> {
        let mut residues = Vec::new();
        let mut invalid = Vec::new();
        for token in tokens {
            if let Token::Residue { code, offset } = token {
                match AminoAcid::from_code(*code) {
                    Some(amino_acid) => residues.push(Residue::from(amino_acid)),
                    None => invalid.push((*code, *offset)),
                }
            }
        }
        if let Some((_, offset)) = invalid.first() {
            return Err(error_at(
                PeptideErrorKind::InvalidSequence,
                "Invalid amino acid",
                format!(
                    "{} {} not one of the 20 standard amino acids ({})",
                    invalid
                        .iter()
                        .map(|(code, _)| format!("'{code}'"))
                        .unique()
                        .join(", "),
                    if invalid.len() == 1 { "is" } else { "are" },
                    AminoAcid::ALPHABET
                ),
                line,
                *offset,
                1,
            ));
        }
        if residues.is_empty() {
            return Err(error_at(
                PeptideErrorKind::InvalidSequence,
                "Invalid sequence",
                "The sequence does not contain any amino acids",
                line,
                0,
                line.len(),
            ));
        }

        let mut peptide = Self {
            n_term: None,
            residues,
            c_term: None,
        };
        for annotation in annotations {
            let slot = peptide.slot(annotation.attachment).ok_or_else(|| {
                error_at(
                    PeptideErrorKind::Internal,
                    "Invalid modification position",
                    format!(
                        "The modification is placed at {}, which is outside of the sequence",
                        annotation.attachment
                    ),
                    line,
                    annotation.range.start,
                    annotation.range.len(),
                )
            })?;
            if let Some(existing) = slot {
                return Err(error_at(
                    PeptideErrorKind::InvalidSequence,
                    "Multiple modifications",
                    format!(
                        "Position {} already carries '{existing}', a second modification '{}' is not allowed",
                        annotation.attachment, annotation.modification
                    ),
                    line,
                    annotation.range.start,
                    annotation.range.len(),
                ));
            }
            *slot = Some(annotation.modification);
        }
        Ok(peptide)
    }

    fn slot(&mut self, position: SequencePosition) -> Option<&mut Option<Modification>> {
        match position {
            SequencePosition::NTerm => Some(&mut self.n_term),
            SequencePosition::Index(index) => self
                .residues
                .get_mut(index)
                .map(|residue| &mut residue.modification),
            SequencePosition::CTerm => Some(&mut self.c_term),
        }
    }

    /// Place a modification at the given position, returns false if the position already
    /// carries a modification or does not exist
    pub fn add_modification(
        &mut self,
        position: SequencePosition,
        modification: Modification,
    ) -> bool {
        match self.slot(position) {
            Some(slot) if slot.is_none() => {
                *slot = Some(modification);
                true
            }
            _ => false,
        }
    }

    /// The modification at the given position
    pub fn modification(&self, position: SequencePosition) -> Option<&Modification> {
        match position {
            SequencePosition::NTerm => self.n_term.as_ref(),
            SequencePosition::Index(index) => self
                .residues
                .get(index)
                .and_then(|residue| residue.modification.as_ref()),
            SequencePosition::CTerm => self.c_term.as_ref(),
        }
    }

    /// All modifications with their position, from N to C terminal
    pub fn modifications(&self) -> impl Iterator<Item = (SequencePosition, &Modification)> {
        self.n_term
            .iter()
            .map(|m| (SequencePosition::NTerm, m))
            .chain(self.residues.iter().enumerate().filter_map(|(index, residue)| {
                residue
                    .modification
                    .as_ref()
                    .map(|m| (SequencePosition::Index(index), m))
            }))
            .chain(self.c_term.iter().map(|m| (SequencePosition::CTerm, m)))
    }

    /// The residues
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// The N-terminal modification
    pub const fn n_term(&self) -> Option<&Modification> {
        self.n_term.as_ref()
    }

    /// The C-terminal modification
    pub const fn c_term(&self) -> Option<&Modification> {
        self.c_term.as_ref()
    }

    /// The number of residues
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always false, a peptide always has at least one residue
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// The one letter codes of all residues, without any modifications
    pub fn clean_sequence(&self) -> String {
        self.residues
            .iter()
            .map(|residue| residue.amino_acid.one_letter_code())
            .collect()
    }

    /// The monoisotopic mass: all residues, all modifications, and one water
    pub fn monoisotopic_mass(&self) -> f64 {
        self.residues
            .iter()
            .map(|residue| residue.amino_acid.monoisotopic_mass())
            .sum::<f64>()
            + self
                .modifications()
                .map(|(_, modification)| modification.monoisotopic_mass())
                .sum::<f64>()
            + water().monoisotopic_mass()
    }

    /// The mass over charge for the given charge, which should be within [`crate::chemistry::CHARGE_RANGE`]
    pub fn mz(&self, charge: isize) -> f64 {
        mass_over_charge(self.monoisotopic_mass(), charge)
    }

    /// The elemental formula, only known if all modifications have a known formula
    pub fn formula(&self) -> Option<MolecularFormula> {
        let mut formula = water();
        for residue in &self.residues {
            formula += residue.amino_acid.formula();
        }
        for (_, modification) in self.modifications() {
            formula += modification.formula()?;
        }
        Some(formula)
    }

    /// The number of times each amino acid occurs, sorted on the one letter code
    pub fn amino_acid_composition(&self) -> BTreeMap<char, usize> {
        let mut composition = BTreeMap::new();
        for residue in &self.residues {
            *composition
                .entry(residue.amino_acid.one_letter_code())
                .or_insert(0) += 1;
        }
        composition
    }
}

/// The normalized notation, eg `[Acetyl]-M[Oxidation]PEPTIDE-[Amidated]`
impl Display for PeptideModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(modification) = &self.n_term {
            write!(f, "[{modification}]-")?;
        }
        for residue in &self.residues {
            write!(f, "{}", residue.amino_acid)?;
            if let Some(modification) = &residue.modification {
                write!(f, "[{modification}]")?;
            }
        }
        if let Some(modification) = &self.c_term {
            write!(f, "-[{modification}]")?;
        }
        Ok(())
    }
}
