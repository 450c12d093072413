use std::{fmt::Display, str::FromStr};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PeptideError, PeptideErrorKind},
    ontology::ModificationDatabase,
    sequence::{AminoAcid, Modification, PeptideModel, SequencePosition},
};

/// The common modifications that can be applied to a plain sequence with a single choice
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ModificationPreset {
    /// Do not apply any modification
    #[default]
    None,
    /// Oxidation on every M
    Oxidation,
    /// Carbamidomethyl on every C
    Carbamidomethyl,
    /// Phospho on the first S, or if there is none the first T, or else the first Y
    Phosphorylation,
    /// Acetyl on the N-terminus
    Acetylation,
    /// Methyl on the first K, or if there is none the first R
    Methylation,
    /// Deamidated on the first N, or if there is none the first Q
    Deamidation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Placement {
    Every,
    First,
    NTerm,
}

impl ModificationPreset {
    /// All presets in display order
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Oxidation,
        Self::Carbamidomethyl,
        Self::Phosphorylation,
        Self::Acetylation,
        Self::Methylation,
        Self::Deamidation,
    ];

    /// The name shown to users
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Oxidation => "Oxidation (M)",
            Self::Carbamidomethyl => "Carbamidomethyl (C)",
            Self::Phosphorylation => "Phosphorylation (S/T/Y)",
            Self::Acetylation => "Acetylation (N-term)",
            Self::Methylation => "Methylation (K/R)",
            Self::Deamidation => "Deamidation (N/Q)",
        }
    }

    /// The Unimod accession of the applied modification
    pub const fn unimod_id(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Oxidation => Some(35),
            Self::Carbamidomethyl => Some(4),
            Self::Phosphorylation => Some(21),
            Self::Acetylation => Some(1),
            Self::Methylation => Some(34),
            Self::Deamidation => Some(7),
        }
    }

    /// The residues this preset is placed on, in order of preference
    pub const fn targets(self) -> &'static [AminoAcid] {
        match self {
            Self::None | Self::Acetylation => &[],
            Self::Oxidation => &[AminoAcid::Methionine],
            Self::Carbamidomethyl => &[AminoAcid::Cysteine],
            Self::Phosphorylation => &[
                AminoAcid::Serine,
                AminoAcid::Threonine,
                AminoAcid::Tyrosine,
            ],
            Self::Methylation => &[AminoAcid::Lysine, AminoAcid::Arginine],
            Self::Deamidation => &[AminoAcid::Asparagine, AminoAcid::Glutamine],
        }
    }

    const fn placement(self) -> Placement {
        match self {
            Self::None | Self::Oxidation | Self::Carbamidomethyl => Placement::Every,
            Self::Phosphorylation | Self::Methylation | Self::Deamidation => Placement::First,
            Self::Acetylation => Placement::NTerm,
        }
    }

    /// Check if this modification at this location is what this preset would place
    pub fn matches(
        self,
        position: SequencePosition,
        residue: Option<AminoAcid>,
        modification: &Modification,
    ) -> bool {
        self.unimod_id().is_some()
            && modification.unimod_id() == self.unimod_id()
            && match self.placement() {
                Placement::NTerm => position == SequencePosition::NTerm,
                Placement::Every | Placement::First => {
                    residue.is_some_and(|residue| self.targets().contains(&residue))
                }
            }
    }

    /// Place this preset on the peptide, positions that already carry a modification are
    /// skipped. Returns the number of placed modifications.
    /// # Errors
    /// If the modification of this preset is not in the database.
    pub fn apply(
        self,
        peptide: &mut PeptideModel,
        database: &ModificationDatabase,
    ) -> Result<usize, PeptideError<'static>> {
        let Some(id) = self.unimod_id() else {
            return Ok(0);
        };
        let definition = database.get_by_id(id).ok_or_else(|| {
            BoxedError::new(
                PeptideErrorKind::UnknownUnimodId,
                "Unknown Unimod accession",
                format!(
                    "The modification for '{self}' (UNIMOD:{id}) is not in the modification database"
                ),
                Context::none(),
            )
        })?;
        let modification = Modification::UnimodId(definition.clone());
        let view: &PeptideModel = peptide;
        let free = |amino_acid: AminoAcid| {
            view.residues()
                .iter()
                .enumerate()
                .filter(move |(_, residue)| {
                    residue.amino_acid == amino_acid && residue.modification.is_none()
                })
                .map(|(index, _)| SequencePosition::Index(index))
        };
        let positions: Vec<SequencePosition> = match self.placement() {
            Placement::NTerm => vec![SequencePosition::NTerm],
            Placement::Every => self
                .targets()
                .iter()
                .flat_map(|amino_acid| free(*amino_acid))
                .collect(),
            Placement::First => self
                .targets()
                .iter()
                .find_map(|amino_acid| free(*amino_acid).next())
                .into_iter()
                .collect(),
        };
        let mut placed = 0;
        for position in positions {
            if peptide.add_modification(position, modification.clone()) {
                placed += 1;
            }
        }
        log::debug!("Placed {placed} modification(s) for '{self}' on '{peptide}'");
        Ok(placed)
    }
}

impl Display for ModificationPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parse a preset by its display name, or the name without the site, ignoring casing
impl FromStr for ModificationPreset {
    type Err = PeptideError<'static>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| {
                let display = preset.display_name();
                display.eq_ignore_ascii_case(name)
                    || display
                        .split_once(" (")
                        .is_some_and(|(short, _)| short.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| {
                BoxedError::new(
                    PeptideErrorKind::UnknownModification,
                    "Unknown modification",
                    format!(
                        "'{name}' is not a supported modification, use one of: {}",
                        Self::ALL.map(Self::display_name).join(", ")
                    ),
                    Context::show(name.to_string()),
                )
            })
    }
}

/// A label for a modification at a position: the preset display name if it matches a preset,
/// otherwise `<name> (<site>)`
pub fn modification_label(
    peptide: &PeptideModel,
    position: SequencePosition,
    modification: &Modification,
) -> String {
    let residue = match position {
        SequencePosition::Index(index) => peptide
            .residues()
            .get(index)
            .map(|residue| residue.amino_acid),
        _ => None,
    };
    ModificationPreset::ALL
        .into_iter()
        .find(|preset| preset.matches(position, residue, modification))
        .map_or_else(
            || {
                let site = match (position, residue) {
                    (SequencePosition::NTerm, _) => "N-term".to_string(),
                    (SequencePosition::CTerm, _) => "C-term".to_string(),
                    (_, Some(residue)) => residue.to_string(),
                    (SequencePosition::Index(index), None) => (index + 1).to_string(),
                };
                format!("{} ({site})", modification.name())
            },
            |preset| preset.display_name().to_string(),
        )
}
