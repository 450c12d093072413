use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{chemistry::MolecularFormula, molecular_formula};

/// The 20 standard amino acids, sorted alphabetically on their one letter code
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[allow(missing_docs)]
pub enum AminoAcid {
    Alanine,
    Cysteine,
    AsparticAcid,
    GlutamicAcid,
    Phenylalanine,
    Glycine,
    Histidine,
    Isoleucine,
    Lysine,
    Leucine,
    Methionine,
    Asparagine,
    Proline,
    Glutamine,
    Arginine,
    Serine,
    Threonine,
    Valine,
    Tryptophan,
    Tyrosine,
}

impl AminoAcid {
    /// All amino acids in alphabetical order of their one letter code
    pub const ALL: [Self; 20] = [
        Self::Alanine,
        Self::Cysteine,
        Self::AsparticAcid,
        Self::GlutamicAcid,
        Self::Phenylalanine,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Lysine,
        Self::Leucine,
        Self::Methionine,
        Self::Asparagine,
        Self::Proline,
        Self::Glutamine,
        Self::Arginine,
        Self::Serine,
        Self::Threonine,
        Self::Valine,
        Self::Tryptophan,
        Self::Tyrosine,
    ];

    /// The one letter codes of all amino acids, in the same order as [`Self::ALL`]
    pub const ALPHABET: &'static str = "ACDEFGHIKLMNPQRSTVWY";

    /// Get the amino acid for this uppercase one letter code
    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'A' => Self::Alanine,
            'C' => Self::Cysteine,
            'D' => Self::AsparticAcid,
            'E' => Self::GlutamicAcid,
            'F' => Self::Phenylalanine,
            'G' => Self::Glycine,
            'H' => Self::Histidine,
            'I' => Self::Isoleucine,
            'K' => Self::Lysine,
            'L' => Self::Leucine,
            'M' => Self::Methionine,
            'N' => Self::Asparagine,
            'P' => Self::Proline,
            'Q' => Self::Glutamine,
            'R' => Self::Arginine,
            'S' => Self::Serine,
            'T' => Self::Threonine,
            'V' => Self::Valine,
            'W' => Self::Tryptophan,
            'Y' => Self::Tyrosine,
            _ => return None,
        })
    }

    /// The one letter code
    pub const fn one_letter_code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    /// The three letter code
    pub const fn three_letter_code(self) -> &'static str {
        match self {
            Self::Alanine => "Ala",
            Self::Cysteine => "Cys",
            Self::AsparticAcid => "Asp",
            Self::GlutamicAcid => "Glu",
            Self::Phenylalanine => "Phe",
            Self::Glycine => "Gly",
            Self::Histidine => "His",
            Self::Isoleucine => "Ile",
            Self::Lysine => "Lys",
            Self::Leucine => "Leu",
            Self::Methionine => "Met",
            Self::Asparagine => "Asn",
            Self::Proline => "Pro",
            Self::Glutamine => "Gln",
            Self::Arginine => "Arg",
            Self::Serine => "Ser",
            Self::Threonine => "Thr",
            Self::Valine => "Val",
            Self::Tryptophan => "Trp",
            Self::Tyrosine => "Tyr",
        }
    }

    /// The elemental composition of this amino acid as a residue in a peptide chain (so
    /// without the water lost when forming the peptide bond)
    pub fn formula(self) -> MolecularFormula {
        match self {
            Self::Alanine => molecular_formula!(C 3 H 5 N 1 O 1),
            Self::Cysteine => molecular_formula!(C 3 H 5 N 1 O 1 S 1),
            Self::AsparticAcid => molecular_formula!(C 4 H 5 N 1 O 3),
            Self::GlutamicAcid => molecular_formula!(C 5 H 7 N 1 O 3),
            Self::Phenylalanine => molecular_formula!(C 9 H 9 N 1 O 1),
            Self::Glycine => molecular_formula!(C 2 H 3 N 1 O 1),
            Self::Histidine => molecular_formula!(C 6 H 7 N 3 O 1),
            Self::Isoleucine | Self::Leucine => molecular_formula!(C 6 H 11 N 1 O 1),
            Self::Lysine => molecular_formula!(C 6 H 12 N 2 O 1),
            Self::Methionine => molecular_formula!(C 5 H 9 N 1 O 1 S 1),
            Self::Asparagine => molecular_formula!(C 4 H 6 N 2 O 2),
            Self::Proline => molecular_formula!(C 5 H 7 N 1 O 1),
            Self::Glutamine => molecular_formula!(C 5 H 8 N 2 O 2),
            Self::Arginine => molecular_formula!(C 6 H 12 N 4 O 1),
            Self::Serine => molecular_formula!(C 3 H 5 N 1 O 2),
            Self::Threonine => molecular_formula!(C 4 H 7 N 1 O 2),
            Self::Valine => molecular_formula!(C 5 H 9 N 1 O 1),
            Self::Tryptophan => molecular_formula!(C 11 H 10 N 2 O 1),
            Self::Tyrosine => molecular_formula!(C 9 H 9 N 1 O 2),
        }
    }

    /// The monoisotopic residue mass in Dalton
    pub fn monoisotopic_mass(self) -> f64 {
        self.formula().monoisotopic_mass()
    }
}

impl Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_letter_code())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn codes_are_consistent() {
        assert_eq!(
            AminoAcid::ALL
                .iter()
                .map(|aa| aa.one_letter_code())
                .collect::<String>(),
            AminoAcid::ALPHABET
        );
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_code(aa.one_letter_code()), Some(aa));
        }
        for code in ['B', 'J', 'O', 'U', 'X', 'Z', 'a', '1'] {
            assert_eq!(AminoAcid::from_code(code), None);
        }
        assert_eq!(AminoAcid::Tryptophan.three_letter_code(), "Trp");
        assert_eq!(AminoAcid::GlutamicAcid.to_string(), "E");
        let mut sorted = AminoAcid::ALL;
        sorted.sort();
        assert_eq!(sorted, AminoAcid::ALL);
    }

    #[test]
    fn residue_masses() {
        for (aa, mass) in [
            (AminoAcid::Glycine, 57.021464),
            (AminoAcid::Alanine, 71.037114),
            (AminoAcid::Serine, 87.032028),
            (AminoAcid::Proline, 97.052764),
            (AminoAcid::Valine, 99.068414),
            (AminoAcid::Threonine, 101.047679),
            (AminoAcid::Cysteine, 103.009185),
            (AminoAcid::Leucine, 113.084064),
            (AminoAcid::Isoleucine, 113.084064),
            (AminoAcid::Asparagine, 114.042927),
            (AminoAcid::AsparticAcid, 115.026943),
            (AminoAcid::Glutamine, 128.058578),
            (AminoAcid::Lysine, 128.094963),
            (AminoAcid::GlutamicAcid, 129.042593),
            (AminoAcid::Methionine, 131.040485),
            (AminoAcid::Histidine, 137.058912),
            (AminoAcid::Phenylalanine, 147.068414),
            (AminoAcid::Arginine, 156.101111),
            (AminoAcid::Tyrosine, 163.063329),
            (AminoAcid::Tryptophan, 186.079313),
        ] {
            assert_relative_eq!(aa.monoisotopic_mass(), mass, epsilon = 1e-5);
        }
    }
}
