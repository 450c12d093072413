//! The built in selection of Unimod modifications

use crate::chemistry::Element::{self, *};

/// A built in Unimod entry: accession, name, synonyms, and the elemental difference
pub(crate) type UnimodEntry = (
    usize,
    &'static str,
    &'static [&'static str],
    &'static [(Element, i32)],
);

/// The common modifications with their Unimod accession and elemental difference. The mass is
/// always derived from the formula.
pub(crate) const UNIMOD_ENTRIES: &[UnimodEntry] = &[
    (1, "Acetyl", &["Acetylation"], &[(C, 2), (H, 2), (O, 1)]),
    (2, "Amidated", &["Amidation"], &[(H, 1), (N, 1), (O, -1)]),
    (3, "Biotin", &[], &[(C, 10), (H, 14), (N, 2), (O, 2), (S, 1)]),
    (
        4,
        "Carbamidomethyl",
        &["CAM", "Carbamidomethylation"],
        &[(C, 2), (H, 3), (N, 1), (O, 1)],
    ),
    (5, "Carbamyl", &["Carbamylation"], &[(C, 1), (H, 1), (N, 1), (O, 1)]),
    (7, "Deamidated", &["Deamidation"], &[(H, -1), (N, -1), (O, 1)]),
    (21, "Phospho", &["Phosphorylation"], &[(H, 1), (O, 3), (P, 1)]),
    (23, "Dehydrated", &["Dehydration"], &[(H, -2), (O, -1)]),
    (27, "Glu->pyro-Glu", &[], &[(H, -2), (O, -1)]),
    (28, "Gln->pyro-Glu", &[], &[(H, -3), (N, -1)]),
    (30, "Cation:Na", &[], &[(H, -1), (Na, 1)]),
    (34, "Methyl", &["Methylation"], &[(C, 1), (H, 2)]),
    (35, "Oxidation", &[], &[(O, 1)]),
    (36, "Dimethyl", &["Dimethylation"], &[(C, 2), (H, 4)]),
    (37, "Trimethyl", &["Trimethylation"], &[(C, 3), (H, 6)]),
    (39, "Methylthio", &[], &[(C, 1), (H, 2), (S, 1)]),
    (40, "Sulfo", &["Sulfation"], &[(O, 3), (S, 1)]),
    (41, "Hex", &[], &[(C, 6), (H, 10), (O, 5)]),
    (43, "HexNAc", &[], &[(C, 8), (H, 13), (N, 1), (O, 5)]),
    (58, "Propionyl", &[], &[(C, 3), (H, 4), (O, 1)]),
    (64, "Succinyl", &[], &[(C, 4), (H, 4), (O, 3)]),
    (121, "GlyGly", &["Ubiquitination"], &[(C, 4), (H, 6), (N, 2), (O, 2)]),
    (122, "Formyl", &["Formylation"], &[(C, 1), (O, 1)]),
    (312, "Cysteinyl", &[], &[(C, 3), (H, 5), (N, 1), (O, 2), (S, 1)]),
    (345, "Trioxidation", &[], &[(O, 3)]),
    (354, "Nitro", &["Nitration"], &[(H, -1), (N, 1), (O, 2)]),
    (425, "Dioxidation", &[], &[(O, 2)]),
    (530, "Cation:K", &[], &[(H, -1), (K, 1)]),
    (747, "Malonyl", &[], &[(C, 3), (H, 2), (O, 3)]),
    (1289, "Butyryl", &[], &[(C, 4), (H, 6), (O, 1)]),
    (1363, "Crotonyl", &[], &[(C, 4), (H, 4), (O, 1)]),
];

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use super::*;
    use crate::chemistry::MolecularFormula;

    #[test]
    fn unique_accessions_and_names() {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for (id, name, synonyms, _) in UNIMOD_ENTRIES {
            assert!(ids.insert(*id), "Duplicate accession {id}");
            assert!(names.insert(name.to_ascii_lowercase()), "Duplicate name {name}");
            for synonym in *synonyms {
                assert!(
                    names.insert(synonym.to_ascii_lowercase()),
                    "Duplicate synonym {synonym}"
                );
            }
        }
    }

    #[test]
    fn reference_masses() {
        for (id, expected) in [
            (1, 42.010565),
            (2, -0.984016),
            (3, 226.077598),
            (4, 57.021464),
            (5, 43.005814),
            (7, 0.984016),
            (21, 79.966331),
            (34, 14.01565),
            (35, 15.994915),
            (121, 114.042927),
        ] {
            let (_, _, _, formula) = UNIMOD_ENTRIES
                .iter()
                .find(|entry| entry.0 == id)
                .unwrap();
            assert_relative_eq!(
                MolecularFormula::new(formula).monoisotopic_mass(),
                expected,
                epsilon = 1e-5
            );
        }
    }
}
