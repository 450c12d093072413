use std::sync::Arc;

use approx::assert_relative_eq;
use context_error::*;
use ordered_float::OrderedFloat;

use crate::{
    chemistry::ChargeSource,
    error::PeptideErrorKind,
    molecular_formula,
    ontology::{ModificationDatabase, ModificationDefinition, STATIC_DATABASE},
    sequence::{AminoAcid, Modification, PeptideModel, SequencePosition},
};

fn resolve(content: &str) -> Result<Modification, PeptideErrorKind> {
    let line = format!("M[{content}]");
    Modification::resolve(
        &line,
        2..2 + content.len(),
        SequencePosition::Index(0),
        &STATIC_DATABASE,
    )
    .map_err(|err| err.get_kind().clone())
}

#[test]
fn resolution_order() {
    assert_eq!(
        resolve("UNIMOD:35"),
        Ok(Modification::UnimodId(Arc::new(
            ModificationDefinition::with_formula(
                Some(35),
                "Oxidation",
                Vec::new(),
                molecular_formula!(O 1)
            )
        )))
    );
    assert_eq!(resolve("Oxidation").unwrap().unimod_id(), Some(35));
    assert!(matches!(
        resolve("Oxidation"),
        Ok(Modification::Named(_))
    ));
    assert_eq!(
        resolve("+15.9949"),
        Ok(Modification::MassDelta {
            mass: OrderedFloat(15.9949),
            raw: "+15.9949".into()
        })
    );
    assert_eq!(resolve("-1.5e2").unwrap().monoisotopic_mass(), -150.0);
    assert_eq!(resolve("+5.").unwrap().monoisotopic_mass(), 5.0);
    assert_eq!(resolve("Foo"), Err(PeptideErrorKind::UnknownModification));
    assert_eq!(resolve("UNIMOD:0"), Err(PeptideErrorKind::UnknownUnimodId));
    assert_eq!(resolve("+"), Err(PeptideErrorKind::NumberParseError));
}

#[test]
fn mass_delta_has_no_formula() {
    let modification = resolve("+42.0106").unwrap();
    assert_eq!(modification.formula(), None);
    assert_eq!(modification.definition(), None);
    assert_eq!(modification.unimod_id(), None);
    assert_eq!(modification.name(), "+42.0106");
    assert_eq!(modification.to_string(), "+42.0106");
}

#[test]
fn names_in_normalized_notation() {
    assert_eq!(resolve("phosphorylation").unwrap().to_string(), "Phospho");
    assert_eq!(resolve("unimod:21").unwrap().to_string(), "UNIMOD:21");
    assert_eq!(resolve("unimod:21").unwrap().name(), "Phospho");
}

#[test]
fn error_highlights_the_annotation() {
    let line = "PEPT[Foo]IDE";
    let error = PeptideModel::parse(line, &STATIC_DATABASE).unwrap_err();
    assert!(matches!(
        error.get_kind(),
        PeptideErrorKind::UnknownModification
    ));
    assert!(error.get_long_description().contains("'Foo'"));
    assert!(error.get_long_description().contains("residue 4"));
}

#[test]
fn invalid_residues_are_named() {
    let error = PeptideModel::parse("PEBTIXDEB", &STATIC_DATABASE).unwrap_err();
    assert!(matches!(error.get_kind(), PeptideErrorKind::InvalidSequence));
    let long = error.get_long_description();
    assert!(long.contains("'B'"), "{long}");
    assert!(long.contains("'X'"), "{long}");
    assert_eq!(long.matches("'B'").count(), 1, "{long}");
}

#[test]
fn positions() {
    let (peptide, charge) = PeptideModel::parse(
        "[Acetyl]-M[Oxidation]PEPC[UNIMOD:4]TIDE[+42.0106]-[Amidated]/3",
        &STATIC_DATABASE,
    )
    .unwrap();
    assert_eq!(charge, Some((61..62, ChargeSource::SequenceSlash)));
    assert_eq!(peptide.len(), 9);
    assert_eq!(peptide.residues()[0].amino_acid, AminoAcid::Methionine);
    assert_eq!(
        peptide
            .modifications()
            .map(|(position, modification)| (position, modification.name().to_string()))
            .collect::<Vec<_>>(),
        vec![
            (SequencePosition::NTerm, "Acetyl".to_string()),
            (SequencePosition::Index(0), "Oxidation".to_string()),
            (SequencePosition::Index(4), "Carbamidomethyl".to_string()),
            (SequencePosition::Index(8), "+42.0106".to_string()),
            (SequencePosition::CTerm, "Amidated".to_string()),
        ]
    );
    assert_eq!(
        peptide.to_string(),
        "[Acetyl]-M[Oxidation]PEPC[UNIMOD:4]TIDE[+42.0106]-[Amidated]"
    );
    assert_eq!(peptide.n_term().unwrap().unimod_id(), Some(1));
    assert_eq!(peptide.c_term().unwrap().unimod_id(), Some(2));
}

#[test]
fn add_modification() {
    let mut peptide = PeptideModel::from_amino_acids([
        AminoAcid::Methionine,
        AminoAcid::Lysine,
    ])
    .unwrap();
    let oxidation = Modification::Named(STATIC_DATABASE.get_by_name("Oxidation").unwrap().clone());
    assert!(peptide.add_modification(SequencePosition::Index(0), oxidation.clone()));
    assert!(!peptide.add_modification(SequencePosition::Index(0), oxidation.clone()));
    assert!(!peptide.add_modification(SequencePosition::Index(2), oxidation.clone()));
    assert!(peptide.add_modification(SequencePosition::CTerm, oxidation.clone()));
    assert_eq!(peptide.modification(SequencePosition::Index(0)), Some(&oxidation));
    assert_eq!(peptide.modification(SequencePosition::Index(1)), None);
    assert_eq!(peptide.to_string(), "M[Oxidation]K-[Oxidation]");
    assert!(PeptideModel::from_amino_acids([]).is_none());
}

#[test]
fn custom_database() {
    let database = ModificationDatabase::init_static().with_custom([ModificationDefinition {
        unimod_id: None,
        name: "Mystery".into(),
        synonyms: vec!["Enigma".into()],
        formula: None,
        mass: OrderedFloat(100.0),
    }]);
    let (peptide, _) = PeptideModel::parse("K[enigma]", &database).unwrap();
    assert_eq!(peptide.formula(), None);
    assert_relative_eq!(
        peptide.monoisotopic_mass(),
        AminoAcid::Lysine.monoisotopic_mass() + 100.0 + 18.0105646837,
        epsilon = 1e-9
    );
    assert_eq!(peptide.to_string(), "K[Mystery]");
    assert!(PeptideModel::parse("K[enigma]", &STATIC_DATABASE).is_err());
    assert!(PeptideModel::parse("K[Oxidation]", &ModificationDatabase::empty()).is_err());
}
