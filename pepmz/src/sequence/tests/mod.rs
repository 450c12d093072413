#![allow(clippy::missing_panics_doc)]

/// Parse the case, check it parses identically when upper or lower cased (ignoring the raw
/// text of mass shifts) and that the normalized notation parses back into the same peptide.
macro_rules! positive_test {
    ($name:ident, $case:literal, $clean:literal) => {
        #[test]
        fn $name() {
            let database = &$crate::ontology::STATIC_DATABASE;
            let (peptide, _) = $crate::sequence::PeptideModel::parse($case, database)
                .unwrap_or_else(|err| panic!("{}\n{err}", $case));
            assert_eq!(peptide.clean_sequence(), $clean, "{}", $case);
            for other in [$case.to_ascii_uppercase(), $case.to_ascii_lowercase()] {
                let (other_peptide, _) = $crate::sequence::PeptideModel::parse(&other, database)
                    .unwrap_or_else(|err| panic!("{other}\n{err}"));
                assert_eq!(other_peptide.clean_sequence(), $clean, "{other}");
                approx::assert_relative_eq!(
                    other_peptide.monoisotopic_mass(),
                    peptide.monoisotopic_mass()
                );
            }
            let back = peptide.to_string();
            let (res_back, _) = $crate::sequence::PeptideModel::parse(&back, database)
                .unwrap_or_else(|err| panic!("{back}\n{err}"));
            assert_eq!(peptide, res_back, "{} != {back}", $case);
        }
    };
}

/// Parse the case and check it fails with the given error kind
macro_rules! negative_test {
    ($name:ident, $case:literal, $kind:ident) => {
        #[test]
        fn $name() {
            let res = $crate::sequence::PeptideModel::parse(
                $case,
                &$crate::ontology::STATIC_DATABASE,
            );
            match res {
                Ok((peptide, _)) => panic!("{} parsed as {peptide}", $case),
                Err(err) => assert!(
                    matches!(err.get_kind(), $crate::error::PeptideErrorKind::$kind),
                    "{}\n{err}",
                    $case
                ),
            }
        }
    };
}

mod parse;
mod positive;
