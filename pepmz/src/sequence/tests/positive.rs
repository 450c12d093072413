positive_test!(plain, "PEPTIDE", "PEPTIDE");
positive_test!(lower_case, "peptide", "PEPTIDE");
positive_test!(mixed_case, "PePtIdE", "PEPTIDE");
positive_test!(single_residue, "G", "G");
positive_test!(all_residues, "ACDEFGHIKLMNPQRSTVWY", "ACDEFGHIKLMNPQRSTVWY");
positive_test!(named_square, "M[Oxidation]PEPTIDE", "MPEPTIDE");
positive_test!(named_round, "M(Oxidation)PEPTIDE", "MPEPTIDE");
positive_test!(synonym, "PEPS[Phosphorylation]TIDE", "PEPSTIDE");
positive_test!(short_synonym, "PEPC[CAM]TIDE", "PEPCTIDE");
positive_test!(name_with_symbols, "E[Glu->pyro-Glu]PEPTIDE", "EPEPTIDE");
positive_test!(name_with_colon, "PEPTIDE[Cation:Na]", "PEPTIDE");
positive_test!(inner_whitespace, "M[ Oxidation ]PEPTIDE", "MPEPTIDE");
positive_test!(unimod, "PEPC[UNIMOD:4]TIDE", "PEPCTIDE");
positive_test!(unimod_lower_case, "PEPC(unimod:4)TIDE", "PEPCTIDE");
positive_test!(mass_delta, "PEPTIDE[+42.0106]", "PEPTIDE");
positive_test!(negative_mass_delta, "PEPS[-79.9663]TIDE", "PEPSTIDE");
positive_test!(scientific_mass_delta, "PEPTIDE[+1.5e2]", "PEPTIDE");
positive_test!(fraction_only_mass_delta, "PEPTIDE[+.5]", "PEPTIDE");
positive_test!(n_term_dot, ".(Acetyl)PEPTIDE", "PEPTIDE");
positive_test!(n_term_dot_square, ".[Acetyl]PEPTIDE", "PEPTIDE");
positive_test!(n_term_dot_only, ".PEPTIDE", "PEPTIDE");
positive_test!(n_term_dash, "[Acetyl]-PEPTIDE", "PEPTIDE");
positive_test!(c_term_dot, "PEPTIDE.(Amidated)", "PEPTIDE");
positive_test!(c_term_dash, "PEPTIDE-[Amidated]", "PEPTIDE");
positive_test!(slash_charge, "PEPTIDE/2", "PEPTIDE");
positive_test!(trailing_charge, "PEPTIDE2", "PEPTIDE");
positive_test!(trailing_charge_after_mod, "PEPTIDE[+42.0106]3", "PEPTIDE");
positive_test!(outer_whitespace, "  PEPTIDE/2\t", "PEPTIDE");
positive_test!(
    everything,
    "[Acetyl]-M[Oxidation]PEPC[UNIMOD:4]TIDE[+42.0106]-[Amidated]/3",
    "MPEPCTIDE"
);
positive_test!(
    everything_dots,
    ".(Acetyl)M(Oxidation)PEPC(UNIMOD:4)TIDE(+42.0106).(Amidated)10",
    "MPEPCTIDE"
);
