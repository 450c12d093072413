/// Examples of all supported notations with a short description
pub const NOTATION_EXAMPLES: &[(&str, &str)] = &[
    ("PEPTIDE", "Plain sequence of one letter amino acid codes"),
    ("peptide", "Lower case letters are read as upper case"),
    ("M[Oxidation]PEPTIDE", "Named modification directly after the residue"),
    ("M(Oxidation)PEPTIDE", "Named modification in round brackets"),
    ("PEPS[Phosphorylation]TIDE", "Modifications can also be named by a synonym"),
    ("PEPC[UNIMOD:4]TIDE", "Modification by Unimod accession"),
    ("PEPTIDE[+42.0106]", "Mass shift in Dalton, the formula becomes unknown"),
    ("PEPS[-79.9663]TIDE", "Negative mass shift"),
    ("PEPTIDE[+1.5e2]", "Mass shift in scientific notation"),
    (".(Acetyl)PEPTIDE", "N-terminal modification"),
    ("[Acetyl]-PEPTIDE", "N-terminal modification in ProForma notation"),
    ("PEPTIDE.(Amidated)", "C-terminal modification"),
    ("PEPTIDE-[Amidated]", "C-terminal modification in ProForma notation"),
    ("PEPTIDE/2", "Charge state, overrides the given charge"),
    ("PEPTIDE2", "Charge state as trailing digits"),
    (
        "[Acetyl]-M[Oxidation]PEPC[UNIMOD:4]TIDE-[Amidated]/3",
        "All notations combined",
    ),
];
