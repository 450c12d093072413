use serde::{Deserialize, Serialize};

/// A position on a sequence
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum SequencePosition {
    /// N-terminal
    NTerm,
    /// An amino acid at the given index (0 based)
    Index(usize),
    /// C-terminal
    CTerm,
}

impl Default for SequencePosition {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl std::fmt::Display for SequencePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NTerm => write!(f, "N-terminal"),
            Self::Index(index) => write!(f, "{}", index + 1),
            Self::CTerm => write!(f, "C-terminal"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_the_sequence() {
        let mut positions = vec![
            SequencePosition::CTerm,
            SequencePosition::Index(3),
            SequencePosition::NTerm,
            SequencePosition::Index(0),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                SequencePosition::NTerm,
                SequencePosition::Index(0),
                SequencePosition::Index(3),
                SequencePosition::CTerm
            ]
        );
        assert_eq!(SequencePosition::Index(0).to_string(), "1");
        assert_eq!(SequencePosition::NTerm.to_string(), "N-terminal");
    }
}
