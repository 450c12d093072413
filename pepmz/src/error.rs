//! The [`PeptideErrorKind`] which makes it easy for users of the error type to match on the exact reason an annotated sequence was rejected.

use std::fmt::Display;

use context_error::*;
use serde::{Deserialize, Serialize};

/// An error generated by any of the parsing, resolution, or calculation steps. It keeps the
/// offending input line with the offending part highlighted to be able to show great error
/// messages.
pub type PeptideError<'a> = BoxedError<'a, PeptideErrorKind>;

/// All kinds of errors that can be generated while handling an annotated peptide sequence.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PeptideErrorKind {
    /// The notation could not be split into residues, annotations, terminal markers, and a charge
    #[default]
    MalformedNotation,
    /// An amino acid outside the 20 letter alphabet, an empty sequence, or a second modification on a single position
    InvalidSequence,
    /// A named modification that is not known in the modification database
    UnknownModification,
    /// A `UNIMOD:<id>` reference to an accession that is not known in the modification database
    UnknownUnimodId,
    /// A charge outside of the supported range
    ChargeOutOfRange,
    /// A mass delta that could not be read as a number
    NumberParseError,
    /// The settings or the custom modification database are not valid
    InvalidConfiguration,
    /// The static data is corrupted, should never be seen in normal operation
    Internal,
}

impl ErrorKind for PeptideErrorKind {
    type Settings = ();
    fn descriptor(&self) -> &'static str {
        "error"
    }
    fn ignored(&self, _settings: Self::Settings) -> bool {
        false
    }
    fn is_error(&self, _settings: Self::Settings) -> bool {
        true
    }
}

impl Display for PeptideErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::MalformedNotation => "Malformed notation",
                Self::InvalidSequence => "Invalid sequence",
                Self::UnknownModification => "Unknown modification",
                Self::UnknownUnimodId => "Unknown Unimod accession",
                Self::ChargeOutOfRange => "Charge out of range",
                Self::NumberParseError => "Invalid number",
                Self::InvalidConfiguration => "Invalid configuration",
                Self::Internal => "Internal error",
            }
        )
    }
}

/// Create an error that highlights `len` bytes starting at `offset` in the given line.
pub(crate) fn error_at<'a>(
    kind: PeptideErrorKind,
    short_description: &'static str,
    long_description: impl Into<String>,
    line: &'a str,
    offset: usize,
    len: usize,
) -> PeptideError<'a> {
    BoxedError::new(
        kind,
        short_description,
        long_description.into(),
        Context::none()
            .lines(0, line)
            .add_highlight((0, offset..offset + len.max(1))),
    )
}

/// Render an error as a single line message, `<short description>: <long description>`.
pub fn error_message(error: &PeptideError<'_>) -> String {
    format!(
        "{}: {}",
        error.get_short_description(),
        error.get_long_description()
    )
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn message_contains_both_descriptions() {
        let error = error_at(
            PeptideErrorKind::InvalidSequence,
            "Invalid amino acid",
            "'B' is not one of the 20 standard amino acids",
            "PEBTIDE",
            2,
            1,
        );
        assert!(matches!(
            error.get_kind(),
            PeptideErrorKind::InvalidSequence
        ));
        let message = error_message(&error);
        assert!(message.starts_with("Invalid amino acid: "));
        assert!(message.contains("'B'"));
    }

    #[test]
    fn every_kind_is_an_error() {
        for kind in [
            PeptideErrorKind::MalformedNotation,
            PeptideErrorKind::InvalidSequence,
            PeptideErrorKind::UnknownModification,
            PeptideErrorKind::UnknownUnimodId,
            PeptideErrorKind::ChargeOutOfRange,
            PeptideErrorKind::NumberParseError,
            PeptideErrorKind::InvalidConfiguration,
            PeptideErrorKind::Internal,
        ] {
            assert!(kind.is_error(()));
            assert!(!kind.ignored(()));
        }
    }
}
