//! Splitting an annotated sequence into residues, annotations, terminal markers, and a charge

use std::ops::Range;

use crate::{
    chemistry::ChargeSource,
    error::{PeptideError, PeptideErrorKind, error_at},
    helper_functions::{char_len_at, digits_from, end_of_enclosure},
    sequence::SequencePosition,
};

/// The kind of bracket used for an annotation
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Bracket {
    /// `[...]`
    Square,
    /// `(...)`
    Round,
}

impl Bracket {
    const fn close(self) -> u8 {
        match self {
            Self::Square => b']',
            Self::Round => b')',
        }
    }
}

/// A single part of an annotated sequence. All ranges and offsets are byte offsets into the
/// full line that was tokenized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token<'a> {
    /// Start of the N-terminal annotation, either a leading `.` or the `-` after `[...]`
    NTermMarker {
        /// The offset of the marker
        offset: usize,
    },
    /// A residue, the letter is already upper cased but not yet checked against the alphabet
    Residue {
        /// The upper cased letter
        code: char,
        /// The offset of the letter
        offset: usize,
    },
    /// The verbatim content of a bracketed annotation
    Annotation {
        /// The text between the brackets
        content: &'a str,
        /// The range of the content (excluding the brackets)
        range: Range<usize>,
        /// The bracket used
        bracket: Bracket,
        /// What this annotation is attached to
        attachment: SequencePosition,
    },
    /// Start of the C-terminal annotation, `.` or `-` after the last residue
    CTermMarker {
        /// The offset of the marker
        offset: usize,
    },
    /// The charge digits
    Charge {
        /// The range of the digits (excluding a slash)
        digits: Range<usize>,
        /// The notation used
        source: ChargeSource,
    },
}

fn malformed<'a>(
    line: &'a str,
    short_description: &'static str,
    long_description: impl Into<String>,
    offset: usize,
    len: usize,
) -> PeptideError<'a> {
    error_at(
        PeptideErrorKind::MalformedNotation,
        short_description,
        long_description,
        line,
        offset,
        len,
    )
}

/// Find the closing bracket for the opening bracket at `index`, returns the index of the closing bracket
fn closing_bracket(line: &str, end: usize, index: usize) -> Result<(usize, Bracket), PeptideError<'_>> {
    let bracket = if line.as_bytes()[index] == b'[' {
        Bracket::Square
    } else {
        Bracket::Round
    };
    let open = line.as_bytes()[index];
    end_of_enclosure(&line[..end], index + 1, open, bracket.close())
        .map(|close| (close, bracket))
        .ok_or_else(|| {
            malformed(
                line,
                "Invalid modification",
                "No matching closing bracket found",
                index,
                1,
            )
        })
}

/// Split an annotated sequence into its tokens. Leading and trailing whitespace is ignored.
///
/// The supported notations are:
/// * residues: letters, in any casing
/// * residue annotations: `M[Oxidation]` or `M(Oxidation)`, directly after the residue
/// * N-terminal annotations: `.(Acetyl)PEPTIDE` or `[Acetyl]-PEPTIDE`
/// * C-terminal annotations: `PEPTIDE.(Amidated)` or `PEPTIDE-[Amidated]`
/// * charge: `PEPTIDE/2` or `PEPTIDE2`, the slash notation is always tried first, trailing
///   digits are only a charge if they are the final characters and outside any bracket
///
/// # Errors
/// A [`PeptideErrorKind::MalformedNotation`] error if any part of the line does not fit.
pub fn tokenize(line: &str) -> Result<Vec<Token<'_>>, PeptideError<'_>> {
    let bytes = line.as_bytes();
    let start = line.len() - line.trim_start().len();
    let end = line.trim_end().len();
    let mut index = start;
    let mut tokens = Vec::new();
    let mut residues = 0;
    let mut attachment = None;
    let mut c_terminal = false;

    if start < end && bytes[start] == b'[' {
        let (close, bracket) = closing_bracket(line, end, start)?;
        if close + 1 >= end || bytes[close + 1] != b'-' {
            return Err(malformed(
                line,
                "Invalid N-terminal modification",
                "A modification before the first residue should be followed by '-', eg '[Acetyl]-PEPTIDE'",
                start,
                close + 1 - start,
            ));
        }
        tokens.push(Token::NTermMarker { offset: close + 1 });
        tokens.push(Token::Annotation {
            content: &line[start + 1..close],
            range: start + 1..close,
            bracket,
            attachment: SequencePosition::NTerm,
        });
        index = close + 2;
    } else if start < end && bytes[start] == b'.' {
        tokens.push(Token::NTermMarker { offset: start });
        attachment = Some(SequencePosition::NTerm);
        index += 1;
    }

    while index < end {
        let byte = bytes[index];
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' => {
                if c_terminal {
                    return Err(malformed(
                        line,
                        "Invalid sequence notation",
                        "No residues can follow the C-terminal modification",
                        index,
                        1,
                    ));
                }
                tokens.push(Token::Residue {
                    code: char::from(byte.to_ascii_uppercase()),
                    offset: index,
                });
                attachment = Some(SequencePosition::Index(residues));
                residues += 1;
                index += 1;
            }
            b'[' | b'(' => {
                let (close, bracket) = closing_bracket(line, end, index)?;
                let Some(position) = attachment else {
                    return Err(malformed(
                        line,
                        "Invalid modification",
                        "A modification has to directly follow a residue or a terminal marker",
                        index,
                        close + 1 - index,
                    ));
                };
                tokens.push(Token::Annotation {
                    content: &line[index + 1..close],
                    range: index + 1..close,
                    bracket,
                    attachment: position,
                });
                index = close + 1;
            }
            b']' | b')' => {
                return Err(malformed(
                    line,
                    "Invalid modification",
                    "This closing bracket does not have a matching opening bracket",
                    index,
                    1,
                ));
            }
            b'.' | b'-' => {
                if residues == 0 || c_terminal {
                    return Err(malformed(
                        line,
                        "Invalid terminal marker",
                        format!(
                            "A '{}' can only be used before the first residue or after the last residue",
                            char::from(byte)
                        ),
                        index,
                        1,
                    ));
                }
                if index + 1 >= end || !matches!(bytes[index + 1], b'[' | b'(') {
                    return Err(malformed(
                        line,
                        "Invalid terminal marker",
                        format!(
                            "A C-terminal marker '{}' has to be followed by a modification, eg 'PEPTIDE{}[Amidated]'",
                            char::from(byte),
                            char::from(byte)
                        ),
                        index,
                        1,
                    ));
                }
                tokens.push(Token::CTermMarker { offset: index });
                attachment = Some(SequencePosition::CTerm);
                c_terminal = true;
                index += 1;
            }
            b'/' => {
                let digits = digits_from(&line[..end], index + 1);
                if digits == 0 {
                    return Err(malformed(
                        line,
                        "Invalid charge",
                        "A charge number has to follow the slash, eg 'PEPTIDE/2'",
                        index,
                        1,
                    ));
                }
                if index + 1 + digits != end {
                    return Err(malformed(
                        line,
                        "Invalid charge",
                        "The charge has to be the last part of the sequence",
                        index + 1 + digits,
                        end - index - 1 - digits,
                    ));
                }
                tokens.push(Token::Charge {
                    digits: index + 1..end,
                    source: ChargeSource::SequenceSlash,
                });
                index = end;
            }
            b'0'..=b'9' => {
                let digits = digits_from(&line[..end], index);
                if index + digits != end || residues == 0 {
                    return Err(malformed(
                        line,
                        "Invalid sequence notation",
                        "Numbers can only be used inside a modification or as the charge at the end of the sequence",
                        index,
                        digits,
                    ));
                }
                tokens.push(Token::Charge {
                    digits: index..end,
                    source: ChargeSource::SequenceTrailingDigit,
                });
                index = end;
            }
            _ if byte.is_ascii_whitespace() => {
                return Err(malformed(
                    line,
                    "Invalid sequence notation",
                    "Whitespace is not allowed inside a sequence",
                    index,
                    1,
                ));
            }
            _ => {
                let len = char_len_at(line, index);
                return Err(malformed(
                    line,
                    "Invalid sequence notation",
                    format!(
                        "The character '{}' is not supported, use letters for residues and brackets for modifications",
                        &line[index..index + len]
                    ),
                    index,
                    len,
                ));
            }
        }
    }
    log::trace!("Tokenized '{line}' into {tokens:?}");
    Ok(tokens)
}

/// Get the embedded charge, if any
pub fn embedded_charge(tokens: &[Token<'_>]) -> Option<(Range<usize>, ChargeSource)> {
    tokens.iter().find_map(|token| match token {
        Token::Charge { digits, source } => Some((digits.clone(), *source)),
        _ => None,
    })
}
