use std::num::{IntErrorKind, ParseIntError};

/// Find the enclosed text by the given symbols, assumes a single open is already read just before the start, guarantees to only pick full characters
pub(crate) fn end_of_enclosure(text: &str, start: usize, open: u8, close: u8) -> Option<usize> {
    let mut state = 1;
    for (i, ch) in text.as_bytes()[start..].iter().enumerate() {
        // Check if this byte is a full character (is_char_boundary also works on index==len)
        if text.is_char_boundary(start + i) && text.is_char_boundary(start + i + 1) {
            if *ch == open {
                state += 1;
            } else if *ch == close {
                state -= 1;
                if state == 0 {
                    return Some(start + i);
                }
            }
        }
    }
    None
}

/// Count the ASCII digits starting at the given byte offset
pub(crate) fn digits_from(text: &str, start: usize) -> usize {
    text.as_bytes()[start..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
}

/// Get the length in bytes of the character starting at this byte offset
pub(crate) fn char_len_at(text: &str, index: usize) -> usize {
    text[index..].chars().next().map_or(1, char::len_utf8)
}

/// To be used as `The xx number ` + the explanation from here (does not have a dot).
pub(crate) const fn explain_number_error(error: &ParseIntError) -> &'static str {
    match error.kind() {
        IntErrorKind::Empty => "is empty",
        IntErrorKind::InvalidDigit => "contains an invalid character",
        IntErrorKind::NegOverflow => "is too small to fit in the internal representation",
        IntErrorKind::PosOverflow => "is too big to fit in the internal representation",
        IntErrorKind::Zero => "is zero, which is not allowed here",
        _ => "is not a valid number",
    }
}

/// Check if 'a' starts with 'b' with or without ignoring casing
pub(crate) fn str_starts_with<const IGNORE_CASING: bool>(a: &str, b: &str) -> bool {
    if a.len() >= b.len() {
        for (a, b) in a.chars().zip(b.chars()) {
            if IGNORE_CASING && !a.eq_ignore_ascii_case(&b) || !IGNORE_CASING && a != b {
                return false;
            }
        }
        true
    } else {
        false
    }
}

#[allow(clippy::missing_panics_doc)]
#[test]
fn starts_with() {
    assert!(str_starts_with::<false>("UNIMOD:35", "UNIMOD:"));
    assert!(!str_starts_with::<false>("unimod:35", "UNIMOD:"));
    assert!(str_starts_with::<true>("unimod:35", "UNIMOD:"));
    assert!(str_starts_with::<true>("UniMod:35", "UNIMOD:"));
    assert!(!str_starts_with::<true>("UNI", "UNIMOD:"));
    assert!(!str_starts_with::<true>("Oxidation", "UNIMOD:"));
}

#[allow(clippy::missing_panics_doc)]
#[test]
fn enclosure() {
    assert_eq!(end_of_enclosure("M[Oxidation]K", 2, b'[', b']'), Some(11));
    assert_eq!(end_of_enclosure("M[Ox[i]dation]K", 2, b'[', b']'), Some(13));
    assert_eq!(end_of_enclosure("M(Oxidation)K", 2, b'(', b')'), Some(11));
    assert_eq!(end_of_enclosure("M[Oxidation", 2, b'[', b']'), None);
    assert_eq!(end_of_enclosure("M[Öxidation]", 2, b'[', b']'), Some(12));
}

#[allow(clippy::missing_panics_doc)]
#[test]
fn digits() {
    assert_eq!(digits_from("PEPTIDE/23", 8), 2);
    assert_eq!(digits_from("PEPTIDE/", 8), 0);
    assert_eq!(digits_from("K12a", 1), 2);
    assert_eq!(char_len_at("Kß", 1), 2);
    assert_eq!(char_len_at("K", 0), 1);
}
