use std::{fmt::Display, ops::Range, ops::RangeInclusive};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PeptideError, PeptideErrorKind, error_at},
    helper_functions::explain_number_error,
};

/// The range of charge states that can be used in calculations
pub const CHARGE_RANGE: RangeInclusive<isize> = 1..=10;

/// Where the charge used in a calculation came from
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ChargeSource {
    /// Given separately from the sequence, or the configured default
    UserInput,
    /// Embedded in the sequence as `/<digits>`
    SequenceSlash,
    /// Embedded in the sequence as trailing digits
    SequenceTrailingDigit,
}

impl ChargeSource {
    /// Check if this charge was found in the sequence itself
    pub const fn is_embedded(self) -> bool {
        !matches!(self, Self::UserInput)
    }
}

impl Display for ChargeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::UserInput => "user input",
                Self::SequenceSlash => "sequence (slash)",
                Self::SequenceTrailingDigit => "sequence (trailing digits)",
            }
        )
    }
}

/// A validated charge state together with its provenance
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChargeSpec {
    /// The charge, always within [`CHARGE_RANGE`]
    pub charge: isize,
    /// Where this charge came from
    pub source: ChargeSource,
}

impl ChargeSpec {
    /// Validate a charge given outside of the sequence.
    /// # Errors
    /// If the charge is outside [`CHARGE_RANGE`].
    pub fn user(charge: isize) -> Result<Self, PeptideError<'static>> {
        if CHARGE_RANGE.contains(&charge) {
            Ok(Self {
                charge,
                source: ChargeSource::UserInput,
            })
        } else {
            Err(BoxedError::new(
                PeptideErrorKind::ChargeOutOfRange,
                "Invalid charge",
                format!(
                    "The charge {charge} is outside the supported range of {} to {}",
                    CHARGE_RANGE.start(),
                    CHARGE_RANGE.end()
                ),
                Context::none(),
            ))
        }
    }

    /// Resolve the charge for a sequence. An embedded charge (the digits at `digits` in `line`)
    /// overrides the user charge. The user charge is only validated if it is used.
    /// # Errors
    /// If the used charge is outside [`CHARGE_RANGE`], or the embedded digits do not fit a number.
    pub fn resolve(
        line: &str,
        embedded: Option<(Range<usize>, ChargeSource)>,
        user: isize,
    ) -> Result<Self, PeptideError<'_>> {
        let Some((digits, source)) = embedded else {
            return Self::user(user);
        };
        let out_of_range = |long: String| {
            error_at(
                PeptideErrorKind::ChargeOutOfRange,
                "Invalid charge",
                long,
                line,
                digits.start,
                digits.len(),
            )
        };
        let charge = line[digits.clone()].parse::<isize>().map_err(|err| {
            out_of_range(format!("The charge number {}", explain_number_error(&err)))
        })?;
        if CHARGE_RANGE.contains(&charge) {
            log::trace!("Charge {charge} taken from the sequence ({source})");
            Ok(Self { charge, source })
        } else {
            Err(out_of_range(format!(
                "The charge {charge} is outside the supported range of {} to {}",
                CHARGE_RANGE.start(),
                CHARGE_RANGE.end()
            )))
        }
    }
}
