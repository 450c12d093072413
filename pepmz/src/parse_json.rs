//! Reading configuration structures from JSON

use std::{
    any::type_name,
    path::Path,
};

use serde::de::DeserializeOwned;
use serde_json::Value;

use context_error::*;

use crate::error::{PeptideError, PeptideErrorKind};

/// Custom JSON parser, so that configuration files report errors in the same style as parse errors.
pub trait ParseJson: Sized {
    /// Parse a JSON value element into this structure
    /// # Errors
    /// If the JSON is not valid to the format
    fn from_json_value(value: Value) -> Result<Self, PeptideError<'static>>;

    /// Parse a string containing JSON into this structure
    /// # Errors
    /// If the JSON is not valid to the format
    fn from_json(value: &str) -> Result<Self, PeptideError<'static>> {
        let value = serde_json::from_str::<Value>(value).map_err(|err| {
            BoxedError::new(
                PeptideErrorKind::InvalidConfiguration,
                format!("Invalid JSON (for {})", type_name::<Self>()),
                err.to_string(),
                Context::show(value.to_string()),
            )
        })?;
        Self::from_json_value(value)
    }
}

/// Read a whole file into a string
/// # Errors
/// If the file could not be read
pub(crate) fn read_file(path: &Path) -> Result<String, PeptideError<'static>> {
    std::fs::read_to_string(path).map_err(|err| {
        BoxedError::new(
            PeptideErrorKind::InvalidConfiguration,
            "Could not read file",
            err.to_string(),
            Context::show(path.to_string_lossy().to_string()),
        )
    })
}

/// Parse a JSON value element into this structure using the serde JSON parser
/// # Errors
/// If the JSON is not valid to the format
#[expect(clippy::needless_pass_by_value)]
pub fn use_serde<T: DeserializeOwned>(value: Value) -> Result<T, PeptideError<'static>> {
    serde_json::from_value(value.clone()).map_err(|err| {
        BoxedError::new(
            PeptideErrorKind::InvalidConfiguration,
            format!("Could not parse JSON into {}", type_name::<T>()),
            err.to_string(),
            Context::show(value.to_string()),
        )
    })
}

impl<T: ParseJson> ParseJson for Vec<T> {
    fn from_json_value(value: Value) -> Result<Self, PeptideError<'static>> {
        if let Value::Array(arr) = value {
            arr.into_iter()
                .map(|element| T::from_json_value(element))
                .collect()
        } else {
            Err(BoxedError::new(
                PeptideErrorKind::InvalidConfiguration,
                "Invalid JSON",
                format!(
                    "The JSON has to be a sequence to parse a list of {}",
                    type_name::<T>()
                ),
                Context::show(value.to_string()),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn lists() {
        let list = Vec::<Settings>::from_json(r#"[{}, {"default_charge": 3}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].default_charge, 3);
        for json in [r#"{"default_charge": 3}"#, r#"[{"default_charge": 0}]"#, "[{},"] {
            let error = Vec::<Settings>::from_json(json).unwrap_err();
            assert!(
                matches!(error.get_kind(), PeptideErrorKind::InvalidConfiguration),
                "{json}"
            );
        }
    }
}
