//! Settings for the analysis of sequences

use std::path::{Path, PathBuf};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::CHARGE_RANGE,
    error::{PeptideError, PeptideErrorKind},
    ontology::{ModificationDatabase, parse_custom_modifications},
    parse_json::{ParseJson, read_file, use_serde},
};

/// The settings, all fields are optional when read from JSON.
/// ```json
/// {
///   "default_charge": 2,
///   "formula_unknown_marker": "unknown",
///   "custom_modifications": "/path/to/custom_modifications.json"
/// }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The charge used if no charge is given and none is embedded in the sequence
    pub default_charge: isize,
    /// The text shown instead of the molecular formula if it is not known
    pub formula_unknown_marker: String,
    /// A JSON file with custom modifications, see [`crate::ontology::CustomModification`]
    pub custom_modifications: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_charge: 2,
            formula_unknown_marker: "unknown".to_string(),
            custom_modifications: None,
        }
    }
}

impl Settings {
    /// Check that these settings are usable
    /// # Errors
    /// If the default charge is outside [`CHARGE_RANGE`] or the unknown formula marker is empty.
    pub fn validate(self) -> Result<Self, PeptideError<'static>> {
        if !CHARGE_RANGE.contains(&self.default_charge) {
            return Err(BoxedError::new(
                PeptideErrorKind::InvalidConfiguration,
                "Invalid settings",
                format!(
                    "The default charge {} is outside the supported range of {} to {}",
                    self.default_charge,
                    CHARGE_RANGE.start(),
                    CHARGE_RANGE.end()
                ),
                Context::show(format!("default_charge: {}", self.default_charge)),
            ));
        }
        if self.formula_unknown_marker.trim().is_empty() {
            return Err(BoxedError::new(
                PeptideErrorKind::InvalidConfiguration,
                "Invalid settings",
                "The marker for an unknown formula cannot be empty",
                Context::show("formula_unknown_marker"),
            ));
        }
        Ok(self)
    }

    /// Read and validate settings from a JSON file
    /// # Errors
    /// If the file could not be read or does not contain valid settings.
    pub fn from_file(path: &Path) -> Result<Self, PeptideError<'static>> {
        let settings = Self::from_json(&read_file(path)?)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The built in modifications, extended with the custom modifications file if one is set
    /// # Errors
    /// If the custom modifications file could not be read or is not valid.
    pub fn modification_database(&self) -> Result<ModificationDatabase, PeptideError<'static>> {
        let database = ModificationDatabase::init_static();
        let Some(path) = &self.custom_modifications else {
            return Ok(database);
        };
        let custom = parse_custom_modifications(&read_file(path)?)?;
        log::info!(
            "Loaded {} custom modification(s) from {}",
            custom.len(),
            path.display()
        );
        Ok(database.with_custom(custom))
    }
}

impl ParseJson for Settings {
    fn from_json_value(value: serde_json::Value) -> Result<Self, PeptideError<'static>> {
        use_serde::<Self>(value)?.validate()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
        assert_eq!(Settings::default().default_charge, 2);
        assert_eq!(Settings::default().formula_unknown_marker, "unknown");
    }

    #[test]
    fn partial() {
        let settings = Settings::from_json(
            r#"{"default_charge": 3, "custom_modifications": "mods.json"}"#,
        )
        .unwrap();
        assert_eq!(settings.default_charge, 3);
        assert_eq!(settings.formula_unknown_marker, "unknown");
        assert_eq!(
            settings.custom_modifications,
            Some(PathBuf::from("mods.json"))
        );
    }

    #[test]
    fn invalid() {
        for json in [
            r#"{"default_charge": 0}"#,
            r#"{"default_charge": 11}"#,
            r#"{"formula_unknown_marker": " "}"#,
            r#"{"default_charge": "two"}"#,
            r#"{"charge": 2}"#,
            "[",
        ] {
            let error = Settings::from_json(json).unwrap_err();
            assert!(
                matches!(error.get_kind(), PeptideErrorKind::InvalidConfiguration),
                "{json}"
            );
        }
    }

    #[test]
    fn files() {
        let directory = std::env::temp_dir().join(format!("pepmz-settings-{}", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        let custom = directory.join("custom_modifications.json");
        std::fs::write(&custom, r#"[{"name": "Heavy", "formula": "C2H3NO"}]"#).unwrap();
        let path = directory.join("settings.json");
        std::fs::write(
            &path,
            serde_json::json!({"default_charge": 3, "custom_modifications": custom}).to_string(),
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.default_charge, 3);
        let database = settings.modification_database().unwrap();
        assert!(database.get_by_name("heavy").is_some());
        assert!(database.get_by_name("oxidation").is_some());

        let missing = Settings {
            custom_modifications: Some(directory.join("missing.json")),
            ..Settings::default()
        };
        assert!(matches!(
            missing.modification_database().unwrap_err().get_kind(),
            PeptideErrorKind::InvalidConfiguration
        ));
        assert!(Settings::from_file(&directory.join("missing.json")).is_err());
        std::fs::remove_dir_all(&directory).unwrap();
    }
}
