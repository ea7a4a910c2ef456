//! User settings for the household ledger
//!
//! Manages user preferences: the currency unit, the category presets offered
//! on the entry form, and whether mutations are written to the audit log.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::DEFAULT_CATEGORY;

/// Settings layout written by this build
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Layout version; files from a newer layout are refused
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Unit appended to displayed amounts
    #[serde(default = "default_currency_unit")]
    pub currency_unit: String,

    /// Category used when the form leaves it blank
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Category presets offered for new entries
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency_unit() -> String {
    "원".to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_categories() -> Vec<String> {
    [
        "식비",
        "교통",
        "주거/관리비",
        "공과금",
        "용돈/생활비",
        "쇼핑",
        "의료/보험",
        DEFAULT_CATEGORY,
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_unit: default_currency_unit(),
            default_category: default_category(),
            categories: default_categories(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SETTINGS_SCHEMA_VERSION {
                return Err(LedgerError::Config(format!(
                    "Settings file uses schema version {}, this build supports up to {}",
                    settings.schema_version, SETTINGS_SCHEMA_VERSION
                )));
            }
            // Older layouts only lack fields, which serde has already defaulted.
            settings.schema_version = SETTINGS_SCHEMA_VERSION;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_unit, "원");
        assert_eq!(settings.default_category, "기타");
        assert_eq!(settings.categories.len(), 8);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_unit = "KRW".into();
        settings.audit_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_unit, "KRW");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_unit": "$"}"#).unwrap();
        assert_eq!(settings.currency_unit, "$");
        assert_eq!(settings.default_category, "기타");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_newer_schema_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            format!(r#"{{"schema_version": {}}}"#, SETTINGS_SCHEMA_VERSION + 1),
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_older_schema_is_upgraded_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"schema_version": 0, "currency_unit": "KRW"}"#)
            .unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, SETTINGS_SCHEMA_VERSION);
        assert_eq!(settings.currency_unit, "KRW");
        assert_eq!(settings.categories.len(), 8);
    }
}
