//! User settings for Pocket Ledger
//!
//! Holds the exchange rate used for the local-currency estimate, the currency
//! labels shown in the dialog, and the tab the dialog starts on.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::TransactionType;

/// User settings for Pocket Ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display-currency units per unit of the entry currency
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,

    /// Currency amounts are typed in (e.g. "AUD")
    #[serde(default = "default_entry_currency")]
    pub entry_currency: String,

    /// Currency the estimate is shown in (e.g. "TWD")
    #[serde(default = "default_display_currency")]
    pub display_currency: String,

    /// Symbol prefixed to the estimate
    #[serde(default = "default_display_symbol")]
    pub display_symbol: String,

    /// Date format preference (strftime format) for the register
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Tab the dialog starts on
    #[serde(default)]
    pub default_type: TransactionType,
}

fn default_schema_version() -> u32 {
    1
}

fn default_exchange_rate() -> f64 {
    21.0
}

fn default_entry_currency() -> String {
    "AUD".to_string()
}

fn default_display_currency() -> String {
    "TWD".to_string()
}

fn default_display_symbol() -> String {
    "NT$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            exchange_rate: default_exchange_rate(),
            entry_currency: default_entry_currency(),
            display_currency: default_display_currency(),
            display_symbol: default_display_symbol(),
            date_format: default_date_format(),
            default_type: TransactionType::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the exchange rate and date format are usable
    ///
    /// The format must render a calendar date; time specifiers such as `%H`
    /// are rejected along with malformed ones.
    pub fn validate(&self) -> Result<(), LedgerError> {
        validate_exchange_rate(self.exchange_rate)?;
        if try_format_date(NaiveDate::default(), &self.date_format).is_none() {
            return Err(LedgerError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Render a date with the configured format, falling back to ISO 8601
    pub fn format_date(&self, date: NaiveDate) -> String {
        try_format_date(date, &self.date_format)
            .unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
    }

    /// Replace the exchange rate after validating it
    pub fn with_exchange_rate(mut self, rate: f64) -> Result<Self, LedgerError> {
        validate_exchange_rate(rate)?;
        self.exchange_rate = rate;
        Ok(self)
    }
}

fn try_format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

fn validate_exchange_rate(rate: f64) -> Result<(), LedgerError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::Config(format!(
            "Exchange rate must be a positive number, got {}",
            rate
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.exchange_rate, 21.0);
        assert_eq!(settings.entry_currency, "AUD");
        assert_eq!(settings.display_currency, "TWD");
        assert_eq!(settings.default_type, TransactionType::Expense);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.exchange_rate = 20.5;
        settings.default_type = TransactionType::Income;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.exchange_rate, 20.5);
        assert_eq!(loaded.default_type, TransactionType::Income);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"exchange_rate": 19.75}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.exchange_rate, 19.75);
        assert_eq!(loaded.display_symbol, "NT$");
    }

    #[test]
    fn test_rejects_bad_exchange_rate() {
        assert!(Settings::default().with_exchange_rate(0.0).is_err());
        assert!(Settings::default().with_exchange_rate(-3.0).is_err());
        assert!(Settings::default().with_exchange_rate(f64::NAN).is_err());
        assert_eq!(
            Settings::default().with_exchange_rate(22.0).unwrap().exchange_rate,
            22.0
        );
    }

    #[test]
    fn test_rejects_bad_date_format() {
        let mut settings = Settings::default();
        settings.date_format = "%d/%m/%Y".into();
        assert!(settings.validate().is_ok());
        settings.date_format = "%Q".into();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_time_specifiers_in_date_format() {
        let mut settings = Settings::default();
        settings.date_format = "%H:%M".into();
        assert!(settings.validate().is_err());
        settings.date_format = "%d/%m %H:%M".into();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_format_date_never_panics() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let mut settings = Settings::default();
        settings.date_format = "%d %b %Y".into();
        assert_eq!(settings.format_date(date), "02 Apr 2025");

        settings.date_format = "%d/%m %H:%M".into();
        assert_eq!(settings.format_date(date), "2025-04-02");
    }

    #[test]
    fn test_load_rejects_bad_rate_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"exchange_rate": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
