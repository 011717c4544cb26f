//! User settings for fintrack
//!
//! Display preferences, the persistence mode and whether the audit log is kept.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;
use crate::storage::{read_text, write_text_atomic};
use crate::tracker::WriteMode;

/// Used when the configured date format is not a valid strftime string
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// When collections are written back to disk
    #[serde(default)]
    pub write_mode: WriteMode,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            write_mode: WriteMode::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Settings from `config.json`; defaults when there is no file yet
    ///
    /// A missing file is not created here.
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let path = paths.settings_file();
        match read_text(&path)? {
            Some(text) => serde_json::from_str(&text).map_err(|e| {
                TrackerError::Config(format!("{} is not valid: {}", path.display(), e))
            }),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Cannot encode settings: {}", e)))?;
        write_text_atomic(paths.settings_file(), &text)
    }

    /// Format a date with the configured format
    pub fn format_date(&self, date: NaiveDate) -> String {
        let valid = !StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if valid {
            date.format(&self.date_format).to_string()
        } else {
            date.format(FALLBACK_DATE_FORMAT).to_string()
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
