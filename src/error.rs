//! Error type shared by the library and the binary

use thiserror::Error;

use crate::models::ValidationError;

/// Everything that can go wrong in fintrack
#[derive(Error, Debug)]
pub enum TrackerError {
    /// `config.json` is unreadable or could not be written
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// A persisted collection is not valid JSON for its record type
    #[error("Failed to decode saved {key}: {message}")]
    Decode { key: String, message: String },

    /// Input rejected before it reached the tracker
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A short id prefix matched several transactions
    #[error("'{0}' matches more than one transaction; use a longer id")]
    Ambiguous(String),

    /// The key-value store failed below the JSON layer
    #[error("Storage error: {0}")]
    Storage(String),

    /// Writing a collection back to the store failed
    #[error("Failed to save {key}: {message}")]
    Persist { key: String, message: String },
}

impl TrackerError {
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TrackerError::Config("bad date_format".into()).to_string(),
            "Configuration error: bad date_format"
        );
        assert_eq!(
            TrackerError::Ambiguous("txn-1".into()).to_string(),
            "'txn-1' matches more than one transaction; use a longer id"
        );
        assert_eq!(
            TrackerError::Persist {
                key: "budgets".into(),
                message: "disk full".into()
            }
            .to_string(),
            "Failed to save budgets: disk full"
        );
    }

    #[test]
    fn test_transaction_not_found() {
        let err = TrackerError::transaction_not_found("txn-1234abcd");
        assert_eq!(err.to_string(), "Transaction not found: txn-1234abcd");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_decode_is_distinguishable() {
        let err = TrackerError::Decode {
            key: "budgets".into(),
            message: "expected value at line 1 column 1".into(),
        };
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("Failed to decode saved budgets"));
    }

    #[test]
    fn test_validation_converts() {
        let err: TrackerError = ValidationError::AmountNotPositive.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Amount must be greater than 0");
    }

    #[test]
    fn test_serde_json_converts() {
        let parse_err = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err();
        let err: TrackerError = parse_err.into();
        assert!(matches!(err, TrackerError::Json(_)));
    }
}
