//! Entry-time validation errors
//!
//! These mirror the messages a user sees next to the offending field.

use std::fmt;

/// Validation errors for transaction and budget input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    AmountNotPositive,
    DescriptionTooShort,
    DescriptionTooLong(usize),
    NegativeBudget,
    InvalidAmount(String),
    InvalidDate(String),
    InvalidCategory(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotPositive => write!(f, "Amount must be greater than 0"),
            Self::DescriptionTooShort => write!(f, "Description is too short"),
            Self::DescriptionTooLong(len) => {
                write!(f, "Description is too long ({} characters, max 100)", len)
            }
            Self::NegativeBudget => write!(f, "Budget must be positive"),
            Self::InvalidAmount(msg) => write!(f, "{}", msg),
            Self::InvalidDate(s) => write!(f, "Invalid date '{}' (expected YYYY-MM-DD)", s),
            Self::InvalidCategory(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}
