//! Strongly-typed transaction identifier
//!
//! A newtype over a v4 UUID so transaction ids can't be confused with
//! arbitrary strings at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";

/// Unique, immutable identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string, with or without the `txn-` prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        s.parse()
    }

    /// The short form shown in listings, e.g. `txn-550e8400`
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Check whether a short or full textual id refers to this id
    pub fn matches(&self, s: &str) -> bool {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s).to_ascii_lowercase();
        if s.is_empty() {
            return false;
        }
        let hyphenated = self.0.hyphenated().to_string();
        let simple = self.0.simple().to_string();
        hyphenated.starts_with(&s) || simple.starts_with(&s)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.short())
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
