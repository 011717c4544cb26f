//! Spending categories
//!
//! Every transaction and budget belongs to exactly one of a fixed set of
//! categories. The set is closed; there is no user-defined category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight fixed transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Housing,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Healthcare,
        Category::Housing,
        Category::Other,
    ];

    /// The lowercase key used in persisted records and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Healthcare => "healthcare",
            Self::Housing => "housing",
            Self::Other => "other",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Housing => "Housing",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == needle)
            .ok_or_else(|| CategoryParseError(s.trim().to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
