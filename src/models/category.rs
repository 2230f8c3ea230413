//! Category selection model
//!
//! A record's category is either one of the known labels offered by the entry
//! form or a label typed by the user. The choice is resolved to a plain string
//! before a record is built.

use std::fmt;

/// Baseline categories offered when no settings override them
pub const DEFAULT_CATEGORIES: &[&str] = &["Salary", "Freelance", "Groceries", "Rent", "Utilities"];

/// The default baseline as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// How the user picked a category in the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    /// One of the labels the form offers
    Known(String),
    /// A label typed into the custom-category field
    Custom(String),
}

impl CategoryChoice {
    /// Resolve to the label that ends up on the record (trimmed, may be empty)
    pub fn resolve(&self) -> &str {
        match self {
            Self::Known(label) | Self::Custom(label) => label.trim(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(label) => write!(f, "{}", label),
            Self::Custom(_) => write!(f, "+ Custom"),
        }
    }
}
