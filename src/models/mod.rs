//! Core data models for Pocket Ledger
//!
//! Records, their identifiers and amounts, and the category choice made in
//! the entry form.

pub mod category;
pub mod ids;
pub mod money;
pub mod record;

pub use category::{default_categories, CategoryChoice, DEFAULT_CATEGORIES};
pub use ids::RecordId;
pub use money::{Money, MoneyParseError};
pub use record::{Record, RecordKind};
