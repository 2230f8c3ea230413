//! Display formatting for terminal output
//!
//! Plain-text tables for printing outside the TUI.

pub mod record;
pub mod summary;

pub use record::format_record_table;
pub use summary::{format_session_summary, format_totals};
