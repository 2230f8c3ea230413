//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the ledger screen

pub mod entry;
pub mod help;
