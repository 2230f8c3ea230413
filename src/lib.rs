//! Pocket Ledger - terminal-based personal income and expense tracker
//!
//! Records entered during a session are kept in memory only. The ledger
//! derives totals, the category set and a filtered, sorted listing from the
//! records every time they change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Records, amounts and identifiers
//! - `services`: Entry form, filtering/sorting and the ledger view
//! - `display`: Plain-text tables for terminal output
//! - `logging`: Diagnostic log setup
//! - `tui`: The interactive ledger screen
//!
//! # Example
//!
//! ```rust
//! use pocket_ledger::models::{CategoryChoice, RecordKind};
//! use pocket_ledger::services::{EntryForm, LedgerView};
//!
//! let mut ledger = LedgerView::default();
//! let mut form = EntryForm::default();
//! form.amount = "40".into();
//! form.kind = RecordKind::Expense;
//! form.date = "2024-01-02".into();
//! form.category = Some(CategoryChoice::Known("Groceries".into()));
//!
//! form.submit(|record| ledger.append(record)).unwrap();
//! assert_eq!(ledger.aggregate().expenses.cents(), 4000);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
