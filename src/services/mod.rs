//! Service layer for Pocket Ledger
//!
//! The entry form turns user input into records; the ledger view owns the
//! records and derives totals, the category set and the visible listing.

pub mod entry_form;
pub mod filter;
pub mod ledger;
pub mod summary;

pub use entry_form::EntryForm;
pub use filter::{
    filter_and_sort, CategoryFilter, KindFilter, RecordFilter, SortKey, SortOrder, SortSpec,
};
pub use ledger::{LedgerSnapshot, LedgerView};
pub use summary::Totals;
