//! Terminal User Interface module
//!
//! The interactive ledger screen built on ratatui: summary cards, the
//! filterable record listing and the entry form dialog.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
