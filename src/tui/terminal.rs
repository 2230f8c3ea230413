//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::error::LedgerError;
use crate::services::LedgerView;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()
        .map_err(|e| LedgerError::Tui(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    enter_alternate_screen(&mut stdout)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Switch to the alternate screen once raw mode is on. Raw mode is turned
/// back off if the switch fails.
fn enter_alternate_screen<W: Write>(out: &mut W) -> Result<()> {
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(LedgerError::Tui(format!("Failed to enter alternate screen: {}", e)).into());
    }
    Ok(())
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits, returning the session's ledger
pub fn run_tui(settings: &Settings) -> Result<LedgerView> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);
    info!("ledger session started");

    let result = event_loop(&mut terminal, &mut app, settings);

    // Restore the terminal even if the loop failed
    restore_terminal()?;
    result?;

    info!(records = app.ledger.len(), "ledger session ended");
    Ok(app.ledger)
}

fn event_loop(terminal: &mut Tui, app: &mut App, settings: &Settings) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?);

        if app.should_quit {
            return Ok(());
        }
    }
}
