//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or, without one, resolves them
//! through the keybinding table.

use crossterm::event::{KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;
use super::keybindings::{lookup, Action, KeyContext};
use crate::services::SortKey;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.notifications.remove_expired(),
        // Terminal will redraw automatically
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Some terminals also report releases and repeats
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.active_dialog {
        ActiveDialog::AddRecord => dialogs::entry::handle_key(app, key),
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {
            let action = lookup(KeyContext::Global, &key)
                .or_else(|| lookup(KeyContext::Ledger, &key));
            if let Some(action) = action {
                apply_action(app, action);
            }
        }
    }
}

fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.quit(),
        Action::Help => app.open_dialog(ActiveDialog::Help),
        Action::AddRecord => app.open_dialog(ActiveDialog::AddRecord),
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::GoTop => app.select_first(),
        Action::GoBottom => app.select_last(),
        Action::CycleKindFilter => app.cycle_kind_filter(),
        Action::NextCategoryFilter => app.cycle_category_filter(true),
        Action::PrevCategoryFilter => app.cycle_category_filter(false),
        Action::ClearFilters => app.clear_filters(),
        Action::SortByDate => app.toggle_sort(SortKey::Date),
        Action::SortByAmount => app.toggle_sort(SortKey::Amount),
        Action::SortByCategory => app.toggle_sort(SortKey::Category),
        // Entry form actions are handled by the dialog
        Action::NextField
        | Action::PrevField
        | Action::ChangeOption
        | Action::Submit
        | Action::Cancel => {}
    }
}
