//! TUI Views module
//!
//! The single ledger screen: summary cards, the filtered listing and the
//! status bar, with dialogs and toasts drawn on top.

pub mod ledger;
pub mod status_bar;
pub mod summary_cards;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    // Derived state is recomputed once per frame
    let snapshot = app.ledger.snapshot();

    summary_cards::render(frame, app, &snapshot.totals, layout.cards);
    ledger::render_header(frame, app, &snapshot.categories, layout.ledger_header);
    ledger::render_table(frame, app, &snapshot.visible, layout.ledger_table);
    status_bar::render(frame, app, snapshot.visible.len(), layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddRecord => dialogs::entry::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = top_right_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Money, Record, RecordKind};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_ledger_screen() {
        let settings = Settings::default();
        let app = App::new(&settings);
        let text = screen_text(&app);

        assert!(text.contains("Total Income"));
        assert!(text.contains("No records yet. Press 'a' to add your first one!"));
    }

    #[test]
    fn test_records_and_totals_are_drawn() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.ledger.append(
            Record::new(
                Money::from_cents(4000),
                RecordKind::Expense,
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                "Groceries",
                Some("weekly shop".into()),
            )
            .unwrap(),
        );

        let text = screen_text(&app);
        assert!(text.contains("Groceries"));
        assert!(text.contains("-$40.00"));
        assert!(text.contains("weekly shop"));
    }

    #[test]
    fn test_dialog_is_drawn_over_ledger() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::AddRecord);

        let text = screen_text(&app);
        assert!(text.contains("Add Record"));
        assert!(text.contains("-- Select Category --"));
    }
}
