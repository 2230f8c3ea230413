//! Application state for the TUI
//!
//! The App struct owns the session's ledger and holds all state needed for
//! rendering and handling events.

use tracing::debug;

use crate::config::Settings;
use crate::services::{CategoryFilter, LedgerView, SortKey};

use super::dialogs::entry::EntryFormState;
use super::widgets::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddRecord,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Records of this session and their derived state
    pub ledger: LedgerView,

    /// Entry form dialog state; kept between openings
    pub entry_form: EntryFormState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the visible listing
    pub selected_index: usize,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty ledger
    pub fn new(settings: &'a Settings) -> Self {
        let ledger = LedgerView::new(settings.baseline_categories.clone())
            .with_sort(settings.default_sort);

        Self {
            settings,
            ledger,
            entry_form: EntryFormState::new(settings.baseline_categories.clone()),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Number of rows in the visible listing
    pub fn visible_count(&self) -> usize {
        self.ledger.visible().len()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible_count() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.visible_count().saturating_sub(1);
    }

    /// Step the kind filter through all / income / expense
    pub fn cycle_kind_filter(&mut self) {
        let next = self.ledger.filter().kind.next();
        self.ledger.set_kind_filter(next);
        self.select_first();
    }

    /// Step the category filter through "all" and every known category
    pub fn cycle_category_filter(&mut self, forward: bool) {
        let categories = self.ledger.distinct_categories();
        let current = match &self.ledger.filter().category {
            CategoryFilter::All => 0,
            CategoryFilter::Only(selected) => categories
                .iter()
                .position(|c| c == selected)
                .map_or(0, |i| i + 1),
        };

        let len = categories.len() + 1;
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        let filter = match next {
            0 => CategoryFilter::All,
            i => CategoryFilter::Only(categories[i - 1].clone()),
        };
        self.ledger.set_category_filter(filter);
        self.select_first();
    }

    pub fn clear_filters(&mut self) {
        self.ledger.clear_filters();
        self.select_first();
        self.notify(Notification::info("Filters cleared"));
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.ledger.toggle_sort(key);
        self.select_first();
    }

    /// Submit the entry form into the ledger
    ///
    /// On success the dialog closes and the new record is selected; on
    /// failure the dialog stays open with its input and an error message.
    pub fn submit_entry(&mut self) {
        let ledger = &mut self.ledger;
        match self.entry_form.submit(|record| ledger.append(record)) {
            Ok(id) => {
                self.close_dialog();
                match self.ledger.visible().iter().position(|r| r.id == id) {
                    Some(index) => {
                        self.selected_index = index;
                        self.notify(Notification::success("Record added"));
                    }
                    None => {
                        self.notify(Notification::success(
                            "Record added (hidden by the current filters)",
                        ));
                    }
                }
            }
            Err(e) => {
                debug!(error = %e, "entry form kept open");
                self.notify(Notification::error(e.message()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryChoice, RecordKind};
    use crate::services::{KindFilter, SortOrder};

    fn add(app: &mut App, amount: &str, kind: RecordKind, date: &str, category: &str) {
        app.open_dialog(ActiveDialog::AddRecord);
        let form = &mut app.entry_form;
        form.amount_input = form.amount_input.clone().content(amount);
        form.date_input = form.date_input.clone().content(date);
        form.form.kind = kind;
        form.select_category(CategoryChoice::Known(category.to_string()));
        app.submit_entry();
    }

    #[test]
    fn test_submit_entry_appends_and_closes() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "100", RecordKind::Income, "2024-01-01", "Salary");

        assert_eq!(app.ledger.len(), 1);
        assert!(!app.has_dialog());
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.entry_form.amount_input.value(), "");
    }

    #[test]
    fn test_failed_submit_keeps_dialog_and_input() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::AddRecord);
        app.entry_form.date_input = app.entry_form.date_input.clone().content("2024-01-01");
        app.submit_entry();

        assert!(app.ledger.is_empty());
        assert_eq!(app.active_dialog, ActiveDialog::AddRecord);
        assert_eq!(app.entry_form.date_input.value(), "2024-01-01");
        assert!(app.entry_form.error_message.is_some());
    }

    #[test]
    fn test_new_record_is_selected() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "100", RecordKind::Income, "2024-01-01", "Salary");
        add(&mut app, "40", RecordKind::Expense, "2024-01-02", "Groceries");
        add(&mut app, "5", RecordKind::Expense, "2023-12-31", "Rent");

        // Newest first: Groceries, Salary, Rent
        assert_eq!(app.selected_index, 2);
        app.move_down();
        assert_eq!(app.selected_index, 2);
        app.select_first();
        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_category_filter_cycles_through_distinct_categories() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "12", RecordKind::Expense, "2024-01-03", "Books");

        app.cycle_category_filter(true);
        assert_eq!(
            app.ledger.filter().category,
            CategoryFilter::Only("Books".into())
        );
        assert_eq!(app.visible_count(), 1);

        app.cycle_category_filter(false);
        assert_eq!(app.ledger.filter().category, CategoryFilter::All);

        app.cycle_category_filter(false);
        assert_eq!(
            app.ledger.filter().category,
            CategoryFilter::Only("Utilities".into())
        );
        assert_eq!(app.visible_count(), 0);
    }

    #[test]
    fn test_kind_filter_sort_and_clear() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "100", RecordKind::Income, "2024-01-01", "Salary");
        add(&mut app, "40", RecordKind::Expense, "2024-01-02", "Groceries");

        app.cycle_kind_filter();
        app.cycle_kind_filter();
        assert_eq!(
            app.ledger.filter().kind,
            KindFilter::Only(RecordKind::Expense)
        );
        assert_eq!(app.visible_count(), 1);

        app.toggle_sort(SortKey::Amount);
        assert_eq!(app.ledger.sort().order, SortOrder::Descending);

        app.clear_filters();
        assert_eq!(app.visible_count(), 2);
    }

    #[test]
    fn test_hidden_record_still_added() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.cycle_kind_filter(); // income only
        add(&mut app, "40", RecordKind::Expense, "2024-01-02", "Groceries");
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.visible_count(), 0);
    }
}
