//! Record entry dialog
//!
//! Modal form for adding a record: amount, type, date, category (with an
//! optional custom label) and notes. Text fields are edited in place while
//! type and category are selectors changed with Space or the arrow keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::LedgerResult;
use crate::models::{CategoryChoice, Record, RecordId};
use crate::services::EntryForm;
use crate::tui::app::App;
use crate::tui::keybindings::{lookup, Action, KeyContext};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

const LABEL_WIDTH: usize = 15;
const NO_CATEGORY: &str = "-- Select Category --";
const CUSTOM_CATEGORY: &str = "+ Custom";

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Amount,
    Kind,
    Date,
    Category,
    CustomCategory,
    Notes,
}

impl EntryField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Kind,
            Self::Kind => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::CustomCategory,
            Self::CustomCategory => Self::Notes,
            Self::Notes => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Notes,
            Self::Kind => Self::Amount,
            Self::Date => Self::Kind,
            Self::Category => Self::Date,
            Self::CustomCategory => Self::Category,
            Self::Notes => Self::CustomCategory,
        }
    }

    /// Selector fields change value with Space and the arrow keys
    pub fn is_selector(self) -> bool {
        matches!(self, Self::Kind | Self::Category)
    }
}

/// State for the entry form dialog
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Field values and submission logic
    pub form: EntryForm,

    /// Currently focused field
    pub focused_field: EntryField,

    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub custom_input: TextInput,
    pub notes_input: TextInput,

    /// Category selector position: 0 is nothing selected, `1..=n` are the
    /// offered labels and `n + 1` is the custom entry
    pub category_index: usize,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new(crate::models::default_categories())
    }
}

impl EntryFormState {
    /// Create an empty form offering the given category labels
    pub fn new(category_options: Vec<String>) -> Self {
        Self {
            form: EntryForm::new(category_options),
            focused_field: EntryField::default(),
            amount_input: TextInput::new()
                .label(format!("{:>LABEL_WIDTH$}", "Amount"))
                .placeholder("0.00")
                .accept(|c| c.is_ascii_digit() || c == '.'),
            date_input: TextInput::new()
                .label(format!("{:>LABEL_WIDTH$}", "Date"))
                .placeholder("YYYY-MM-DD")
                .accept(|c| c.is_ascii_digit() || c == '-'),
            custom_input: TextInput::new()
                .label(format!("{:>LABEL_WIDTH$}", "Custom Category"))
                .placeholder("Enter a category name"),
            notes_input: TextInput::new()
                .label(format!("{:>LABEL_WIDTH$}", "Notes"))
                .placeholder("Optional"),
            category_index: 0,
            error_message: None,
        }
    }

    fn custom_index(&self) -> usize {
        self.form.category_options().len() + 1
    }

    /// Whether the custom-category field is shown
    pub fn custom_selected(&self) -> bool {
        self.category_index == self.custom_index()
    }

    /// Text shown in the category selector
    pub fn category_label(&self) -> &str {
        match self.category_index {
            0 => NO_CATEGORY,
            i if i < self.custom_index() => self.form.category_options()[i - 1].as_str(),
            _ => CUSTOM_CATEGORY,
        }
    }

    /// Move focus forward, skipping the custom field when it is hidden
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        if self.focused_field == EntryField::CustomCategory && !self.custom_selected() {
            self.focused_field = self.focused_field.next();
        }
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        if self.focused_field == EntryField::CustomCategory && !self.custom_selected() {
            self.focused_field = self.focused_field.prev();
        }
    }

    /// Step the category selector through none, the offered labels and custom
    pub fn cycle_category(&mut self, forward: bool) {
        let len = self.custom_index() + 1;
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
    }

    /// Point the selector at a choice. A known label that is not offered is
    /// entered as a custom category.
    pub fn select_category(&mut self, choice: CategoryChoice) {
        let known = match &choice {
            CategoryChoice::Known(label) => self
                .form
                .category_options()
                .iter()
                .position(|option| option == label),
            CategoryChoice::Custom(_) => None,
        };

        match known {
            Some(i) => self.category_index = i + 1,
            None => {
                self.category_index = self.custom_index();
                self.custom_input = self.custom_input.clone().content(choice.resolve());
            }
        }
    }

    /// Change the value of the focused selector
    pub fn change_option(&mut self, forward: bool) {
        match self.focused_field {
            EntryField::Kind => self.form.kind = self.form.kind.toggled(),
            EntryField::Category => self.cycle_category(forward),
            _ => {}
        }
    }

    /// The text input of the focused field, if it has one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EntryField::Amount => Some(&mut self.amount_input),
            EntryField::Date => Some(&mut self.date_input),
            EntryField::CustomCategory => Some(&mut self.custom_input),
            EntryField::Notes => Some(&mut self.notes_input),
            EntryField::Kind | EntryField::Category => None,
        }
    }

    /// Copy the editor state into the form
    fn sync_form(&mut self) {
        self.form.amount = self.amount_input.value().to_string();
        self.form.date = self.date_input.value().to_string();
        self.form.notes = self.notes_input.value().to_string();

        let options = self.form.category_options();
        let category = match self.category_index {
            0 => None,
            i if i <= options.len() => Some(CategoryChoice::Known(options[i - 1].clone())),
            _ => Some(CategoryChoice::Custom(self.custom_input.value().to_string())),
        };
        self.form.category = category;
    }

    /// Submit the form, passing a new record to `on_new_record`
    ///
    /// A successful submission clears every field; a failed one keeps the
    /// input and records the error message.
    pub fn submit<F>(&mut self, on_new_record: F) -> LedgerResult<RecordId>
    where
        F: FnOnce(Record),
    {
        self.sync_form();
        match self.form.submit(on_new_record) {
            Ok(id) => {
                self.clear_inputs();
                Ok(id)
            }
            Err(e) => {
                self.set_error(e.message());
                Err(e)
            }
        }
    }

    fn clear_inputs(&mut self) {
        self.amount_input.clear();
        self.date_input.clear();
        self.custom_input.clear();
        self.notes_input.clear();
        self.category_index = 0;
        self.focused_field = EntryField::default();
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the entry dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.entry_form;
    let show_custom = state.custom_selected();
    let rows: u16 = if show_custom { 6 } else { 5 };

    let area = centered_rect_fixed(64, rows + 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Record ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let mut constraints = vec![Constraint::Length(1); rows as usize];
    constraints.extend([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Error
        Constraint::Length(1), // Hints
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let focused = state.focused_field;
    let mut row = chunks.iter().copied();
    let mut next_row = || row.next().unwrap_or_default();

    frame.render_widget(
        state
            .amount_input
            .clone()
            .focused(focused == EntryField::Amount),
        next_row(),
    );
    render_selector(
        frame,
        next_row(),
        "Type",
        &state.form.kind.to_string(),
        focused == EntryField::Kind,
    );
    frame.render_widget(
        state.date_input.clone().focused(focused == EntryField::Date),
        next_row(),
    );
    render_selector(
        frame,
        next_row(),
        "Category",
        state.category_label(),
        focused == EntryField::Category,
    );
    if show_custom {
        frame.render_widget(
            state
                .custom_input
                .clone()
                .focused(focused == EntryField::CustomCategory),
            next_row(),
        );
    }
    frame.render_widget(
        state.notes_input.clone().focused(focused == EntryField::Notes),
        next_row(),
    );

    next_row();
    let error_area = next_row();
    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), error_area);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Space]", Style::default().fg(Color::Yellow)),
        Span::raw(" Change  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), next_row());
}

/// Render a selector row as `label: ◀ value ▶`
fn render_selector(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(format!("{:>LABEL_WIDTH$}", label), label_style),
        Span::raw(": "),
        Span::styled(format!("◀ {} ▶", value), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Handle key input for the entry dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let on_selector = app.entry_form.focused_field.is_selector();

    match lookup(KeyContext::EntryForm, &key) {
        Some(Action::Cancel) => {
            app.close_dialog();
            return;
        }
        Some(Action::Submit) => {
            app.submit_entry();
            return;
        }
        Some(Action::NextField) => {
            app.entry_form.next_field();
            return;
        }
        Some(Action::PrevField) => {
            app.entry_form.prev_field();
            return;
        }
        Some(Action::ChangeOption) if on_selector => {
            app.entry_form.change_option(true);
            return;
        }
        _ => {}
    }

    let form = &mut app.entry_form;
    if on_selector {
        match key.code {
            KeyCode::Left => form.change_option(false),
            KeyCode::Right => form.change_option(true),
            _ => {}
        }
        return;
    }

    let Some(input) = form.focused_input() else {
        return;
    };
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if !input.insert(c) {
                return;
            }
        }
        _ => return,
    }
    form.clear_error();
}
