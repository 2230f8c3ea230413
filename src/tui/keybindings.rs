//! Keybinding definitions
//!
//! Every shortcut lives in [`KEYBINDINGS`]; the event handler resolves keys
//! through it and the help dialog is generated from it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active whenever no dialog is open
    Global,
    /// Active in the ledger listing
    Ledger,
    /// Active in the entry form dialog
    EntryForm,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Ledger => "Ledger",
            Self::EntryForm => "Entry Form",
        }
    }
}

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    AddRecord,
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,
    CycleKindFilter,
    NextCategoryFilter,
    PrevCategoryFilter,
    ClearFilters,
    SortByDate,
    SortByAmount,
    SortByCategory,
    NextField,
    PrevField,
    ChangeOption,
    Submit,
    Cancel,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: Action,
    pub description: &'static str,
    pub context: KeyContext,
}

impl Keybinding {
    /// Whether a key event triggers this binding. Shift is ignored so that
    /// upper-case letters match however the terminal reports them.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let mut pressed = event.modifiers;
        pressed.remove(KeyModifiers::SHIFT);
        let mut expected = self.modifiers;
        expected.remove(KeyModifiers::SHIFT);
        event.code == self.key && pressed == expected
    }

    /// Human-readable key name
    pub fn key_label(&self) -> String {
        let key = match self.key {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            other => format!("{:?}", other),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key)
        } else {
            key
        }
    }
}

const fn bind(
    key: KeyCode,
    action: Action,
    description: &'static str,
    context: KeyContext,
) -> Keybinding {
    Keybinding {
        key,
        modifiers: KeyModifiers::NONE,
        action,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('q'), Action::Quit, "Quit", KeyContext::Global),
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        action: Action::Quit,
        description: "Quit",
        context: KeyContext::Global,
    },
    bind(KeyCode::Char('?'), Action::Help, "Show help", KeyContext::Global),
    bind(KeyCode::Char('a'), Action::AddRecord, "Add a record", KeyContext::Global),
    bind(KeyCode::Char('n'), Action::AddRecord, "Add a record", KeyContext::Global),
    // Ledger
    bind(KeyCode::Char('k'), Action::MoveUp, "Move up", KeyContext::Ledger),
    bind(KeyCode::Up, Action::MoveUp, "Move up", KeyContext::Ledger),
    bind(KeyCode::Char('j'), Action::MoveDown, "Move down", KeyContext::Ledger),
    bind(KeyCode::Down, Action::MoveDown, "Move down", KeyContext::Ledger),
    bind(KeyCode::Char('g'), Action::GoTop, "Go to top", KeyContext::Ledger),
    bind(KeyCode::Home, Action::GoTop, "Go to top", KeyContext::Ledger),
    bind(KeyCode::Char('G'), Action::GoBottom, "Go to bottom", KeyContext::Ledger),
    bind(KeyCode::End, Action::GoBottom, "Go to bottom", KeyContext::Ledger),
    bind(
        KeyCode::Char('t'),
        Action::CycleKindFilter,
        "Filter type: all / income / expense",
        KeyContext::Ledger,
    ),
    bind(
        KeyCode::Char('c'),
        Action::NextCategoryFilter,
        "Next category filter",
        KeyContext::Ledger,
    ),
    bind(
        KeyCode::Char('C'),
        Action::PrevCategoryFilter,
        "Previous category filter",
        KeyContext::Ledger,
    ),
    bind(KeyCode::Char('x'), Action::ClearFilters, "Clear filters", KeyContext::Ledger),
    bind(
        KeyCode::Char('1'),
        Action::SortByDate,
        "Sort by date (again to reverse)",
        KeyContext::Ledger,
    ),
    bind(
        KeyCode::Char('2'),
        Action::SortByAmount,
        "Sort by amount (again to reverse)",
        KeyContext::Ledger,
    ),
    bind(
        KeyCode::Char('3'),
        Action::SortByCategory,
        "Sort by category (again to reverse)",
        KeyContext::Ledger,
    ),
    // Entry form
    bind(KeyCode::Tab, Action::NextField, "Next field", KeyContext::EntryForm),
    bind(KeyCode::Down, Action::NextField, "Next field", KeyContext::EntryForm),
    bind(KeyCode::BackTab, Action::PrevField, "Previous field", KeyContext::EntryForm),
    bind(KeyCode::Up, Action::PrevField, "Previous field", KeyContext::EntryForm),
    bind(
        KeyCode::Char(' '),
        Action::ChangeOption,
        "Change type or category",
        KeyContext::EntryForm,
    ),
    bind(KeyCode::Enter, Action::Submit, "Add record", KeyContext::EntryForm),
    bind(KeyCode::Esc, Action::Cancel, "Close form", KeyContext::EntryForm),
];

/// Find the action bound to a key in the given context
pub fn lookup(context: KeyContext, event: &KeyEvent) -> Option<Action> {
    KEYBINDINGS
        .iter()
        .find(|kb| kb.context == context && kb.matches(event))
        .map(|kb| kb.action)
}

/// Bindings of one context, with keys for the same action merged into one
/// entry such as `("j/↓", "Move down")`
pub fn help_entries(context: KeyContext) -> Vec<(String, &'static str)> {
    let mut entries: Vec<(Action, String, &'static str)> = Vec::new();

    for kb in KEYBINDINGS.iter().filter(|kb| kb.context == context) {
        match entries.iter_mut().find(|(action, _, _)| *action == kb.action) {
            Some((_, keys, _)) => {
                keys.push('/');
                keys.push_str(&kb.key_label());
            }
            None => entries.push((kb.action, kb.key_label(), kb.description)),
        }
    }

    entries
        .into_iter()
        .map(|(_, keys, description)| (keys, description))
        .collect()
}
