//! Ledger listing view
//!
//! A header with the active filters and sort, and the table of visible
//! records.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Record, RecordKind};
use crate::services::SortKey;
use crate::tui::app::App;

/// Render the filter and sort summary above the table
pub fn render_header(frame: &mut Frame, app: &App, categories: &[String], area: Rect) {
    let filter = app.ledger.filter();
    let sort = app.ledger.sort();

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("Type: ", label),
        Span::styled(filter.kind.to_string(), value),
        Span::styled("   Category: ", label),
        Span::styled(filter.category.to_string(), value),
        Span::styled(format!(" ({} known)", categories.len()), label),
        Span::styled("   Sort: ", label),
        Span::styled(sort.to_string(), value),
    ]);

    let block = Block::default()
        .title(" Ledger ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the table of visible records
pub fn render_table(frame: &mut Frame, app: &App, records: &[&Record], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if records.is_empty() {
        let message = if app.ledger.is_empty() {
            "No records yet. Press 'a' to add your first one!"
        } else {
            "No records match the current filters. Press 'x' to clear them."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Kind marker
        Constraint::Length(12), // Date
        Constraint::Length(9),  // Type
        Constraint::Length(16), // Category
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Notes
    ];

    let sort = app.ledger.sort();
    let heading = |title: &str, key: Option<SortKey>| {
        let text = match key {
            Some(key) if key == sort.key => format!("{} {}", title, sort.order.arrow()),
            _ => title.to_string(),
        };
        Cell::from(text).style(Style::default().add_modifier(Modifier::BOLD))
    };

    let header = Row::new(vec![
        Cell::from(""),
        heading("Date", Some(SortKey::Date)),
        heading("Type", None),
        heading("Category", Some(SortKey::Category)),
        heading("Amount", Some(SortKey::Amount)),
        heading("Notes", None),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let date_format = app.settings.date_format.as_str();

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            let color = match record.kind {
                RecordKind::Income => Color::Green,
                RecordKind::Expense => Color::Red,
            };

            Row::new(vec![
                Cell::from("●").style(Style::default().fg(color)),
                Cell::from(record.date.format(date_format).to_string()),
                Cell::from(record.kind.to_string()),
                Cell::from(truncate_string(&record.category, 16)),
                Cell::from(record.signed_amount(symbol)).style(Style::default().fg(color)),
                Cell::from(record.notes.as_deref().unwrap_or("")),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(records.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Rent", 16), "Rent");
        assert_eq!(truncate_string("Entertainment", 6), "Enter…");
        assert_eq!(truncate_string("Café au lait", 5), "Café…");
    }
}
