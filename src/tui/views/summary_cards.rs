//! Summary cards
//!
//! Total income, total expenses and the balance across every record,
//! regardless of the active filters.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::services::Totals;
use crate::tui::app::App;
use crate::tui::layout::card_areas;

/// Render the three summary cards
pub fn render(frame: &mut Frame, app: &App, totals: &Totals, area: Rect) {
    let [income_area, expenses_area, balance_area] = card_areas(area);
    let symbol = app.settings.currency_symbol.as_str();

    // Orange when spending exceeds income
    let balance_color = if totals.is_solvent() {
        Color::Blue
    } else {
        Color::Rgb(255, 140, 0)
    };

    render_card(frame, income_area, "Total Income", totals.income, symbol, Color::Green);
    render_card(
        frame,
        expenses_area,
        "Total Expenses",
        totals.expenses,
        symbol,
        Color::Red,
    );
    render_card(frame, balance_area, "Balance", totals.balance, symbol, balance_color);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, amount: Money, symbol: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let value = Paragraph::new(amount.format_with_symbol(symbol))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);

    frame.render_widget(value, area);
}
