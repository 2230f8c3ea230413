//! Status bar view
//!
//! Shows how many records are listed and the main key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, visible: usize, area: Rect) {
    let total = app.ledger.len();

    let mut spans = vec![Span::styled(
        format!(" {} of {} records", visible, total),
        Style::default().fg(Color::White),
    )];

    if !app.ledger.filter().is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("filtered", Style::default().fg(Color::Yellow)));
    }

    // Key hints (right-aligned)
    let hints = " a:Add  t/c:Filter  1-3:Sort  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
