//! Layout definitions for the TUI
//!
//! Summary cards on top, the ledger listing below, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Income / expenses / balance cards
    pub cards: Rect,
    /// Filter and sort header of the ledger
    pub ledger_header: Rect,
    /// Record table
    pub ledger_table: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Summary cards
                Constraint::Length(3), // Ledger header
                Constraint::Min(3),    // Record table
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            cards: vertical[0],
            ledger_header: vertical[1],
            ledger_table: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Split the card row into three equal cards
pub fn card_areas(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Fixed-size rect in the top-right corner, used for toasts
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_stacks_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.cards.height, 4);
        assert_eq!(layout.ledger_header.y, 4);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.ledger_table.height, 24 - 4 - 3 - 1);
    }

    #[test]
    fn test_fixed_rects_fit_small_areas() {
        let small = Rect::new(0, 0, 20, 5);
        let centered = centered_rect_fixed(60, 16, small);
        assert_eq!(centered, small);

        let toast = top_right_rect(40, 4, Rect::new(0, 0, 100, 30));
        assert_eq!(toast, Rect::new(60, 0, 40, 4));
    }
}
