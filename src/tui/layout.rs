//! Layout module - handles the main UI layout
//!
//! ```text
//! ┌ header (2 lines) ─────────────────────────────────┐
//! │ sidebar (1/3)   │ chat title (1 line)             │
//! │ legal areas     │ messages (flexible)             │
//! │ disclaimer      │ input (3 lines) │ send (10 col) │
//! └ status bar (1 line) ──────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SEND_BUTTON_WIDTH: u16 = 10;

/// Layout areas for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header_area: Rect,
    pub sidebar_area: Rect,
    pub chat_title_area: Rect,
    pub messages_area: Rect,
    pub input_area: Rect,
    pub send_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the main layout from terminal area
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
            .split(rows[1]);

        let chat = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Chat title
                Constraint::Min(1),    // Messages
                Constraint::Length(3), // Input row
            ])
            .split(body[1]);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(8), Constraint::Length(SEND_BUTTON_WIDTH)])
            .split(chat[2]);

        Self {
            header_area: rows[0],
            sidebar_area: body[0],
            chat_title_area: chat[0],
            messages_area: chat[1],
            input_area: input_row[0],
            send_area: input_row[1],
            status_area: rows[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_tile_the_screen() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.header_area.height, 2);
        assert_eq!(layout.status_area.y, 39);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.send_area.width, SEND_BUTTON_WIDTH);
        assert_eq!(
            layout.input_area.x + layout.input_area.width,
            layout.send_area.x
        );
        assert_eq!(
            layout.sidebar_area.x + layout.sidebar_area.width,
            layout.chat_title_area.x
        );
        assert_eq!(
            layout.messages_area.y + layout.messages_area.height,
            layout.input_area.y
        );
    }
}
