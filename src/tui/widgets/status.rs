//! Status bar widget
//!
//! Format: ` MODE  │ hints... ` with transient feedback on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

/// Status bar widget with mode and key hints
pub struct StatusBar<'a> {
    theme: &'a Theme,
    is_waiting: bool,
    feedback: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme, is_waiting: bool) -> Self {
        Self {
            theme,
            is_waiting,
            feedback: None,
        }
    }

    /// Short-lived message shown on the right (e.g. "Copied!")
    pub fn with_feedback(mut self, feedback: Option<&'a str>) -> Self {
        self.feedback = feedback;
        self
    }

    fn mode_info(&self) -> (&'static str, Color) {
        if self.is_waiting {
            ("WAITING", self.theme.warning)
        } else {
            ("READY", self.theme.success)
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (mode_text, mode_color) = self.mode_info();
        let separator_style = Style::default().fg(self.theme.text_muted);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", mode_text),
                Style::default()
                    .fg(Color::Black)
                    .bg(mode_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", separator_style),
        ];

        let hints = [
            ("Enter", "send"),
            ("Alt+1-8", "example"),
            ("Ctrl+N", "new"),
            ("F1", "help"),
            ("Ctrl+Q", "quit"),
        ];
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(format!("{}: {}", key, action), separator_style));
        }

        if let Some(feedback) = self.feedback {
            let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
            let feedback_text = format!("{} ", feedback);
            let padding = (area.width as usize).saturating_sub(left_width + feedback_text.width());
            spans.push(Span::raw(" ".repeat(padding.max(1))));
            spans.push(Span::styled(
                feedback_text,
                Style::default().fg(self.theme.success),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
