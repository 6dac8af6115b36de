//! Header bar widget: app title and tagline

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

pub struct Header<'a> {
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = Style::default().bg(self.theme.panel_background);

        let lines = vec![
            Line::from(vec![
                Span::styled(" ⚖ ", Style::default().fg(self.theme.link)),
                Span::styled(
                    "AI Legal Assistant",
                    Style::default()
                        .fg(self.theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "   Professional legal guidance at your fingertips",
                Style::default().fg(self.theme.text_muted),
            )),
        ];

        Paragraph::new(lines).style(background).render(area, buf);
    }
}
