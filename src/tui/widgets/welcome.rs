//! Empty-conversation screen with the two shortcut buttons

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::legal::WELCOME_SHORTCUTS;
use crate::tui::hit_test::{ClickTarget, HitTestRegistry};
use crate::tui::theme::Theme;

const GAP: u16 = 3;

const INTRO: &str = "Ask any legal question to get started. Click on examples from the sidebar or type your own question.";

pub struct WelcomeScreen<'a> {
    theme: &'a Theme,
    mouse_pos: Option<(u16, u16)>,
}

impl<'a> WelcomeScreen<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            mouse_pos: None,
        }
    }

    pub fn mouse_pos(mut self, pos: Option<(u16, u16)>) -> Self {
        self.mouse_pos = pos;
        self
    }

    fn button_label(label: &str) -> String {
        format!("[ {} ]", label)
    }

    pub fn render(self, area: Rect, buf: &mut Buffer, registry: &mut HitTestRegistry) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("⚖", Style::default().fg(self.theme.text_muted))),
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to AI Legal Assistant",
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        let muted = Style::default().fg(self.theme.text_muted);
        lines.extend(
            textwrap::wrap(INTRO, (area.width as usize).max(1))
                .into_iter()
                .map(|part| Line::from(Span::styled(part.into_owned(), muted))),
        );

        let intro_height = (lines.len() as u16).min(area.height);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(Rect { height: intro_height, ..area }, buf);

        // Shortcut buttons on one row, centered, below the intro
        let button_y = area.y + intro_height + 1;
        if button_y >= area.y + area.height {
            return;
        }

        let labels: Vec<String> = WELCOME_SHORTCUTS
            .iter()
            .map(|s| Self::button_label(s.label))
            .collect();
        let total: u16 = labels.iter().map(|l| l.width() as u16).sum::<u16>()
            + GAP * (labels.len() as u16).saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for (shortcut, label) in WELCOME_SHORTCUTS.iter().zip(&labels) {
            let width = (label.width() as u16).min((area.x + area.width).saturating_sub(x));
            if width == 0 {
                break;
            }
            let rect = Rect::new(x, button_y, width, 1);

            let hovered = self.mouse_pos.is_some_and(|(mx, my)| {
                mx >= rect.x && mx < rect.x + rect.width && my == rect.y
            });
            let style = if hovered {
                Style::default().fg(self.theme.text).bg(self.theme.accent)
            } else {
                Style::default().fg(self.theme.link).bg(self.theme.panel_background)
            };

            buf.set_stringn(x, button_y, label, width as usize, style);
            registry.register(rect, ClickTarget::Example(shortcut.question));
            x += width + GAP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_shortcut_buttons() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let mut registry = HitTestRegistry::new();

        WelcomeScreen::new(&theme).render(area, &mut buf, &mut registry);

        let hits: Vec<_> = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter_map(|(x, y)| registry.hit_test(x, y).cloned())
            .collect();
        assert!(hits.contains(&ClickTarget::Example("What are my rights as a tenant?")));
        assert!(hits.contains(&ClickTarget::Example(
            "How do I start a small business legally?"
        )));
    }
}
