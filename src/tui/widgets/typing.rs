//! Three-dot "assistant is typing" indicator

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::tui::theme::Theme;

const DOTS: usize = 3;

/// Animated dots; the highlighted dot advances one step per frame.
pub struct TypingIndicator<'a> {
    frame: usize,
    theme: &'a Theme,
}

impl<'a> TypingIndicator<'a> {
    pub fn new(frame: usize, theme: &'a Theme) -> Self {
        Self { frame, theme }
    }

    /// Index of the raised dot for this frame
    pub fn active_dot(&self) -> usize {
        self.frame % DOTS
    }

    pub fn line(&self) -> Line<'static> {
        let active = self.active_dot();
        let bubble = Style::default().bg(self.theme.assistant_bubble);

        let mut spans = vec![Span::styled(" ", bubble)];
        for i in 0..DOTS {
            let span = if i == active {
                Span::styled(
                    "● ",
                    bubble.fg(self.theme.text).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("• ", bubble.fg(self.theme.text_muted))
            };
            spans.push(span);
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_cycles() {
        let theme = Theme::dark();
        let frames: Vec<_> = (0..4)
            .map(|f| TypingIndicator::new(f, &theme).active_dot())
            .collect();
        assert_eq!(frames, [0, 1, 2, 0]);
    }

    #[test]
    fn test_line_has_three_dots() {
        let theme = Theme::dark();
        let line = TypingIndicator::new(1, &theme).line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " • ● • ");
    }
}
