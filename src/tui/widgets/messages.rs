//! Message list widget
//!
//! User messages are right-aligned bubbles, assistant messages left-aligned.
//! Each bubble carries a header line with the author and timestamp.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::StatefulWidget,
};
use unicode_width::UnicodeWidthStr;

use crate::chat::ChatMessage;
use crate::tui::theme::Theme;
use crate::tui::widgets::TypingIndicator;

/// State for the message list
#[derive(Debug)]
pub struct MessageListState {
    /// Current scroll offset (in lines)
    pub offset: usize,
    /// Total content height (in lines), updated on render
    pub content_height: usize,
    /// Viewport height, updated on render
    pub viewport_height: usize,
    /// Keep the view pinned to the newest line
    follow: bool,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self {
            offset: 0,
            content_height: 0,
            viewport_height: 0,
            follow: true,
        }
    }
}

impl MessageListState {
    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
        self.follow = self.offset >= self.max_offset();
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = (self.offset + amount).min(self.max_offset());
        self.follow = self.offset >= self.max_offset();
    }

    /// Pin to the bottom; takes effect on the next render once the new
    /// content height is known.
    pub fn scroll_to_bottom(&mut self) {
        self.follow = true;
        self.offset = self.max_offset();
    }
}

/// Widget for rendering the message list
pub struct MessageList<'a> {
    messages: &'a [ChatMessage],
    theme: &'a Theme,
    timestamp_format: &'a str,
    typing_frame: Option<usize>,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [ChatMessage], theme: &'a Theme, timestamp_format: &'a str) -> Self {
        Self {
            messages,
            theme,
            timestamp_format,
            typing_frame: None,
        }
    }

    /// Show the typing indicator after the last message
    pub fn typing(mut self, frame: Option<usize>) -> Self {
        self.typing_frame = frame;
        self
    }

    fn bubble_lines(&self, msg: &ChatMessage, width: usize) -> Vec<(Line<'static>, Alignment)> {
        // Bubbles take at most 80% of the width
        let bubble_width = (width * 4 / 5).max(12).min(width);
        let text_width = bubble_width.saturating_sub(2).max(1);

        let (author, author_style, bubble, alignment) = if msg.is_user() {
            (
                "You",
                Style::default()
                    .fg(self.theme.link)
                    .add_modifier(Modifier::BOLD),
                Style::default().bg(self.theme.user_bubble).fg(ratatui::style::Color::White),
                Alignment::Right,
            )
        } else {
            (
                "Assistant",
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
                Style::default().bg(self.theme.assistant_bubble).fg(self.theme.text),
                Alignment::Left,
            )
        };

        let mut lines = vec![(
            Line::from(vec![
                Span::styled(author, author_style),
                Span::styled(
                    format!(" · {}", msg.format_time(self.timestamp_format)),
                    Style::default().fg(self.theme.text_muted),
                ),
            ]),
            alignment,
        )];

        let wrapped = textwrap::wrap(msg.text(), text_width);
        let inner = wrapped
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0);
        for part in wrapped {
            // Pad every row to the widest one so the bubble is a rectangle
            let pad = inner.saturating_sub(part.width());
            let content = format!(" {}{} ", part, " ".repeat(pad));
            lines.push((Line::from(Span::styled(content, bubble)), alignment));
        }

        lines.push((Line::default(), Alignment::Left));
        lines
    }

    /// All rendered lines for the given width.
    pub fn lines(&self, width: usize) -> Vec<(Line<'static>, Alignment)> {
        let mut lines: Vec<_> = self
            .messages
            .iter()
            .flat_map(|msg| self.bubble_lines(msg, width))
            .collect();

        if let Some(frame) = self.typing_frame {
            lines.push((
                TypingIndicator::new(frame, self.theme).line(),
                Alignment::Left,
            ));
        }
        lines
    }
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.lines(area.width as usize);
        state.content_height = lines.len();
        state.viewport_height = area.height as usize;
        if state.follow {
            state.offset = state.max_offset();
        }
        state.offset = state.offset.min(state.max_offset());

        for (row, (line, alignment)) in lines
            .iter()
            .skip(state.offset)
            .take(area.height as usize)
            .enumerate()
        {
            let width = (line.width() as u16).min(area.width);
            let x = match alignment {
                Alignment::Right => area.x + area.width - width,
                _ => area.x,
            };
            buf.set_line(x, area.y + row as u16, line, width);
        }
    }
}
