//! Sidebar with the legal area cards and the disclaimer box
//!
//! Every example question is clickable. Examples are numbered in display
//! order so they can also be picked with Alt+1..Alt+8.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::legal::{LegalArea, DISCLAIMER, DISCLAIMER_TITLE};
use crate::tui::hit_test::{ClickTarget, HitTestRegistry};
use crate::tui::theme::Theme;

pub struct CatalogPanel<'a> {
    areas: &'a [LegalArea],
    theme: &'a Theme,
    mouse_pos: Option<(u16, u16)>,
}

impl<'a> CatalogPanel<'a> {
    pub fn new(areas: &'a [LegalArea], theme: &'a Theme) -> Self {
        Self {
            areas,
            theme,
            mouse_pos: None,
        }
    }

    pub fn mouse_pos(mut self, pos: Option<(u16, u16)>) -> Self {
        self.mouse_pos = pos;
        self
    }

    fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse_pos.is_some_and(|(mx, my)| {
            mx >= rect.x && mx < rect.x + rect.width && my >= rect.y && my < rect.y + rect.height
        })
    }

    /// Height of the disclaimer box for a given panel width (borders included)
    fn disclaimer_height(width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1) as usize;
        textwrap::wrap(DISCLAIMER, inner).len() as u16 + 3
    }

    fn render_disclaimer(&self, area: Rect, buf: &mut Buffer) {
        let inner = area.width.saturating_sub(2).max(1) as usize;
        let mut lines = vec![Line::from(Span::styled(
            DISCLAIMER_TITLE,
            Style::default()
                .fg(self.theme.warning)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(textwrap::wrap(DISCLAIMER, inner).into_iter().map(|part| {
            Line::from(Span::styled(
                part.into_owned(),
                Style::default().fg(self.theme.warning),
            ))
        }));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.warning)),
            )
            .render(area, buf);
    }

    pub fn render(self, area: Rect, buf: &mut Buffer, registry: &mut HitTestRegistry) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled(
                " Legal Areas ",
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let disclaimer_height = Self::disclaimer_height(inner.width);
        let cards_bottom = if inner.height > disclaimer_height + 2 {
            let disclaimer_area = Rect {
                y: inner.y + inner.height - disclaimer_height,
                height: disclaimer_height,
                ..inner
            };
            self.render_disclaimer(disclaimer_area, buf);
            disclaimer_area.y.saturating_sub(1)
        } else {
            inner.y + inner.height
        };

        let width = inner.width as usize;
        let mut y = inner.y;
        let mut number = 0usize;

        for area_entry in self.areas {
            if y >= cards_bottom {
                break;
            }
            buf.set_stringn(
                inner.x,
                y,
                area_entry.label,
                width,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            );
            y += 1;

            for part in textwrap::wrap(area_entry.description, width) {
                if y >= cards_bottom {
                    break;
                }
                buf.set_stringn(
                    inner.x,
                    y,
                    part,
                    width,
                    Style::default().fg(self.theme.text_muted),
                );
                y += 1;
            }

            for example in area_entry.examples.iter().copied() {
                number += 1;
                let quoted = format!("{number} \u{201c}{example}\u{201d}");
                let wrapped = textwrap::wrap(
                    &quoted,
                    textwrap::Options::new(width.saturating_sub(2).max(1)).subsequent_indent("  "),
                );
                let rows = (wrapped.len() as u16).min(cards_bottom.saturating_sub(y));
                if rows == 0 {
                    break;
                }

                let rect = Rect::new(inner.x, y, inner.width, rows);
                let style = if self.is_hovered(rect) {
                    Style::default()
                        .fg(self.theme.link)
                        .add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(self.theme.link)
                };

                for part in wrapped.iter().take(rows as usize) {
                    buf.set_stringn(inner.x + 1, y, part, width - 1, style);
                    y += 1;
                }
                registry.register(rect, ClickTarget::Example(example));
            }

            y += 1;
        }
    }
}
