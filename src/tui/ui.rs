//! Main UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::hit_test::ClickTarget;
use super::layout::AppLayout;
use super::view::ChatView;
use super::widgets::{CatalogPanel, Header, MessageList, StatusBar, WelcomeScreen};
use crate::legal::LEGAL_AREAS;

/// Render the entire UI
pub fn render(frame: &mut Frame, view: &mut ChatView) {
    view.hit_registry.clear();
    let area = frame.area();
    let layout = AppLayout::new(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(view.theme.background)),
        area,
    );
    frame.render_widget(Header::new(&view.theme), layout.header_area);

    CatalogPanel::new(LEGAL_AREAS, &view.theme)
        .mouse_pos(view.last_mouse_pos)
        .render(layout.sidebar_area, frame.buffer_mut(), &mut view.hit_registry);

    render_chat_title(frame, view, layout.chat_title_area);
    render_messages(frame, view, layout.messages_area);
    render_input(frame, view, layout.input_area);
    render_send_button(frame, view, layout.send_area);

    frame.render_widget(
        StatusBar::new(&view.theme, view.session.is_loading()).with_feedback(view.feedback_text()),
        layout.status_area,
    );

    if view.show_help {
        render_help(frame, view, area);
    }
}

fn render_chat_title(frame: &mut Frame, view: &ChatView, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" 💬 ", Style::default().fg(view.theme.link)),
        Span::styled(
            "Legal Consultation Chat",
            Style::default()
                .fg(view.theme.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, area);
}

fn render_messages(frame: &mut Frame, view: &mut ChatView, area: Rect) {
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };

    if view.session.messages().is_empty() {
        WelcomeScreen::new(&view.theme)
            .mouse_pos(view.last_mouse_pos)
            .render(area, frame.buffer_mut(), &mut view.hit_registry);
        return;
    }

    let typing = view.session.is_loading().then_some(view.tick);
    let list = MessageList::new(
        view.session.messages(),
        &view.theme,
        &view.settings.timestamp_format,
    )
    .typing(typing);

    frame.render_stateful_widget(list, area, &mut view.message_list_state);
}

fn render_input(frame: &mut Frame, view: &mut ChatView, area: Rect) {
    let waiting = view.session.is_loading();
    let (title, border_color) = if waiting {
        (" Waiting for answer... ", view.theme.text_muted)
    } else {
        (" Ask a question ", view.theme.accent)
    };

    view.input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );
    view.input.set_cursor_style(if waiting {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    });

    frame.render_widget(&view.input, area);
}

fn render_send_button(frame: &mut Frame, view: &mut ChatView, area: Rect) {
    let enabled = view.session.can_submit();
    let style = if enabled {
        Style::default()
            .fg(view.theme.text)
            .bg(view.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(view.theme.text_muted)
    };

    let button = Paragraph::new(Span::styled(" Send ", style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(view.theme.border)),
        );
    frame.render_widget(button, area);

    // Disabled sends are no-ops in the session, so the target stays registered
    view.hit_registry.register(area, ClickTarget::Send);
}

fn render_help(frame: &mut Frame, view: &ChatView, area: Rect) {
    let key_style = Style::default().fg(view.theme.link);
    let entries = [
        (" Enter       ", "Send question"),
        (" Alt+1..8    ", "Use a sidebar example"),
        (" Alt+9/Alt+0 ", "Use a welcome shortcut"),
        (" Ctrl+N      ", "New conversation"),
        (" Ctrl+V      ", "Paste"),
        (" Ctrl+Y      ", "Copy last answer"),
        (" ↑/↓ PgUp/Dn ", "Scroll messages"),
        (" Mouse       ", "Click examples, scroll"),
        (" F1 / Esc    ", "Toggle / close help"),
        (" Ctrl+Q      ", "Quit"),
    ];

    let mut help_lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    help_lines.extend(
        entries
            .iter()
            .map(|(key, action)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*action)])),
    );

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(view.theme.warning))
            .title(" Help "),
    );

    let area = centered_rect(60, 60, area);
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::event::ClipboardManager;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_welcome_and_catalog() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut view = ChatView::new(Settings::default(), tx, ClipboardManager::disabled());
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();

        terminal.draw(|frame| render(frame, &mut view)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("AI Legal Assistant"));
        assert!(text.contains("Contract Law"));
        assert!(text.contains("Legal Disclaimer"));
        assert!(text.contains("Welcome to AI Legal Assistant"));
        assert!(text.contains("[ Tenant Rights ]"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_typing_indicator_while_waiting() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut view = ChatView::new(Settings::default(), tx, ClipboardManager::disabled());
        view.select_example("How is child custody determined?");
        view.submit();

        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| render(frame, &mut view)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("How is child custody determined?"));
        assert!(text.contains("Waiting for answer"));
        assert!(text.contains("WAITING"));
        assert!(text.contains("●"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_targets_registered_after_render() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut view = ChatView::new(Settings::default(), tx, ClipboardManager::disabled());
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| render(frame, &mut view)).unwrap();

        let layout = AppLayout::new(Rect::new(0, 0, 140, 45));
        assert_eq!(
            view.hit_registry
                .hit_test(layout.send_area.x + 2, layout.send_area.y + 1),
            Some(&ClickTarget::Send)
        );
    }
}
