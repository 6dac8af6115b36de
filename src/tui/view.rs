//! Chat view: routes terminal events into the chat session
//!
//! The view owns the [`ChatSession`], the reply scheduler and the widget
//! state the renderer needs. It has no terminal handle, so it can be driven
//! directly in tests.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::style::{Modifier, Style};
use tokio::sync::mpsc;
use tui_textarea::{CursorMove, Input, TextArea};

use super::event::{AppEvent, ClipboardManager};
use super::hit_test::{ClickTarget, HitTestRegistry};
use super::theme::Theme;
use super::widgets::MessageListState;
use crate::chat::{ChatSession, ReplyReady, ReplyScheduler};
use crate::config::Settings;
use crate::legal::catalog::example_at;
use crate::legal::WELCOME_SHORTCUTS;

const FEEDBACK_TTL: Duration = Duration::from_secs(2);
const SCROLL_STEP: usize = 3;
const PAGE_STEP: usize = 10;

pub struct ChatView {
    pub theme: Theme,
    pub settings: Settings,
    pub session: ChatSession,
    scheduler: ReplyScheduler,
    /// Where reply tasks deliver their answers
    events: mpsc::UnboundedSender<AppEvent>,
    pub input: TextArea<'static>,
    pub clipboard: ClipboardManager,
    pub message_list_state: MessageListState,
    pub hit_registry: HitTestRegistry,
    pub last_mouse_pos: Option<(u16, u16)>,
    pub show_help: bool,
    /// Animation frame counter
    pub tick: usize,
    feedback: Option<(Instant, String)>,
    should_quit: bool,
}

impl ChatView {
    pub fn new(
        settings: Settings,
        events: mpsc::UnboundedSender<AppEvent>,
        clipboard: ClipboardManager,
    ) -> Self {
        let theme = Theme::dark();
        let input = build_input("", &theme);
        let scheduler = ReplyScheduler::new(settings.response_delay());

        Self {
            theme,
            settings,
            session: ChatSession::new(),
            scheduler,
            events,
            input,
            clipboard,
            message_list_state: MessageListState::default(),
            hit_registry: HitTestRegistry::new(),
            last_mouse_pos: None,
            show_help: false,
            tick: 0,
            feedback: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn feedback_text(&self) -> Option<&str> {
        self.feedback.as_ref().map(|(_, text)| text.as_str())
    }

    fn set_feedback(&mut self, text: impl Into<String>) {
        self.feedback = Some((Instant::now(), text.into()));
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Click { row, col } => self.handle_click(col, row),
            AppEvent::Paste(text) => self.paste(&text),
            AppEvent::Reply(reply) => self.apply_reply(reply),
            AppEvent::Tick => {
                self.tick = self.tick.wrapping_add(1);
                if self
                    .feedback
                    .as_ref()
                    .is_some_and(|(at, _)| at.elapsed() >= FEEDBACK_TTL)
                {
                    self.feedback = None;
                }
            }
            AppEvent::Resize(..) => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // The help overlay only reacts to closing and quitting
        if self.show_help && !is_quit_key(&key) {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => self.new_conversation(),
            (KeyModifiers::CONTROL, KeyCode::Char('v')) => {
                if let Some(text) = self.clipboard.paste() {
                    self.paste(&text);
                }
            }
            (KeyModifiers::CONTROL, KeyCode::Char('y')) => self.copy_last_answer(),
            (_, KeyCode::F(1)) => self.show_help = !self.show_help,
            (_, KeyCode::Esc) => self.show_help = false,
            (KeyModifiers::ALT, KeyCode::Char(c)) if c.is_ascii_digit() => {
                if let Some(question) = shortcut_question(c) {
                    self.select_example(question);
                }
            }
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::Up) => self.message_list_state.scroll_up(1),
            (_, KeyCode::Down) => self.message_list_state.scroll_down(1),
            (_, KeyCode::PageUp) => self.message_list_state.scroll_up(PAGE_STEP),
            (_, KeyCode::PageDown) => self.message_list_state.scroll_down(PAGE_STEP),
            _ => {
                // Input is disabled while waiting for a reply
                if self.session.is_loading() {
                    return;
                }
                self.input.input(Input::from(key));
                self.sync_session_input();
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.last_mouse_pos = Some((mouse.column, mouse.row));
        match mouse.kind {
            MouseEventKind::ScrollUp => self.message_list_state.scroll_up(SCROLL_STEP),
            MouseEventKind::ScrollDown => self.message_list_state.scroll_down(SCROLL_STEP),
            _ => {}
        }
    }

    fn handle_click(&mut self, col: u16, row: u16) {
        self.last_mouse_pos = Some((col, row));
        match self.hit_registry.hit_test(col, row).cloned() {
            Some(ClickTarget::Example(question)) => self.select_example(question),
            Some(ClickTarget::Send) => self.submit(),
            None => {}
        }
    }

    /// Put an example question into the input field
    pub fn select_example(&mut self, question: &str) {
        self.session.select_example(question);
        self.rebuild_input();
    }

    /// Submit the current input and schedule the reply
    pub fn submit(&mut self) {
        let Some(pending) = self.session.submit_input() else {
            return;
        };
        self.rebuild_input();
        self.message_list_state.scroll_to_bottom();

        let events = self.events.clone();
        self.scheduler.schedule(pending, move |reply| {
            // The receiver is gone only when the app is shutting down
            let _ = events.send(AppEvent::Reply(reply));
        });
    }

    fn apply_reply(&mut self, reply: ReplyReady) {
        let answer = self.session.compute_response(&reply.question);
        if self.session.on_response_ready(reply.ticket, answer) {
            self.message_list_state.scroll_to_bottom();
        }
    }

    /// Drop the conversation and any pending reply
    pub fn new_conversation(&mut self) {
        if self.scheduler.cancel() {
            tracing::info!("Discarded pending reply for new conversation");
        }
        self.session.reset();
        self.rebuild_input();
        self.message_list_state = MessageListState::default();
    }

    fn paste(&mut self, text: &str) {
        if self.session.is_loading() {
            return;
        }
        // Single-line input
        let flat = text.replace(['\r', '\n'], " ");
        self.input.insert_str(flat);
        self.sync_session_input();
    }

    fn copy_last_answer(&mut self) {
        let Some(answer) = self
            .session
            .messages()
            .iter()
            .rev()
            .find(|m| !m.is_user())
            .map(|m| m.text().to_string())
        else {
            return;
        };
        if self.clipboard.copy(&answer) {
            self.set_feedback("Copied answer");
        } else {
            self.set_feedback("Clipboard unavailable");
        }
    }

    fn sync_session_input(&mut self) {
        let lines = self.input.lines();
        let text = lines.join(" ");
        let multi_line = lines.len() > 1;
        self.session.set_input(text);
        if multi_line {
            self.rebuild_input();
        }
    }

    fn rebuild_input(&mut self) {
        self.input = build_input(self.session.input(), &self.theme);
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers == KeyModifiers::CONTROL
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
}

/// Alt+1..Alt+8 pick catalog examples, Alt+9 and Alt+0 the welcome shortcuts
fn shortcut_question(digit: char) -> Option<&'static str> {
    match digit {
        '9' => WELCOME_SHORTCUTS.first().map(|s| s.question),
        '0' => WELCOME_SHORTCUTS.get(1).map(|s| s.question),
        d => {
            let n = d.to_digit(10)? as usize;
            example_at(n.checked_sub(1)?)
        }
    }
}

fn build_input(text: &str, theme: &Theme) -> TextArea<'static> {
    let mut input = TextArea::new(vec![text.to_string()]);
    input.set_cursor_line_style(Style::default());
    input.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    input.set_placeholder_text("Ask your legal question here...");
    input.set_placeholder_style(Style::default().fg(theme.text_muted));
    input.set_style(Style::default().fg(theme.text));
    input.move_cursor(CursorMove::End);
    input
}
