//! Terminal lifecycle and the main event loop

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::Terminal;

use super::event::{ClipboardManager, EventHandler};
use super::ui;
use super::view::ChatView;
use crate::config::Settings;

/// Main TUI application
pub struct TuiApp {
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Event handler (optional so we can take it out in run loop)
    events: Option<EventHandler>,
    /// Conversation and widget state
    view: ChatView,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(settings: Settings) -> Result<Self> {
        // Initialize terminal
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        // Without the kitty protocol Alt+digit still arrives as a plain Alt chord
        if crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false) {
            let _ = execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            );
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let events = EventHandler::new(settings.tick_rate());
        let view = ChatView::new(settings, events.sender(), ClipboardManager::new());

        Ok(Self {
            terminal,
            events: Some(events),
            view,
        })
    }

    /// Run the main loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let Some(mut events) = self.events.take() else {
            anyhow::bail!("event handler already consumed");
        };

        tracing::info!("TUI started");

        while !self.view.should_quit() {
            // Terminal and view are disjoint fields, so the closure can borrow the view
            let view = &mut self.view;
            self.terminal.draw(|frame| ui::render(frame, view))?;

            match events.next().await {
                Some(event) => self.view.handle_event(event),
                None => break,
            }
        }

        self.events = Some(events);
        tracing::info!("TUI exiting");
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal in reverse order of setup
        let _ = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags);
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}
