//! Event handling for keyboard, mouse, and terminal events

use std::time::Duration;

use arboard::Clipboard;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::chat::ReplyReady;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal key press
    Key(KeyEvent),
    /// Mouse event (scroll, move)
    Mouse(MouseEvent),
    /// Left click released at a cell
    Click { row: u16, col: u16 },
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for animations
    Tick,
    /// Bracketed paste
    Paste(String),
    /// Deferred answer is ready
    Reply(ReplyReady),
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        // crossterm polling blocks, so it gets its own thread
        std::thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => match mouse.kind {
                        MouseEventKind::Up(MouseButton::Left) => AppEvent::Click {
                            row: mouse.row,
                            col: mouse.column,
                        },
                        _ => AppEvent::Mouse(mouse),
                    },
                    Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                    Ok(Event::Paste(text)) => AppEvent::Paste(text),
                    _ => continue,
                }
            } else {
                AppEvent::Tick
            };

            if event_tx.send(event).is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    /// Sender for events produced outside the polling thread (replies)
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Clipboard manager for copy/paste operations
pub struct ClipboardManager {
    clipboard: Option<Clipboard>,
}

impl ClipboardManager {
    pub fn new() -> Self {
        Self {
            clipboard: Clipboard::new().ok(),
        }
    }

    /// A manager that never touches the system clipboard.
    pub fn disabled() -> Self {
        Self { clipboard: None }
    }

    /// Copy text to clipboard
    pub fn copy(&mut self, text: &str) -> bool {
        if let Some(ref mut clipboard) = self.clipboard {
            clipboard.set_text(text).is_ok()
        } else {
            false
        }
    }

    /// Paste text from clipboard
    pub fn paste(&mut self) -> Option<String> {
        self.clipboard.as_mut()?.get_text().ok()
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}
