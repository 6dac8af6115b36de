//! Chat message types.

use std::fmt::Write;

use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// Timestamp pattern used when none is configured or the configured one
/// cannot be rendered.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-I:%M:%S %p";

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single chat turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    id: String,
    text: String,
    role: MessageRole,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            role,
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, text)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Timestamp rendered with a `strftime` pattern. An unrenderable pattern
    /// falls back to [`DEFAULT_TIMESTAMP_FORMAT`].
    pub fn format_time(&self, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.timestamp.format(pattern)).is_ok() {
            return out;
        }

        tracing::warn!(pattern, "Invalid timestamp format, using default");
        out.clear();
        // The default pattern is known to be valid
        let _ = write!(out, "{}", self.timestamp.format(DEFAULT_TIMESTAMP_FORMAT));
        out
    }
}
