//! Chat session state container.
//!
//! Holds the message log, the input text and the pending-reply flag, and
//! exposes the transitions the view drives. Nothing in here performs I/O or
//! waits; scheduling the reply is the caller's job (see
//! [`ReplyScheduler`](super::ReplyScheduler)).

use super::message::ChatMessage;
use crate::legal::Responder;

/// A reply the caller has to schedule after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Identifies the question cycle; must be handed back to
    /// [`ChatSession::on_response_ready`].
    pub ticket: u64,
    pub question: String,
}

/// State of one chat view.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    /// Ticket of the outstanding question, if any. `Some` means loading.
    pending: Option<u64>,
    next_ticket: u64,
    responder: Responder,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responder(responder: Responder) -> Self {
        Self {
            responder,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the send control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Text-change event from the input field. The field is disabled while a
    /// reply is pending, so edits are dropped then.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.is_loading() {
            return;
        }
        self.input = text.into();
    }

    /// Put an example question in the input without submitting it.
    pub fn select_example(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Submit a question.
    ///
    /// Returns `None` when the text is blank or a reply is still pending; the
    /// session is left untouched in that case.
    pub fn submit_question(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            tracing::trace!("Ignoring blank submission");
            return None;
        }
        if let Some(ticket) = self.pending {
            tracing::debug!(ticket, "Ignoring submission while reply is pending");
            return None;
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;

        self.messages.push(ChatMessage::user(text));
        self.input.clear();
        self.pending = Some(ticket);

        tracing::debug!(ticket, chars = text.len(), "Question submitted");
        Some(PendingReply {
            ticket,
            question: text.to_string(),
        })
    }

    /// Submit whatever is currently in the input field.
    pub fn submit_input(&mut self) -> Option<PendingReply> {
        let text = self.input.clone();
        self.submit_question(&text)
    }

    /// Canned answer for a question.
    pub fn compute_response(&self, question: &str) -> &'static str {
        self.responder.respond(question)
    }

    /// Deliver the answer for a pending question.
    ///
    /// Returns `false` (and changes nothing) if `ticket` is not the cycle
    /// currently pending, e.g. a reply that raced a [`reset`](Self::reset).
    pub fn on_response_ready(&mut self, ticket: u64, answer: impl Into<String>) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(ticket, pending = ?self.pending, "Dropping stale reply");
            return false;
        }
        self.messages.push(ChatMessage::assistant(answer));
        self.pending = None;
        tracing::debug!(ticket, "Reply delivered");
        true
    }

    /// Start a new conversation. Any pending ticket becomes stale.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.pending = None;
    }
}
