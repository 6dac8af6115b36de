//! Chat session state and the deferred reply task.

pub mod message;
pub mod scheduler;
pub mod session;

pub use message::{ChatMessage, MessageRole, DEFAULT_TIMESTAMP_FORMAT};
pub use scheduler::{ReplyReady, ReplyScheduler};
pub use session::{ChatSession, PendingReply};
