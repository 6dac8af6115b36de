mod catalog;
mod header;
mod messages;
mod status;
mod typing;
mod welcome;

pub use catalog::CatalogPanel;
pub use header::Header;
pub use messages::{MessageList, MessageListState};
pub use status::StatusBar;
pub use typing::TypingIndicator;
pub use welcome::WelcomeScreen;
