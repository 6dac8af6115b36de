//! TUI (Terminal User Interface) for the legal assistant
//!
//! A sidebar of legal areas with clickable example questions next to a chat
//! panel. Answers arrive after a short simulated delay.

mod app;
mod layout;
mod ui;

pub mod event;
pub mod hit_test;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::TuiApp;
pub use view::ChatView;

use anyhow::Result;

use crate::config::Settings;

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    let mut app = TuiApp::new(settings)?;
    app.run().await
}
