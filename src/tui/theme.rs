//! TUI color theme

use ratatui::style::Color;

/// TUI color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel_background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub link: Color,
    pub success: Color,
    pub warning: Color,
    pub user_bubble: Color,
    pub assistant_bubble: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            panel_background: Color::Rgb(37, 37, 38),
            text: Color::Rgb(212, 212, 212),
            text_muted: Color::Rgb(128, 128, 128),
            border: Color::Rgb(60, 60, 60),
            accent: Color::Rgb(37, 99, 235),
            link: Color::Rgb(96, 165, 250),
            success: Color::Rgb(72, 185, 100),
            warning: Color::Rgb(245, 158, 11),
            user_bubble: Color::Rgb(29, 78, 216),
            assistant_bubble: Color::Rgb(45, 45, 48),
        }
    }
}
