use crossterm::style::{Color, Stylize};

/// Semantic colors
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "←";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "<-";
}

#[derive(Debug, Clone, Copy)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn render(self, supports_unicode: bool) -> &'static str {
        match (self, supports_unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Arrow, true) => icons::ARROW,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Arrow, false) => icons_ascii::ARROW,
        }
    }
}

/// Color `s` when the terminal supports it.
pub fn paint(s: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        format!("{}", s.with(color))
    } else {
        s.to_string()
    }
}
