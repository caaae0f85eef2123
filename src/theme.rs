//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Background of the active transcript line
    pub highlight_bg: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

/// Names accepted by [`Theme::from_name`].
pub const THEME_NAMES: &[&str] = &["default", "classic", "ocean"];

impl Default for Theme {
    fn default() -> Self {
        Self::blue()
    }
}

impl Theme {
    /// Default theme - light gray text with blue highlights.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn blue() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Blue,
            highlight_bg: Color::Indexed(17), // Dark navy
            error: Color::Yellow,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            highlight_bg: Color::Indexed(236),
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            highlight_bg: Color::Indexed(23),
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Look up a theme by config name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" | "blue" => Some(Self::blue()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active transcript line.
    pub fn active_line_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    match color_to_ansi(color) {
        Some(code) if colors_enabled() => format!("{}{}{}", code, text, ANSI_RESET),
        _ => text.to_string(),
    }
}

/// Whether CLI output should carry ANSI colors.
///
/// Off when `NO_COLOR` is set or stdout is not a terminal.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Foreground escape sequence for a ratatui color. `None` for `Reset`.
fn color_to_ansi(color: Color) -> Option<String> {
    let code = match color {
        Color::Reset => return None,
        Color::Indexed(index) => return Some(format!("\x1b[38;5;{}m", index)),
        Color::Rgb(r, g, b) => return Some(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::LightRed => 91,
        Color::LightGreen => 92,
        Color::LightYellow => 93,
        Color::LightBlue => 94,
        Color::LightMagenta => 95,
        Color::LightCyan => 96,
        Color::White => 97,
    };
    Some(format!("\x1b[{}m", code))
}

/// Theme from the user's config, or the default when it can't be loaded.
pub fn current_theme() -> Theme {
    crate::config::Config::load()
        .map(|config| config.ui.theme())
        .unwrap_or_default()
}
