//! Help overlay rendering for the transcript player.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::tui::centered_rect;

/// Key bindings shown in the help overlay, grouped by section.
pub const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Segments",
        &[
            ("Enter", "Play line under cursor"),
            ("n / p", "Next / previous segment"),
            ("r", "Replay current segment"),
            ("click", "Play clicked line"),
        ],
    ),
    (
        "Playback",
        &[
            ("Space", "Play / pause"),
            ("<- / ->", "Seek back / forward"),
        ],
    ),
    (
        "Transcript",
        &[
            ("Up/Down j/k", "Move cursor"),
            ("PgUp/PgDn", "Move cursor by a page"),
            ("g / G", "First / last line"),
            ("f", "Toggle follow playback"),
        ],
    ),
    (
        "General",
        &[("?", "Show this help"), ("q / Esc", "Quit")],
    ),
];

/// Build the help overlay lines.
pub fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (section, keys) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            section.to_string(),
            theme.accent_bold_style(),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), theme.accent_style()),
                Span::styled(desc.to_string(), theme.text_style()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(
        Line::from(Span::styled(
            "Press any key to close",
            theme.text_secondary_style(),
        ))
        .alignment(Alignment::Center),
    );
    lines
}

/// Render the help overlay on top of whatever is on screen.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 80, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(Span::styled(" srtsync help ", theme.accent_bold_style()))
        .title_alignment(Alignment::Center);

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(help_lines(theme)).block(block), popup);
}
