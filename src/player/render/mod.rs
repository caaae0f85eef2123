//! Rendering for the transcript player.
//!
//! - `transcript`: scrollable segment list with active/cursor highlighting
//! - `status`: current segment card, navigation controls, mode
//! - `progress`: play head bar and times
//! - `help`: key binding overlay

pub mod help;
pub mod progress;
pub mod status;
pub mod transcript;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::engine::AudioEngine;
use crate::player::state::ViewState;
use crate::player::sync::Synchronizer;
use crate::theme::Theme;
use crate::tui::render_footer;

/// Width of the status column.
const STATUS_WIDTH: u16 = 38;

/// Static information about what was loaded.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// Audio file name, `None` in transcript-only mode
    pub audio_name: Option<String>,
    /// Subtitle file name
    pub subtitle_name: String,
    /// Show `start-end` instead of only `start` in the transcript
    pub show_end_times: bool,
}

/// Footer hints for the main screen.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("Enter", "play line"),
    ("n/p", "next/prev"),
    ("r", "replay"),
    ("Space", "play/pause"),
    ("?", "help"),
    ("q", "quit"),
];

/// Draw one full frame.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    sync: &Synchronizer<E>,
    view: &mut ViewState,
    info: &SessionInfo,
    theme: &Theme,
) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, rows[0], info, theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(STATUS_WIDTH), Constraint::Min(10)])
        .split(rows[1]);

    status::render_status(frame, columns[0], sync, view, theme);
    transcript::render_transcript(
        frame,
        columns[1],
        sync.segments(),
        sync.active_index(),
        view,
        info.show_end_times,
        theme,
    );

    render_footer(frame, rows[2], FOOTER_KEYS, theme);

    if view.show_help {
        help::render_help(frame, area, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, info: &SessionInfo, theme: &Theme) {
    let audio = match &info.audio_name {
        Some(name) => Span::styled(format!("♪ {}", name), theme.accent_style()),
        None => Span::styled("♪ no audio", theme.text_secondary_style()),
    };
    let header = Line::from(vec![
        Span::styled(" srtsync ", theme.accent_bold_style()),
        Span::styled("│ ", theme.text_secondary_style()),
        audio,
        Span::styled("  │ ", theme.text_secondary_style()),
        Span::styled(format!("☰ {}", info.subtitle_name), theme.text_style()),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}
