//! Status panel rendering for the transcript player.
//!
//! Left column: the current segment card, navigation controls, playback
//! mode and the progress bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::progress::render_progress_bar;
use crate::player::engine::AudioEngine;
use crate::player::playback::transcript_duration;
use crate::player::state::{SyncMode, ViewState};
use crate::player::sync::Synchronizer;
use crate::subtitle::format_time;
use crate::theme::Theme;

/// Headline of the segment card: `#n` (1-based) or `--`.
pub fn segment_label(active: Option<usize>) -> String {
    match active {
        Some(index) => format!("#{}", index + 1),
        None => "--".to_string(),
    }
}

/// Mode line, e.g. `segment · stops at 00:04` or `follow`.
pub fn mode_label(mode: SyncMode) -> String {
    match mode {
        SyncMode::Free => mode.label().to_string(),
        SyncMode::Bounded { end } => format!("{} · stops at {}", mode.label(), format_time(end)),
    }
}

/// Render the status column.
pub fn render_status<E: AudioEngine>(
    frame: &mut Frame,
    area: Rect,
    sync: &Synchronizer<E>,
    view: &mut ViewState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Current segment card
            Constraint::Length(6), // Controls + progress
            Constraint::Min(0),
        ])
        .split(area);

    render_segment_card(frame, chunks[0], sync, theme);
    render_controls(frame, chunks[1], sync, view, theme);
}

fn render_segment_card<E: AudioEngine>(
    frame: &mut Frame,
    area: Rect,
    sync: &Synchronizer<E>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(" Current Segment ", theme.text_secondary_style()))
        .title_alignment(Alignment::Center);

    let active = sync.active_segment();
    let body = match active {
        Some(segment) => Span::styled(segment.text.clone(), theme.text_style()),
        None => Span::styled("Select a line to play", theme.text_secondary_style()),
    };

    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            segment_label(sync.active_index()),
            theme.accent_bold_style(),
        )),
        Line::from(body),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(card, area);
}

fn render_controls<E: AudioEngine>(
    frame: &mut Frame,
    area: Rect,
    sync: &Synchronizer<E>,
    view: &mut ViewState,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Mode
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Progress
        ])
        .split(inner);

    let button = |key: &'static str, label: &'static str, enabled: bool| {
        let style = if enabled {
            theme.accent_bold_style()
        } else {
            theme
                .text_secondary_style()
                .add_modifier(Modifier::DIM)
        };
        Span::styled(format!("[{}] {}", key, label), style)
    };

    let buttons = Line::from(vec![
        button("p", "Prev", sync.can_prev()),
        Span::raw("  "),
        button("r", "Replay", sync.can_replay()),
        Span::raw("  "),
        button("n", "Next", sync.can_next()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(buttons), rows[0]);

    let Some(engine) = sync.engine() else {
        let warning = Paragraph::new(Line::from(Span::styled(
            "⚠ Please load audio first",
            theme.error_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(warning, rows[1]);
        view.progress_area = Rect::default();
        return;
    };

    let transport = if engine.is_playing() { "▶" } else { "⏸" };
    let mode = Line::from(vec![
        Span::styled(format!("{} ", transport), theme.success_style()),
        Span::styled(mode_label(sync.mode()), theme.text_style()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(mode), rows[1]);

    let total = engine
        .duration()
        .unwrap_or_else(|| transcript_duration(sync.segments()));
    let span = match (sync.mode(), sync.active_segment()) {
        (SyncMode::Bounded { end }, Some(segment)) => Some((segment.start, end)),
        _ => None,
    };
    view.progress_area =
        render_progress_bar(frame, rows[3], engine.current_time(), total, span, theme);
}
