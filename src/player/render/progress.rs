//! Progress bar rendering for the transcript player.
//!
//! Displays the play head position, the span of the segment being played
//! in bounded mode, and `MM:SS/MM:SS` times.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::subtitle::format_time;
use crate::theme::Theme;

/// Width reserved for the time display (` MM:SS/MM:SS`).
const TIME_DISPLAY_WIDTH: u16 = 12;

/// Playhead glyph.
const PLAYHEAD: char = '⏺';

/// Glyph for the bounded segment span ahead of the play head.
const SPAN: char = '┅';

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `current_time` - Current playback time
/// * `total_duration` - Total duration of the transcript
/// * `span` - Start and end of the bounded segment, if any
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    span: Option<(f64, f64)>,
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;
    let mut bar: Vec<char> = vec!['─'; bar_width];

    if let Some((start, end)) = span {
        if total_duration > 0.0 {
            let from = position(start, total_duration, bar_width);
            let to = position(end, total_duration, bar_width);
            for cell in bar.iter_mut().take(to).skip(from.max(filled)) {
                *cell = SPAN;
            }
        }
    }

    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    (bar, filled)
}

fn position(time: f64, total: f64, width: usize) -> usize {
    (((time / total).clamp(0.0, 1.0)) * width as f64) as usize
}

/// Map a column inside the bar back to a time.
pub fn time_at_column(column: u16, bar: Rect, total_duration: f64) -> Option<f64> {
    if bar.width == 0 || column < bar.x || column >= bar.x + bar.width {
        return None;
    }
    let ratio = (column - bar.x) as f64 / bar.width as f64;
    Some((ratio * total_duration).clamp(0.0, total_duration.max(0.0)))
}

/// Render the progress bar into `area`.
///
/// Returns the area occupied by the bar itself so mouse clicks can be
/// mapped back to times.
pub fn render_progress_bar(
    frame: &mut Frame,
    area: Rect,
    current_time: f64,
    total_duration: f64,
    span: Option<(f64, f64)>,
    theme: &Theme,
) -> Rect {
    let bar_width = area.width.saturating_sub(TIME_DISPLAY_WIDTH);
    let (bar, filled) =
        build_progress_bar_chars(bar_width as usize, current_time, total_duration, span);

    let mut spans = Vec::with_capacity(4);
    let played: String = bar[..filled].iter().map(|_| '━').collect();
    spans.push(Span::styled(played, Style::default().fg(theme.accent)));

    let rest: String = bar[filled..].iter().collect();
    let mut rest_chars = rest.chars();
    if let Some(head) = rest_chars.next() {
        let head_style = if head == PLAYHEAD {
            Style::default().fg(theme.text_primary)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(head.to_string(), head_style));
    }
    spans.push(Span::styled(
        rest_chars.collect::<String>(),
        Style::default().fg(theme.text_secondary),
    ));

    spans.push(Span::styled(
        format!(
            " {}/{}",
            format_time(current_time),
            format_time(total_duration)
        ),
        Style::default().fg(theme.text_primary),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    Rect::new(area.x, area.y, bar_width, area.height.min(1))
}
