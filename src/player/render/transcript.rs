//! Transcript list rendering.
//!
//! One row per segment: start time, optional end time, then the caption
//! text flattened onto a single line and truncated to fit.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::player::state::ViewState;
use crate::subtitle::{format_time, Segment};
use crate::theme::Theme;

/// Separator used when flattening multi-line captions.
const LINE_JOINER: &str = " / ";

/// Flatten a caption onto one line.
pub fn flatten_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(LINE_JOINER)
}

/// Truncate `text` to at most `max_width` terminal columns, adding an
/// ellipsis when something was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Text prefix for one row: `▶ 01:02 ` (active) or `  01:02 `.
fn row_prefix(segment: &Segment, active: bool, show_end_times: bool) -> String {
    let marker = if active { '▶' } else { ' ' };
    if show_end_times {
        format!(
            "{} {}-{} ",
            marker,
            format_time(segment.start),
            format_time(segment.end)
        )
    } else {
        format!("{} {} ", marker, format_time(segment.start))
    }
}

/// Render the transcript panel.
///
/// Updates `view.scroll_offset` so the cursor stays visible and records the
/// list area for mouse hit testing.
pub fn render_transcript(
    frame: &mut Frame,
    area: Rect,
    segments: &[Segment],
    active: Option<usize>,
    view: &mut ViewState,
    show_end_times: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(" Transcript ", theme.accent_bold_style()))
        .title(
            Line::from(Span::styled(
                format!(" {} lines ", segments.len()),
                theme.text_secondary_style(),
            ))
            .alignment(Alignment::Right),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);
    view.transcript_area = inner;

    if segments.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No subtitles loaded", theme.text_style())),
            Line::from(Span::styled(
                "Load an .srt file to see the transcript.",
                theme.text_secondary_style(),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let height = inner.height as usize;
    view.scroll_to(view.cursor, height, segments.len());

    let width = inner.width as usize;
    let lines: Vec<Line> = segments
        .iter()
        .enumerate()
        .skip(view.scroll_offset)
        .take(height)
        .map(|(index, segment)| {
            let is_active = active == Some(index);
            let is_cursor = view.cursor == index;
            let prefix = row_prefix(segment, is_active, show_end_times);
            let text_width = width.saturating_sub(prefix.width());
            let text = truncate_to_width(&flatten_text(&segment.text), text_width);

            let (prefix_style, text_style) = if is_active {
                (theme.active_line_style(), theme.active_line_style())
            } else {
                (theme.text_secondary_style(), theme.text_style())
            };

            let mut line = Line::from(vec![
                Span::styled(prefix, prefix_style),
                Span::styled(text, text_style),
            ]);
            if is_cursor {
                line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
            }
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
