//! Key hint footer.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const SEPARATOR: &str = " · ";

/// Render `key: action` hints centered in `area`.
///
/// Hints that don't fit the width are dropped from the end.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let shown = hints_that_fit(keys, area.width as usize);
    let footer = Paragraph::new(Line::from(build_footer_spans(&keys[..shown], theme)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Number of leading hints whose rendered text fits in `width` columns.
fn hints_that_fit(keys: &[(&str, &str)], width: usize) -> usize {
    let mut used = 0;
    for (i, (key, action)) in keys.iter().enumerate() {
        let sep = if i > 0 { SEPARATOR.width() } else { 0 };
        let hint = key.width() + 2 + action.width();
        if used + sep + hint > width {
            return i;
        }
        used += sep + hint;
    }
    keys.len()
}

fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, action)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(": {}", action),
            theme.text_secondary_style(),
        ));
    }
    spans
}
