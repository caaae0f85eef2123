//! Parse command handler

use std::path::Path;

use anyhow::{Context, Result};

use srtsync::cli::OutputFormat;
use srtsync::subtitle::{self, format_timestamp, write_srt, Segment};
use srtsync::theme::{current_theme, Theme};

/// Print the segments parsed from `path`.
pub fn handle(path: &Path, format: OutputFormat) -> Result<()> {
    let segments = subtitle::load_file(path)
        .with_context(|| format!("Failed to load subtitle file {}", path.display()))?;

    let output = render(&segments, format, &current_theme())?;
    print!("{}", output);
    Ok(())
}

fn render(segments: &[Segment], format: OutputFormat, theme: &Theme) -> Result<String> {
    let output = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(segments)?;
            json.push('\n');
            json
        }
        OutputFormat::Srt => write_srt(segments),
        OutputFormat::Text => render_text(segments, theme),
    };
    Ok(output)
}

fn render_text(segments: &[Segment], theme: &Theme) -> String {
    let mut out = String::new();
    for segment in segments {
        let times = format!(
            "{} --> {}",
            format_timestamp(segment.start),
            format_timestamp(segment.end)
        );
        out.push_str(&format!(
            "{}  {}  {}\n",
            theme.accent_text(&format!("{:>4}", segment.id + 1)),
            theme.secondary_text(&times),
            theme.primary_text(&segment.text.replace('\n', " / "))
        ));
    }

    let summary = match segments.len() {
        1 => "1 segment".to_string(),
        n => format!("{} segments", n),
    };
    out.push_str(&theme.secondary_text(&summary));
    out.push('\n');
    out
}
