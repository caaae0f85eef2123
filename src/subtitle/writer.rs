//! SRT output for parsed segments.

use std::fmt::Write;

use super::timestamp::format_timestamp;
use super::Segment;

/// Render segments back into SRT text.
///
/// Index lines are renumbered from the segment ids (`id + 1`), so the output
/// of a best-effort parse is a clean, contiguous file.
pub fn write_srt(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            segment.id + 1,
            format_timestamp(segment.start),
            format_timestamp(segment.end),
            segment.text
        );
    }
    out
}
