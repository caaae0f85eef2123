//! Best-effort SRT parser.
//!
//! Caption files found in the wild are often slightly broken: missing index
//! lines, stray blank blocks, empty cues. The parser keeps every block it can
//! make sense of and silently drops the rest.

use super::timestamp::parse_timestamp;
use super::Segment;

/// Token separating start and end on a timing line.
const ARROW: &str = "-->";

/// Separator used to split the timing line into its two timestamps.
const ARROW_SEPARATOR: &str = " --> ";

/// Parse SRT text into segments.
///
/// Never fails. Blocks are separated by a blank line; within a block the
/// first line containing `-->` is the timing line and everything after it is
/// the caption text. A leading numeric index line is tolerated and ignored.
///
/// Blocks are skipped when they have fewer than two lines, have no timing
/// line, have a timing line that does not split into exactly two timestamps,
/// or have no text left after trimming. Skipped blocks do not consume an id,
/// so ids are always `0..n`.
///
/// # Examples
///
/// ```
/// use srtsync::subtitle::parse;
///
/// let segments = parse("1\n00:00:01,000 --> 00:00:02,500\nHello\n");
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].start, 1.0);
/// assert_eq!(segments[0].end, 2.5);
/// assert_eq!(segments[0].text, "Hello");
/// ```
pub fn parse(text: &str) -> Vec<Segment> {
    let normalized = text.replace('\r', "");
    let mut segments = Vec::new();

    for block in normalized.split("\n\n") {
        if let Some((start, end, caption)) = parse_block(block) {
            segments.push(Segment {
                id: segments.len(),
                start,
                end,
                text: caption,
            });
        }
    }

    segments
}

/// Extract `(start, end, text)` from one block, or `None` if it is unusable.
fn parse_block(block: &str) -> Option<(f64, f64, String)> {
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.len() < 2 {
        return None;
    }

    let timing_idx = lines.iter().position(|line| line.contains(ARROW))?;

    let times: Vec<&str> = lines[timing_idx].split(ARROW_SEPARATOR).collect();
    let [start, end] = times.as_slice() else {
        return None;
    };

    let caption = lines[timing_idx + 1..].join("\n");
    let caption = caption.trim();
    if caption.is_empty() {
        return None;
    }

    Some((
        parse_timestamp(start.trim()),
        parse_timestamp(end.trim()),
        caption.to_string(),
    ))
}
