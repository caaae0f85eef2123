//! Time-to-segment lookup.

use crate::subtitle::Segment;

/// Find the first segment whose `[start, end)` interval contains `time`.
///
/// Segments are scanned in order, so with overlapping captions the earlier
/// one wins. Returns `None` in gaps between segments and for NaN times.
pub fn find_segment_at(segments: &[Segment], time: f64) -> Option<usize> {
    segments.iter().position(|segment| segment.contains(time))
}

/// Length of the transcript: the latest end time among all segments.
///
/// Used as the play head limit when the engine does not know the media
/// length. Returns 0.0 for an empty transcript.
pub fn transcript_duration(segments: &[Segment]) -> f64 {
    segments
        .iter()
        .map(|segment| segment.end)
        .filter(|end| end.is_finite())
        .fold(0.0, f64::max)
}
