//! Subtitle (SRT) support
//!
//! Turns timed-caption text into an ordered list of [`Segment`]s and back.
//!
//! - `parser`: best-effort block parser, never fails
//! - `timestamp`: `HH:MM:SS,mmm` parsing plus display formatting
//! - `writer`: normalized SRT output
//!
//! Loading from disk goes through [`load_file`], which is the only place a
//! subtitle can fail to load (unreadable file or bytes that are not text).

mod error;
mod parser;
mod timestamp;
mod writer;

use std::fs;
use std::path::Path;

use serde::Serialize;

pub use error::LoadError;
pub use parser::parse;
pub use timestamp::{format_time, format_timestamp, parse_timestamp};
pub use writer::write_srt;

/// One timed caption entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Position among emitted segments, starting at 0
    pub id: usize,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds (not validated against `start`)
    pub end: f64,
    /// Caption text, trimmed and never empty
    pub text: String,
}

impl Segment {
    /// Whether `time` falls inside `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    /// Length of the segment in seconds (negative for reversed timings).
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Read and parse a subtitle file.
///
/// The content must be UTF-8; a leading byte order mark is ignored. Parsing
/// itself cannot fail, so an `Ok` may still hold zero segments.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| LoadError::NotText {
        path: path.to_path_buf(),
        source,
    })?;

    let segments = parse(text.strip_prefix('\u{feff}').unwrap_or(&text));
    tracing::debug!(path = %path.display(), count = segments.len(), "parsed subtitle file");
    Ok(segments)
}
