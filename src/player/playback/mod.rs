//! Playback logic for the transcript player.
//!
//! This module handles mapping play head times to transcript segments.

mod lookup;

pub use lookup::{find_segment_at, transcript_duration};
