//! Segment synchronizer.
//!
//! Keeps the transcript and the audio engine in step. Two modes:
//!
//! - `Free`: playback runs on; every time update re-selects the segment
//!   under the play head so the highlight follows along.
//! - `Bounded`: a single segment was picked; the first time update at or past
//!   its end pauses the engine and drops back to `Free`. This is a one-shot
//!   stop, not a loop: pressing play afterwards continues unconstrained.
//!
//! Navigation requests that make no sense (index out of range, nothing
//! active, no audio loaded) are ignored rather than reported, so callers do
//! not have to validate anything first.

use super::engine::AudioEngine;
use super::playback::find_segment_at;
use super::state::{PlaybackState, SyncMode};
use crate::subtitle::Segment;

/// What a time update did to the playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUpdate {
    /// Nothing changed
    Unchanged,
    /// A bounded segment reached its end; the engine was paused
    SegmentEnded,
    /// The play head moved into another segment, now active
    Followed(usize),
}

/// Drives an [`AudioEngine`] from transcript navigation and follows its
/// play head.
///
/// Audio counts as loaded while an engine is installed.
#[derive(Debug)]
pub struct Synchronizer<E> {
    segments: Vec<Segment>,
    engine: Option<E>,
    state: PlaybackState,
}

impl<E: AudioEngine> Synchronizer<E> {
    /// Create a synchronizer with no audio and an empty transcript.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            engine: None,
            state: PlaybackState::default(),
        }
    }

    /// Create a synchronizer with a transcript and optional audio.
    pub fn with_parts(segments: Vec<Segment>, engine: Option<E>) -> Self {
        Self {
            segments,
            engine,
            state: PlaybackState::default(),
        }
    }

    /// Install an audio engine, replacing any previous one, and reset state.
    pub fn load_audio(&mut self, engine: E) {
        self.engine = Some(engine);
        self.state.reset();
        tracing::debug!("audio loaded, playback state reset");
    }

    /// Remove the audio engine and reset state. Returns the old engine.
    pub fn unload_audio(&mut self) -> Option<E> {
        self.state.reset();
        self.engine.take()
    }

    /// Replace the transcript wholesale and reset state.
    pub fn load_segments(&mut self, segments: Vec<Segment>) {
        tracing::debug!(count = segments.len(), "transcript loaded");
        self.segments = segments;
        self.state.reset();
    }

    /// Play segment `index` and stop at its end.
    ///
    /// Ignored when `index` is out of range or no audio is loaded. Returns
    /// whether the request was applied.
    pub fn select_segment(&mut self, index: usize) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        let Some(segment) = self.segments.get(index) else {
            return false;
        };

        self.state.active_index = Some(index);
        self.state.mode = SyncMode::Bounded { end: segment.end };
        engine.seek(segment.start);
        engine.play();

        tracing::debug!(
            index,
            start = segment.start,
            end = segment.end,
            "playing segment"
        );
        true
    }

    /// React to a play head position reported by the engine.
    ///
    /// In bounded mode, reaching the segment end pauses the engine and
    /// returns to free mode. In free mode, the segment containing
    /// `current_time` becomes active; between segments the active index is
    /// left alone.
    pub fn on_time_update(&mut self, current_time: f64) -> TimeUpdate {
        match self.state.mode {
            SyncMode::Bounded { end } => {
                if current_time >= end {
                    if let Some(engine) = self.engine.as_mut() {
                        engine.pause();
                    }
                    self.state.mode = SyncMode::Free;
                    tracing::debug!(current_time, end, "segment ended, pausing");
                    TimeUpdate::SegmentEnded
                } else {
                    TimeUpdate::Unchanged
                }
            }
            SyncMode::Free => match find_segment_at(&self.segments, current_time) {
                Some(index) if self.state.active_index != Some(index) => {
                    self.state.active_index = Some(index);
                    TimeUpdate::Followed(index)
                }
                _ => TimeUpdate::Unchanged,
            },
        }
    }

    /// Poll the engine once and feed its position to [`Self::on_time_update`].
    ///
    /// The host calls this at its time-update interval. Without audio there
    /// is no play head, so nothing happens.
    pub fn tick(&mut self) -> TimeUpdate {
        match self.engine.as_ref() {
            Some(engine) => {
                let now = engine.current_time();
                self.on_time_update(now)
            }
            None => TimeUpdate::Unchanged,
        }
    }

    /// Play the segment before the active one.
    pub fn prev(&mut self) -> bool {
        match self.state.active_index {
            Some(index) if index > 0 => self.select_segment(index - 1),
            _ => false,
        }
    }

    /// Play the segment after the active one (the first one if none is active).
    pub fn next(&mut self) -> bool {
        let target = self.state.active_index.map_or(0, |index| index + 1);
        if target >= self.segments.len() {
            return false;
        }
        self.select_segment(target)
    }

    /// Play the active segment again from its start.
    pub fn replay(&mut self) -> bool {
        match self.state.active_index {
            Some(index) => self.select_segment(index),
            None => false,
        }
    }

    /// Play or pause the engine without touching the mode.
    ///
    /// Pausing inside a bounded segment keeps the bound, so resuming still
    /// stops at the segment end.
    pub fn toggle_play(&mut self) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        if engine.is_playing() {
            engine.pause();
        } else {
            engine.play();
        }
        true
    }

    /// Scrub the play head by `delta` seconds (never before 0).
    ///
    /// The mode is left as is: scrubbing inside a bounded segment does not
    /// release the bound, and the active index only follows once playback is
    /// free again.
    pub fn seek_by(&mut self, delta: f64) -> bool {
        match self.engine.as_ref() {
            Some(engine) => {
                let target = engine.current_time() + delta;
                self.seek_to(target)
            }
            None => false,
        }
    }

    /// Scrub the play head to `time` seconds (never before 0).
    ///
    /// Same mode rules as [`Self::seek_by`].
    pub fn seek_to(&mut self, time: f64) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        engine.seek(time.max(0.0));
        true
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    pub fn active_segment(&self) -> Option<&Segment> {
        self.state
            .active_index
            .and_then(|index| self.segments.get(index))
    }

    pub fn mode(&self) -> SyncMode {
        self.state.mode
    }

    pub fn has_audio(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    /// Whether [`Self::prev`] would do anything.
    pub fn can_prev(&self) -> bool {
        self.has_audio() && matches!(self.state.active_index, Some(index) if index > 0)
    }

    /// Whether [`Self::next`] would do anything.
    pub fn can_next(&self) -> bool {
        let target = self.state.active_index.map_or(0, |index| index + 1);
        self.has_audio() && target < self.segments.len()
    }

    /// Whether [`Self::replay`] would do anything.
    pub fn can_replay(&self) -> bool {
        self.has_audio() && self.state.active_index.is_some()
    }
}

impl<E: AudioEngine> Default for Synchronizer<E> {
    fn default() -> Self {
        Self::new()
    }
}
