//! Audio engine boundary.
//!
//! The synchronizer never decodes audio itself. It drives whatever sits
//! behind [`AudioEngine`]: a real decoder, a remote player, or a test double.

use std::time::Instant;

/// Transport controls the synchronizer needs from an audio backend.
///
/// Commands are fire-and-forget; the engine reports progress through
/// [`AudioEngine::current_time`], which the host polls at its time-update
/// interval.
pub trait AudioEngine {
    /// Move the play head to `time` seconds.
    fn seek(&mut self, time: f64);

    /// Start or resume playback from the current position.
    fn play(&mut self);

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Current play head position in seconds.
    fn current_time(&self) -> f64;

    /// Whether the engine is currently playing.
    fn is_playing(&self) -> bool;

    /// Total length of the media, if known.
    fn duration(&self) -> Option<f64> {
        None
    }
}

/// Wall-clock transport.
///
/// Advances a play head in real time while "playing" without producing any
/// sound. Useful for following a transcript against audio played elsewhere,
/// and as the default engine of the terminal player.
#[derive(Debug, Clone)]
pub struct ClockEngine {
    /// Position when playback last (re)started or was paused
    offset: f64,
    /// Wall clock anchor while playing
    started: Option<Instant>,
    /// Playback speed multiplier
    speed: f64,
    /// Optional end of media; the play head stops here
    duration: Option<f64>,
}

impl ClockEngine {
    /// Create a paused engine at position 0.
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            started: None,
            speed: 1.0,
            duration: None,
        }
    }

    /// Set a media length; the play head never advances past it.
    pub fn with_duration(mut self, duration: f64) -> Self {
        if duration.is_finite() && duration >= 0.0 {
            self.duration = Some(duration);
        }
        self
    }

    /// Set the playback speed (clamped to 0.1x..=16x).
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change speed without jumping the play head.
    pub fn set_speed(&mut self, speed: f64) {
        let speed = if speed.is_finite() { speed } else { 1.0 };
        if self.started.is_some() {
            self.offset = self.current_time();
            self.started = Some(Instant::now());
        }
        self.speed = speed.clamp(0.1, 16.0);
    }

    fn clamp(&self, time: f64) -> f64 {
        let time = time.max(0.0);
        match self.duration {
            Some(duration) => time.min(duration),
            None => time,
        }
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine for ClockEngine {
    fn seek(&mut self, time: f64) {
        if !time.is_finite() {
            tracing::warn!(time, "ignoring seek to non-finite time");
            return;
        }
        self.offset = self.clamp(time);
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }

    fn play(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if self.started.is_some() {
            self.offset = self.current_time();
            self.started = None;
        }
    }

    fn current_time(&self) -> f64 {
        let elapsed = self
            .started
            .map(|start| start.elapsed().as_secs_f64() * self.speed)
            .unwrap_or(0.0);
        self.clamp(self.offset + elapsed)
    }

    fn is_playing(&self) -> bool {
        self.started.is_some()
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn new_engine_is_paused_at_zero() {
        let engine = ClockEngine::new();
        assert!(!engine.is_playing());
        assert_eq!(engine.current_time(), 0.0);
        assert_eq!(engine.duration(), None);
    }

    #[test]
    fn seek_moves_play_head_while_paused() {
        let mut engine = ClockEngine::new();
        engine.seek(12.5);
        assert_eq!(engine.current_time(), 12.5);
        assert!(!engine.is_playing());
    }

    #[test]
    fn seek_clamps_at_zero_and_duration() {
        let mut engine = ClockEngine::new().with_duration(10.0);
        engine.seek(-3.0);
        assert_eq!(engine.current_time(), 0.0);
        engine.seek(25.0);
        assert_eq!(engine.current_time(), 10.0);
    }

    #[test]
    fn seek_ignores_non_finite_time() {
        let mut engine = ClockEngine::new();
        engine.seek(4.0);
        engine.seek(f64::NAN);
        assert_eq!(engine.current_time(), 4.0);
    }

    #[test]
    fn playing_advances_time() {
        let mut engine = ClockEngine::new().with_speed(16.0);
        engine.play();
        thread::sleep(Duration::from_millis(20));
        assert!(engine.is_playing());
        assert!(engine.current_time() > 0.0);
    }

    #[test]
    fn pause_freezes_time() {
        let mut engine = ClockEngine::new();
        engine.seek(3.0);
        engine.play();
        thread::sleep(Duration::from_millis(5));
        engine.pause();
        let frozen = engine.current_time();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(engine.current_time(), frozen);
        assert!(frozen >= 3.0);
    }

    #[test]
    fn play_head_stops_at_duration() {
        let mut engine = ClockEngine::new().with_duration(1.0);
        engine.seek(0.999);
        engine.play();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(engine.current_time(), 1.0);
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(ClockEngine::new().with_speed(100.0).speed(), 16.0);
        assert_eq!(ClockEngine::new().with_speed(0.0).speed(), 0.1);
        assert_eq!(ClockEngine::new().with_speed(f64::NAN).speed(), 1.0);
    }
}
