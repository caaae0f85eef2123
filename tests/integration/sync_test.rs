//! Integration tests for the segment synchronizer driving an engine

use srtsync::player::{AudioEngine, SyncMode, Synchronizer, TimeUpdate};
use srtsync::subtitle::parse;

use crate::helpers::load_fixture;

/// Engine whose play head only moves when the test says so.
#[derive(Debug, Default)]
struct ManualEngine {
    time: f64,
    playing: bool,
    seeks: Vec<f64>,
    pauses: usize,
}

impl ManualEngine {
    /// Advance the play head as if `secs` of audio had played.
    fn advance(&mut self, secs: f64) {
        if self.playing {
            self.time += secs;
        }
    }
}

impl AudioEngine for ManualEngine {
    fn seek(&mut self, time: f64) {
        self.time = time;
        self.seeks.push(time);
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

fn synchronizer() -> Synchronizer<ManualEngine> {
    let segments = parse(&load_fixture("sample.srt"));
    Synchronizer::with_parts(segments, Some(ManualEngine::default()))
}

fn advance(sync: &mut Synchronizer<ManualEngine>, secs: f64) -> TimeUpdate {
    sync.engine_mut().unwrap().advance(secs);
    sync.tick()
}

#[test]
fn selected_segment_plays_to_its_end_and_stops() {
    let mut sync = synchronizer();

    assert!(sync.select_segment(1));
    assert_eq!(sync.engine().unwrap().seeks, [2.5]);
    assert_eq!(sync.mode(), SyncMode::Bounded { end: 5.0 });

    assert_eq!(advance(&mut sync, 1.0), TimeUpdate::Unchanged);
    assert_eq!(advance(&mut sync, 1.0), TimeUpdate::Unchanged);
    assert_eq!(advance(&mut sync, 0.5), TimeUpdate::SegmentEnded);

    let engine = sync.engine().unwrap();
    assert!(!engine.playing);
    assert_eq!(engine.pauses, 1);
    assert_eq!(sync.mode(), SyncMode::Free);
    assert_eq!(sync.active_index(), Some(1));

    // Paused: further ticks change nothing
    assert_eq!(advance(&mut sync, 1.0), TimeUpdate::Unchanged);
}

#[test]
fn resuming_after_segment_end_follows_freely() {
    let mut sync = synchronizer();
    sync.select_segment(0);
    assert_eq!(advance(&mut sync, 2.5), TimeUpdate::SegmentEnded);

    // Play head sits on the boundary, which belongs to segment 1
    sync.toggle_play();
    assert_eq!(advance(&mut sync, 0.0), TimeUpdate::Followed(1));

    // Gap between 5.0 and 6.0 keeps the last active segment
    assert_eq!(advance(&mut sync, 2.6), TimeUpdate::Unchanged);
    assert_eq!(sync.active_index(), Some(1));

    assert_eq!(advance(&mut sync, 1.0), TimeUpdate::Followed(2));
    assert_eq!(sync.engine().unwrap().pauses, 1);
}

#[test]
fn navigation_walks_the_transcript() {
    let mut sync = synchronizer();

    assert!(!sync.prev());
    assert!(!sync.replay());

    assert!(sync.next());
    assert_eq!(sync.active_index(), Some(0));
    assert!(sync.next());
    assert!(sync.next());
    assert_eq!(sync.active_index(), Some(2));
    assert!(!sync.next());

    assert!(sync.prev());
    assert_eq!(sync.active_index(), Some(1));
    assert!(sync.replay());

    let seeks = &sync.engine().unwrap().seeks;
    assert_eq!(seeks, &[0.0, 2.5, 6.0, 2.5, 2.5]);
}

#[test]
fn transcript_without_audio_ignores_navigation() {
    let segments = parse(&load_fixture("sample.srt"));
    let mut sync: Synchronizer<ManualEngine> = Synchronizer::with_parts(segments, None);

    assert!(!sync.select_segment(0));
    assert!(!sync.next());
    assert!(!sync.toggle_play());
    assert_eq!(sync.tick(), TimeUpdate::Unchanged);
    assert_eq!(sync.active_index(), None);
    assert!(!sync.can_next());
}

#[test]
fn loading_new_subtitles_resets_playback() {
    let mut sync = synchronizer();
    sync.select_segment(2);

    sync.load_segments(parse("1\n00:00:00,000 --> 00:00:01,000\nonly\n"));
    assert_eq!(sync.active_index(), None);
    assert_eq!(sync.mode(), SyncMode::Free);
    assert_eq!(sync.segments().len(), 1);
}

#[test]
fn swapping_audio_resets_playback() {
    let mut sync = synchronizer();
    sync.select_segment(1);

    sync.load_audio(ManualEngine::default());
    assert_eq!(sync.active_index(), None);
    assert_eq!(sync.mode(), SyncMode::Free);
    assert!(sync.engine().unwrap().seeks.is_empty());

    let old = sync.unload_audio();
    assert!(old.is_some());
    assert!(!sync.has_audio());
}

#[test]
fn scrubbing_inside_a_segment_keeps_the_bound() {
    let mut sync = synchronizer();
    sync.select_segment(0);

    assert!(sync.seek_by(10.0));
    assert_eq!(sync.mode(), SyncMode::Bounded { end: 2.5 });
    assert_eq!(sync.tick(), TimeUpdate::SegmentEnded);

    assert!(sync.seek_by(-100.0));
    assert_eq!(sync.engine().unwrap().time, 0.0);
}
