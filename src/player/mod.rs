//! Transcript player module
//!
//! Plays an audio recording segment by segment alongside its transcript.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `engine`: the `AudioEngine` transport boundary and the wall-clock `ClockEngine`
//! - `sync`: `Synchronizer`, which maps play head time to the active segment
//!   and stops playback at the end of a selected segment
//! - `state`: PlaybackState, SyncMode, ViewState and InputResult
//! - `input/`: Keyboard and mouse input handling
//! - `playback/`: Segment lookup by time
//! - `render/`: UI rendering (status card, transcript list, progress bar, help)
//! - `native`: the terminal event loop
//!
//! # Usage
//!
//! ```no_run
//! use srtsync::player::{play_session, PlayOptions, PlaybackResult};
//! use srtsync::theme::Theme;
//! use std::time::Duration;
//!
//! let options = PlayOptions {
//!     subtitles: "talk.srt".into(),
//!     audio: Some("talk.mp3".into()),
//!     interval: Duration::from_millis(100),
//!     seek_step: 5.0,
//!     speed: 1.0,
//!     show_end_times: false,
//!     theme: Theme::default(),
//! };
//! match play_session(&options).unwrap() {
//!     PlaybackResult::Finished => println!("Done"),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub mod engine;
pub(crate) mod input;
mod native;
pub mod playback;
pub mod render;
pub mod state;
pub mod sync;

pub use engine::{AudioEngine, ClockEngine};
pub use native::{play_session, prepare_session, PlayOptions, PlaybackResult};
pub use playback::{find_segment_at, transcript_duration};
pub use state::{InputResult, PlaybackState, SyncMode, ViewState};
pub use sync::{Synchronizer, TimeUpdate};
