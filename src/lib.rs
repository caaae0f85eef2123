//! srtsync - play an audio recording segment by segment alongside its SRT transcript
//!
//! - `subtitle`: SRT parsing, timestamp formatting and writing
//! - `player`: segment synchronizer, audio engine boundary and the terminal player
//! - `config`: user settings in `config.toml`
//! - `cli`: command line definitions

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod subtitle;
pub mod theme;
pub mod tui;

pub use config::Config;
pub use subtitle::{load_file, parse, Segment};
