//! CLI definitions for srtsync
//!
//! Lives in the library so xtask can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("SRTSYNC_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("SRTSYNC_BUILD_DATE"),
    ")"
);

/// Play an audio recording segment by segment alongside its SRT transcript
#[derive(Debug, Parser)]
#[command(name = "srtsync", version, long_version = LONG_VERSION, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug output (overridden by SRTSYNC_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the transcript player
    #[command(long_about = "Open the transcript player.\n\n\
        Select a line to play just that segment; playback stops at its end.\n\
        Without --audio the transcript is shown read-only.")]
    Play(PlayArgs),

    /// Parse a subtitle file and print its segments
    Parse {
        /// Subtitle file (.srt)
        subtitles: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Subtitle file (.srt)
    pub subtitles: PathBuf,

    /// Audio file to play along with the transcript
    #[arg(short, long)]
    pub audio: Option<PathBuf>,

    /// Milliseconds between time updates [default: from config]
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Playback speed multiplier [default: from config]
    #[arg(long)]
    pub speed: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

/// Output format for `srtsync parse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per segment: index, time range, text
    Text,
    /// JSON array of segments
    Json,
    /// Normalized SRT
    Srt,
}
