//! Terminal transcript player.
//!
//! Owns the event loop: polls input with the time-update interval as the
//! timeout, feeds the engine position to the synchronizer on every tick, and
//! redraws when something changed.

use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::engine::{AudioEngine, ClockEngine};
use super::input::handle_event;
use super::playback::transcript_duration;
use super::render::{draw, SessionInfo};
use super::state::{InputResult, ViewState};
use super::sync::{Synchronizer, TimeUpdate};
use crate::subtitle;
use crate::theme::Theme;

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// User quit normally
    Finished,
    /// User pressed Ctrl+C
    Interrupted,
}

/// Everything needed to start a session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Subtitle file to load
    pub subtitles: PathBuf,
    /// Audio file; `None` opens the transcript without playback
    pub audio: Option<PathBuf>,
    /// Time between time-update notifications
    pub interval: Duration,
    /// Seconds moved by the seek keys
    pub seek_step: f64,
    /// Clock speed multiplier
    pub speed: f64,
    /// Show end times in the transcript
    pub show_end_times: bool,
    /// Colors
    pub theme: Theme,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load the files and build a synchronizer for them.
///
/// Fails when the subtitle file cannot be read as text or the audio file
/// does not exist. An empty transcript is not an error.
pub fn prepare_session(options: &PlayOptions) -> Result<(Synchronizer<ClockEngine>, SessionInfo)> {
    let segments = subtitle::load_file(&options.subtitles).with_context(|| {
        format!(
            "Failed to load subtitle file {}",
            options.subtitles.display()
        )
    })?;

    let engine = match &options.audio {
        Some(path) => {
            if !path.is_file() {
                bail!("Audio file not found: {}", path.display());
            }
            let engine = ClockEngine::new()
                .with_duration(transcript_duration(&segments))
                .with_speed(options.speed);
            Some(engine)
        }
        None => None,
    };

    tracing::info!(
        subtitles = %options.subtitles.display(),
        audio = ?options.audio,
        segments = segments.len(),
        "starting session"
    );

    let info = SessionInfo {
        audio_name: options.audio.as_deref().map(file_name),
        subtitle_name: file_name(&options.subtitles),
        show_end_times: options.show_end_times,
    };

    Ok((Synchronizer::with_parts(segments, engine), info))
}

/// Open the transcript player and run it until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_session(options: &PlayOptions) -> Result<PlaybackResult> {
    let (mut sync, info) = prepare_session(options)?;

    let guard = TerminalGuard::enter()?;
    let mut terminal = open_terminal()?;
    let result = run_loop(&mut terminal, &mut sync, &info, options);
    drop(terminal);
    drop(guard);

    let result = result?;
    tracing::info!(?result, "session ended");
    Ok(result)
}

/// Raw mode held for the player. Dropping it restores the terminal, also
/// when setup fails halfway or the loop panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(%err, "failed to disable raw mode");
        }
        if let Err(err) = leave_screen(&mut io::stdout()) {
            tracing::warn!(%err, "failed to leave alternate screen");
        }
    }
}

/// Undo [`open_terminal`]. Harmless when the screen was never entered.
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

#[cfg(not(tarpaulin_include))]
fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

#[cfg(not(tarpaulin_include))]
fn run_loop<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    sync: &mut Synchronizer<E>,
    info: &SessionInfo,
    options: &PlayOptions,
) -> Result<PlaybackResult> {
    let mut view = ViewState::new();
    let mut last_tick = Instant::now();

    loop {
        if view.needs_render {
            terminal.draw(|frame| draw(frame, sync, &mut view, info, &options.theme))?;
            view.needs_render = false;
        }

        let timeout = options.interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match handle_event(event::read()?, sync, &mut view, options.seek_step) {
                InputResult::Continue => {}
                InputResult::Quit => return Ok(PlaybackResult::Finished),
                InputResult::Interrupt => return Ok(PlaybackResult::Interrupted),
            }
        }

        if last_tick.elapsed() >= options.interval {
            last_tick = Instant::now();
            if on_tick(sync, &mut view) {
                view.needs_render = true;
            }
        }
    }
}

/// One time-update notification. Returns whether the screen is stale.
fn on_tick<E: AudioEngine>(sync: &mut Synchronizer<E>, view: &mut ViewState) -> bool {
    let update = sync.tick();
    match update {
        TimeUpdate::Followed(index) => {
            tracing::debug!(index, "following play head");
            view.follow_active(Some(index), sync.segments().len());
        }
        TimeUpdate::SegmentEnded => {
            tracing::debug!(active = ?sync.active_index(), "segment finished");
        }
        TimeUpdate::Unchanged => {}
    }

    // The progress bar moves while playing
    let playing = sync.engine().is_some_and(|engine| engine.is_playing());
    update != TimeUpdate::Unchanged || playing
}
