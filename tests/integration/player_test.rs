//! Integration tests for the terminal player, rendered off-screen

use std::fs;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use srtsync::player::render::{draw, SessionInfo};
use srtsync::player::{prepare_session, AudioEngine, ClockEngine, PlayOptions, Synchronizer, ViewState};
use srtsync::theme::Theme;

use crate::helpers::temp_fixture;

fn options(subtitles: std::path::PathBuf, audio: Option<std::path::PathBuf>) -> PlayOptions {
    PlayOptions {
        subtitles,
        audio,
        interval: Duration::from_millis(100),
        seek_step: 5.0,
        speed: 1.0,
        show_end_times: false,
        theme: Theme::default(),
    }
}

fn screen(sync: &Synchronizer<ClockEngine>, info: &SessionInfo, view: &mut ViewState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    terminal
        .draw(|frame| draw(frame, sync, view, info, &Theme::default()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn transcript_only_session_lists_lines() {
    let (_dir, path) = temp_fixture("sample.srt");
    let (sync, info) = prepare_session(&options(path, None)).unwrap();
    let mut view = ViewState::new();

    let text = screen(&sync, &info, &mut view);
    assert!(text.contains("Welcome to the show."));
    assert!(text.contains("Today we talk about / subtitles."));
    assert!(text.contains("3 lines"));
    assert!(text.contains("Please load audio first"));
    assert!(text.contains("♪ no audio"));
}

#[test]
fn selecting_a_line_updates_card_and_mode() {
    let (dir, path) = temp_fixture("sample.srt");
    let audio = dir.path().join("show.mp3");
    fs::write(&audio, b"ID3").unwrap();

    let (mut sync, info) = prepare_session(&options(path, Some(audio))).unwrap();
    assert_eq!(sync.engine().unwrap().duration(), Some(9.75));

    sync.select_segment(2);
    let mut view = ViewState::new();
    let text = screen(&sync, &info, &mut view);

    assert!(text.contains("#3"));
    assert!(text.contains("segment · stops at 00:09"));
    assert!(text.contains("♪ show.mp3"));
    assert!(!text.contains("Please load audio first"));

    // Render recorded where the transcript rows are, for mouse hit testing
    assert!(view.transcript_area.height > 0);
    assert!(view.progress_area.width > 0);
}

#[test]
fn messy_file_session_loads_valid_blocks() {
    let (_dir, path) = temp_fixture("messy.srt");
    let (sync, _) = prepare_session(&options(path, None)).unwrap();
    assert_eq!(sync.segments().len(), 3);
}
