//! Keyboard input handling for the transcript player.
//!
//! Handles all keyboard shortcuts including segment navigation, free
//! playback controls, cursor movement and mode toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::engine::AudioEngine;
use crate::player::state::{InputResult, ViewState};
use crate::player::sync::Synchronizer;

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    sync: &mut Synchronizer<E>,
    view: &mut ViewState,
    seek_step: f64,
) -> InputResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Interrupt;
    }

    // If help is showing, any key closes it
    if view.show_help {
        view.show_help = false;
        view.needs_render = true;
        return InputResult::Continue;
    }

    let len = sync.segments().len();
    let page = (view.transcript_area.height as isize).max(1);

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,

        // === Help ===
        KeyCode::Char('?') => view.toggle_help(),

        // === Segment navigation ===
        KeyCode::Enter => {
            let cursor = view.cursor;
            play_and_follow(view, sync, |sync| sync.select_segment(cursor));
        }
        KeyCode::Char('n') => play_and_follow(view, sync, |sync| sync.next()),
        KeyCode::Char('p') => play_and_follow(view, sync, |sync| sync.prev()),
        KeyCode::Char('r') => play_and_follow(view, sync, |sync| sync.replay()),

        // === Free playback ===
        KeyCode::Char(' ') => {
            sync.toggle_play();
            view.needs_render = true;
        }
        KeyCode::Left | KeyCode::Char(',') => {
            sync.seek_by(-seek_step);
            view.needs_render = true;
        }
        KeyCode::Right | KeyCode::Char('.') => {
            sync.seek_by(seek_step);
            view.needs_render = true;
        }

        // === Cursor ===
        KeyCode::Up | KeyCode::Char('k') => view.move_cursor(-1, len),
        KeyCode::Down | KeyCode::Char('j') => view.move_cursor(1, len),
        KeyCode::PageUp => view.move_cursor(-page, len),
        KeyCode::PageDown => view.move_cursor(page, len),
        KeyCode::Home | KeyCode::Char('g') => view.move_cursor(-(len as isize), len),
        KeyCode::End | KeyCode::Char('G') => view.move_cursor(len as isize, len),
        KeyCode::Char('f') => view.toggle_follow(sync.active_index(), len),

        _ => {}
    }

    InputResult::Continue
}

/// Run a segment command; on success the cursor follows the new segment.
pub(crate) fn play_and_follow<E, F>(view: &mut ViewState, sync: &mut Synchronizer<E>, action: F)
where
    E: AudioEngine,
    F: FnOnce(&mut Synchronizer<E>) -> bool,
{
    if action(sync) {
        view.follow = true;
        view.follow_active(sync.active_index(), sync.segments().len());
        view.needs_render = true;
    }
}
