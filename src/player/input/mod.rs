//! Input handling for the transcript player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::{Event, KeyEventKind};

use crate::player::engine::AudioEngine;
use crate::player::state::{InputResult, ViewState};
use crate::player::sync::Synchronizer;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `sync` - Segment synchronizer driving the audio engine
/// * `view` - Mutable reference to view state
/// * `seek_step` - Seconds moved by the seek keys
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<E: AudioEngine>(
    event: Event,
    sync: &mut Synchronizer<E>,
    view: &mut ViewState,
    seek_step: f64,
) -> InputResult {
    match event {
        // Windows reports releases too; only react to presses
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key_event(key, sync, view, seek_step)
        }
        Event::Mouse(mouse) => handle_mouse_event(mouse, sync, view),
        Event::Resize(_, _) => {
            view.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
