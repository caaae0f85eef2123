//! Mouse input handling for the transcript player.
//!
//! Handles mouse events: click a transcript line to play it, click the
//! progress bar to scrub, wheel to move the cursor.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::keyboard::play_and_follow;
use crate::player::engine::AudioEngine;
use crate::player::playback::transcript_duration;
use crate::player::render::progress::time_at_column;
use crate::player::state::{InputResult, ViewState};
use crate::player::sync::Synchronizer;
use crate::tui::ui::contains;

/// Lines moved per wheel notch.
const WHEEL_STEP: isize = 3;

/// Handle a mouse event.
///
/// Hit testing uses the areas recorded in `view` by the last render.
pub fn handle_mouse_event<E: AudioEngine>(
    mouse: MouseEvent,
    sync: &mut Synchronizer<E>,
    view: &mut ViewState,
) -> InputResult {
    let len = sync.segments().len();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if view.show_help {
                view.show_help = false;
                view.needs_render = true;
            } else if contains(view.transcript_area, mouse.column, mouse.row) {
                if let Some(index) = view.index_at_row(mouse.row, len) {
                    view.set_cursor(index, len);
                    play_and_follow(view, sync, |sync| sync.select_segment(index));
                }
            } else if contains(view.progress_area, mouse.column, mouse.row) {
                let total = sync
                    .engine()
                    .and_then(|engine| engine.duration())
                    .unwrap_or_else(|| transcript_duration(sync.segments()));
                if let Some(time) = time_at_column(mouse.column, view.progress_area, total) {
                    sync.seek_to(time);
                    view.needs_render = true;
                }
            }
        }
        MouseEventKind::ScrollUp => view.move_cursor(-WHEEL_STEP, len),
        MouseEventKind::ScrollDown => view.move_cursor(WHEEL_STEP, len),
        _ => {}
    }

    InputResult::Continue
}
