//! Player state management
//!
//! Contains the synchronizer-owned `PlaybackState`, the view state owned by
//! the terminal player, and shared types used across player modules.

use ratatui::layout::Rect;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player normally
    Quit,
    /// Exit because the user pressed Ctrl+C
    Interrupt,
}

/// How playback relates to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SyncMode {
    /// Playback runs freely; the active segment follows the play head.
    #[default]
    Free,
    /// A single segment is playing and playback stops once `end` is reached.
    Bounded {
        /// End time of the segment being played
        end: f64,
    },
}

impl SyncMode {
    /// End time when bounded, `None` in free mode.
    pub fn segment_end(&self) -> Option<f64> {
        match self {
            SyncMode::Free => None,
            SyncMode::Bounded { end } => Some(*end),
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, SyncMode::Bounded { .. })
    }

    /// Short label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            SyncMode::Free => "follow",
            SyncMode::Bounded { .. } => "segment",
        }
    }
}

/// Playback state owned by the synchronizer.
///
/// Rebuilt from scratch whenever audio or subtitles are (re)loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    /// Index of the highlighted segment, if any
    pub active_index: Option<usize>,
    /// Free or bounded-segment playback
    pub mode: SyncMode,
}

impl PlaybackState {
    /// Back to the initial state: nothing active, free mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Terminal player view state.
///
/// Tracks what the user is looking at, which is independent of what is
/// playing: the cursor can sit on one line while another one is active.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Line under the cursor in the transcript list
    pub cursor: usize,
    /// First visible transcript line
    pub scroll_offset: usize,
    /// Whether the cursor jumps along with the active segment
    pub follow: bool,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// True when screen needs to be redrawn
    pub needs_render: bool,

    // === Hit areas from the last render (for mouse input) ===
    /// Inner area of the transcript list, one row per segment
    pub transcript_area: Rect,
    /// Bar portion of the progress line
    pub progress_area: Rect,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
            follow: true,
            show_help: false,
            needs_render: true,
            transcript_area: Rect::default(),
            progress_area: Rect::default(),
        }
    }

    /// Move the cursor by `delta` lines, clamped to `0..len`.
    ///
    /// Moving by hand stops the cursor from following playback.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let target = (self.cursor as isize + delta).clamp(0, len as isize - 1);
        self.cursor = target as usize;
        self.follow = false;
        self.needs_render = true;
    }

    /// Put the cursor on `index` (clamped) without touching `follow`.
    pub fn set_cursor(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = index.min(len - 1);
        self.needs_render = true;
    }

    /// Toggle follow mode; turning it on snaps the cursor to `active`.
    pub fn toggle_follow(&mut self, active: Option<usize>, len: usize) {
        self.follow = !self.follow;
        if self.follow {
            if let Some(index) = active {
                self.set_cursor(index, len);
            }
        }
        self.needs_render = true;
    }

    /// Snap the cursor to `active` when following playback.
    pub fn follow_active(&mut self, active: Option<usize>, len: usize) {
        if !self.follow {
            return;
        }
        if let Some(index) = active {
            if index != self.cursor {
                self.set_cursor(index, len);
            }
        }
    }

    /// Segment index under screen row `row`, if it hits the transcript.
    pub fn index_at_row(&self, row: u16, len: usize) -> Option<usize> {
        let area = self.transcript_area;
        if row < area.y || row >= area.y.saturating_add(area.height) {
            return None;
        }
        let index = self.scroll_offset + (row - area.y) as usize;
        (index < len).then_some(index)
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Adjust `scroll_offset` so `row` is visible in a list of `height` rows,
    /// keeping it roughly centered.
    pub fn scroll_to(&mut self, row: usize, height: usize, len: usize) {
        if height == 0 || len <= height {
            self.scroll_offset = 0;
            return;
        }
        let max_offset = len - height;
        if row < self.scroll_offset || row >= self.scroll_offset + height {
            self.scroll_offset = row.saturating_sub(height / 2).min(max_offset);
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
