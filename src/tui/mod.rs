//! TUI (Text User Interface) helpers for srtsync
//!
//! Shared ratatui building blocks: layout helpers and the footer bar.
//! The transcript player itself lives in `player`.

pub mod footer;
pub mod ui;

pub use footer::render_footer;
pub use ui::centered_rect;
