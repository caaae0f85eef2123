//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod parse;
pub mod play;
