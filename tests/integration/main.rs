//! Integration tests for srtsync

mod helpers;

mod cli_test;
mod parse_test;
mod player_test;
mod sync_test;
