//! Integration tests for the srtsync command line

use std::process::Command;

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixtures_dir;

/// Helper to run srtsync with an isolated home and capture output
fn run_srtsync(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_srtsync"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("SRTSYNC_LOG")
        .output()
        .expect("Failed to execute srtsync");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_srtsync(&home, &["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["play", "parse", "config", "completions"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn play_help_shows_audio_option() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_srtsync(&home, &["play", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("<SUBTITLES>"));
    assert!(stdout.contains("--audio"));
    assert!(stdout.contains("--interval-ms"));
}

#[test]
fn version_flag_prints_version() {
    AssertCommand::cargo_bin("srtsync")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("srtsync "));
}

// ============================================================================
// Parse Command Tests
// ============================================================================

#[test]
fn parse_text_lists_segments() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_srtsync(&home, &["parse", &fixture("sample.srt")]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    insta::assert_snapshot!(lines[1].trim(), @"2  00:00:02,500 --> 00:00:05,000  Today we talk about / subtitles.");
    insta::assert_snapshot!(lines[3], @"3 segments");
}

#[test]
fn parse_json_emits_segment_array() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) =
        run_srtsync(&home, &["parse", &fixture("messy.srt"), "--format", "json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let segments = value.as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1]["id"], 1);
    assert_eq!(segments[1]["start"], 5.0);
    assert_eq!(segments[1]["text"], "Padded text");
}

#[test]
fn parse_srt_output_is_clean() {
    AssertCommand::cargo_bin("srtsync")
        .unwrap()
        .args(["parse", &fixture("messy.srt"), "-f", "srt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1\n00:00:01,000 --> 00:00:02,000\nFirst\n\n2\n00:00:05,000 --> 00:00:06,000\nPadded text\n",
        ))
        .stdout(predicate::str::contains("\r").not());
}

#[test]
fn parse_missing_file_exits_1() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_srtsync(&home, &["parse", "/nonexistent/talk.srt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("Failed to load subtitle file"));
}

#[test]
fn parse_unknown_format_is_usage_error() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_srtsync(&home, &["parse", &fixture("sample.srt"), "--format", "vtt"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid value"));
}

// ============================================================================
// Play Command Tests (error paths only; the player needs a terminal)
// ============================================================================

#[test]
fn play_without_arguments_shows_error() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_srtsync(&home, &["play"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<SUBTITLES>"));
}

#[test]
fn play_with_missing_audio_fails_before_opening_player() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_srtsync(
        &home,
        &["play", &fixture("sample.srt"), "--audio", "/nonexistent/show.mp3"],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Audio file not found"));
}

#[test]
fn play_with_missing_subtitles_fails() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_srtsync(&home, &["play", "/nonexistent/talk.srt"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to load subtitle file"));
}

#[test]
#[cfg(target_os = "linux")]
fn play_runs_without_a_writable_log_dir() {
    let home = TempDir::new().unwrap();
    let blocker = home.path().join("data");
    std::fs::write(&blocker, "not a directory").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_srtsync"))
        .args(["play", "/nonexistent/talk.srt"])
        .env("NO_COLOR", "1")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_DATA_HOME", &blocker)
        .env_remove("SRTSYNC_LOG")
        .output()
        .expect("Failed to execute srtsync");
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Gets past logging setup to the subtitle load
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("continuing without a log file"));
    assert!(stderr.contains("Failed to load subtitle file"));
}

// ============================================================================
// Config and Completions Tests
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_srtsync(&home, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[player]"));
    assert!(stdout.contains("time_update_interval_ms = 100"));
    assert!(stdout.contains("[ui]"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();

    let (stdout, _stderr, exit_code) = run_srtsync(&home, &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Wrote"));

    let (_stdout, stderr, exit_code) = run_srtsync(&home, &["config", "init"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = run_srtsync(&home, &["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn config_path_points_into_srtsync_dir() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_srtsync(&home, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.trim_end().ends_with("config.toml"));
    assert!(stdout.contains("srtsync"));
}

#[test]
fn completions_generate_bash_script() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_srtsync(&home, &["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("srtsync"));
    assert!(stdout.contains("complete"));
}
