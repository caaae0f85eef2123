//! Integration tests for SRT parsing and loading

use std::fs;

use srtsync::subtitle::{format_time, load_file, parse, write_srt, LoadError, Segment};
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, load_fixture, temp_fixture};

#[test]
fn sample_fixture_parses_all_segments() {
    let segments = parse(&load_fixture("sample.srt"));

    assert_eq!(segments.len(), 3);
    assert_eq!(
        segments[1],
        Segment {
            id: 1,
            start: 2.5,
            end: 5.0,
            text: "Today we talk about\nsubtitles.".to_string(),
        }
    );
    assert_eq!(segments[2].start, 6.0);
    assert_eq!(segments[2].end, 9.75);
}

#[test]
fn messy_fixture_keeps_valid_blocks_only() {
    let segments = load_file(fixtures_dir().join("messy.srt")).unwrap();

    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["First", "Padded text", "No index line"]);

    // Dropped blocks don't use up ids
    let ids: Vec<usize> = segments.iter().map(|s| s.id).collect();
    assert_eq!(ids, [0, 1, 2]);

    let starts: Vec<f64> = segments.iter().map(|s| s.start).collect();
    assert_eq!(starts, [1.0, 5.0, 7.0]);
}

#[test]
fn written_srt_parses_back_to_same_segments() {
    let segments = parse(&load_fixture("sample.srt"));
    assert_eq!(parse(&write_srt(&segments)), segments);
}

#[test]
fn normalizing_messy_input_renumbers_blocks() {
    let (_dir, path) = temp_fixture("messy.srt");
    let srt = write_srt(&load_file(&path).unwrap());

    assert!(srt.starts_with("1\n00:00:01,000 --> 00:00:02,000\nFirst\n\n"));
    assert!(srt.contains("\n3\n00:00:07,000 --> 00:00:08,000\nNo index line\n"));
    assert!(!srt.contains('\r'));
}

#[test]
fn load_file_strips_byte_order_mark() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bom.srt");
    fs::write(&path, "\u{feff}00:00:01,000 --> 00:00:02,000\nhi\n").unwrap();

    let segments = load_file(&path).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, 1.0);
}

#[test]
fn load_file_rejects_binary_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audio.srt");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotText { .. }));
    assert!(err.to_string().contains("not a text file"));
}

#[test]
fn load_file_reports_missing_file() {
    let err = load_file("/nonexistent/path/talk.srt").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/path/talk.srt"));
}

#[test]
fn empty_file_loads_no_segments() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.srt");
    fs::write(&path, "").unwrap();

    assert!(load_file(&path).unwrap().is_empty());
}

#[test]
fn display_times_for_fixture() {
    let segments = parse(&load_fixture("sample.srt"));
    let times: Vec<String> = segments.iter().map(|s| format_time(s.start)).collect();
    assert_eq!(times, ["00:00", "00:02", "00:06"]);
}
