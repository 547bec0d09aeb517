//! End-to-end integration tests

use std::path::PathBuf;

use crate::error::ShiftError;
use crate::integration::fixtures::{self, subtitle_file};
use crate::offset::Offset;
use crate::runner::{run, Options};

fn shift(content: &[u8], offset: &str) -> (Result<(), ShiftError>, Vec<u8>) {
    let file = subtitle_file(content);
    let options = Options {
        input: Some(file.path().to_path_buf()),
        offset: offset.parse().unwrap(),
    };
    let mut out = Vec::new();
    let result = run(&options, &mut out);
    (result, out)
}

#[test]
fn test_shift_forward() {
    let (result, out) = shift(fixtures::CRLF_WITH_BOM, "1.5s");
    result.unwrap();
    assert_eq!(out, fixtures::CRLF_WITH_BOM_PLUS_1500MS);
}

#[test]
fn test_shift_backward_restores() {
    let (result, out) = shift(fixtures::CRLF_WITH_BOM_PLUS_1500MS, "-1500ms");
    result.unwrap();
    assert_eq!(out, fixtures::CRLF_WITH_BOM);
}

#[test]
fn test_output_length_matches_input() {
    let (result, out) = shift(fixtures::CRLF_WITH_BOM, "-1h2m3.456s");
    result.unwrap();
    assert_eq!(out.len(), fixtures::CRLF_WITH_BOM.len());
}

/// The tool prints the buffer it rebuilt, never the bytes it read.
#[test]
fn output_is_the_adjusted_buffer() {
    let (result, out) = shift(fixtures::CRLF_WITH_BOM, "1.5s");
    result.unwrap();
    assert_ne!(out, fixtures::CRLF_WITH_BOM);
    assert!(out
        .windows(29)
        .any(|w| w == b"00:00:02,500 --> 00:00:03,500"));
}

#[test]
fn test_zero_offset_passthrough() {
    let (result, out) = shift(fixtures::CRLF_WITH_BOM, "0");
    result.unwrap();
    assert_eq!(out, fixtures::CRLF_WITH_BOM);
}

#[test]
fn test_zero_offset_without_timestamps_succeeds() {
    let (result, out) = shift(fixtures::NO_TIMESTAMPS, "0s");
    result.unwrap();
    assert_eq!(out, fixtures::NO_TIMESTAMPS);
}

#[test]
fn test_no_timestamps() {
    let (result, out) = shift(fixtures::NO_TIMESTAMPS, "1s");
    let err = result.unwrap_err();
    assert!(matches!(err, ShiftError::NoTimestamps));
    assert_eq!(err.exit_code(), 2);
    assert!(out.is_empty());
}

#[test]
fn test_out_of_range_timestamp() {
    let (result, out) = shift(fixtures::OUT_OF_RANGE, "1s");
    let err = result.unwrap_err();
    assert!(matches!(err, ShiftError::InvalidTimestamp(ref t) if t == "00:75:00,000"));
    assert_eq!(err.exit_code(), 3);
    assert!(out.is_empty());
}

#[test]
fn test_missing_input() {
    let options = Options {
        input: None,
        offset: Offset::from_millis(100),
    };
    let mut out = Vec::new();
    let err = run(&options, &mut out).unwrap_err();
    assert!(matches!(err, ShiftError::MissingInput));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        input: Some(dir.path().join("missing.srt")),
        offset: Offset::from_millis(100),
    };
    let mut out = Vec::new();
    let err = run(&options, &mut out).unwrap_err();
    let expected: PathBuf = dir.path().join("missing.srt");
    assert!(matches!(err, ShiftError::Read { ref path, .. } if *path == expected));
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
}
