use std::path::PathBuf;

use thiserror::Error;

/// Main error type for srt-offset
#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Please provide subtitle filename")]
    MissingInput,

    #[error("Invalid offset {input:?}: {reason}")]
    InvalidOffset { input: String, reason: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read subtitle file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Found no subtitle timestamps, unable to adjust offset")]
    NoTimestamps,

    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}

impl ShiftError {
    /// Process exit code reported for this error.
    ///
    /// Usage, configuration and I/O problems share code 1, a file without
    /// any timestamp ranges is 2, and a matched range that does not parse
    /// as a clock time is 3.
    pub fn exit_code(&self) -> u8 {
        match self {
            ShiftError::MissingInput
            | ShiftError::InvalidOffset { .. }
            | ShiftError::Config(_)
            | ShiftError::Read { .. }
            | ShiftError::Io(_) => 1,
            ShiftError::NoTimestamps => 2,
            ShiftError::InvalidTimestamp(_) => 3,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShiftError>;
