//! SubRip timestamps (`HH:MM:SS,mmm`)

use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, ShiftError};
use crate::offset::Offset;

/// Width of a SubRip timestamp in bytes.
pub const TIMESTAMP_LEN: usize = 12;

/// A subtitle timestamp, held as a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveTime);

impl Timestamp {
    /// Create a timestamp from its fields, None if any is out of range.
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Option<Self> {
        if milli > 999 {
            return None;
        }
        NaiveTime::from_hms_milli_opt(hour, minute, second, milli).map(Timestamp)
    }

    /// Parse `HH:MM:SS,mmm`.
    ///
    /// The comma is the decimal separator. Every field must be zero padded
    /// and within clock range, anything else is an `InvalidTimestamp`.
    pub fn parse(text: &[u8]) -> Result<Self> {
        let invalid = || ShiftError::InvalidTimestamp(String::from_utf8_lossy(text).into_owned());

        if text.len() != TIMESTAMP_LEN
            || text[2] != b':'
            || text[5] != b':'
            || text[8] != b','
        {
            return Err(invalid());
        }

        let field = |range: std::ops::Range<usize>| -> Option<u32> {
            text[range].iter().try_fold(0u32, |acc, &b| {
                b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
            })
        };

        match (field(0..2), field(3..5), field(6..8), field(9..12)) {
            (Some(h), Some(m), Some(s), Some(ms)) => {
                Timestamp::from_hms_milli(h, m, s, ms).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }

    /// Shift by `offset`, wrapping around midnight in either direction.
    pub fn shift(self, offset: &Offset) -> Self {
        let (time, _days) = self.0.overflowing_add_signed(offset.delta());
        Timestamp(time)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Milliseconds, truncating any finer resolution left by the offset.
    pub fn millisecond(&self) -> u32 {
        (self.0.nanosecond() / 1_000_000) % 1000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

/// Parse a matched timestamp, shift it and format it back.
pub fn adjust(offset: &Offset, text: &[u8]) -> Result<String> {
    let adjusted = Timestamp::parse(text)?.shift(offset).to_string();
    debug_assert_eq!(adjusted.len(), TIMESTAMP_LEN);
    Ok(adjusted)
}
