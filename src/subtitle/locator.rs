//! Locates `HH:MM:SS,mmm --> HH:MM:SS,mmm` ranges in a raw buffer

use std::ops::Range;

use crate::error::{Result, ShiftError};

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::bytes::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::bytes::Regex::new($re).unwrap())
    }};
}

/// Byte ranges of the two timestamps of one cue timing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: Range<usize>,
    pub end: Range<usize>,
}

/// Find every timestamp range in `input`, in document order.
///
/// Matching is ASCII only and does not overlap. The arrow takes exactly one
/// tab, newline, form feed, carriage return or space on each side; vertical
/// tab is not accepted. A buffer without a single range is `NoTimestamps`.
pub fn locate(input: &[u8]) -> Result<Vec<MatchSpan>> {
    let re = regex!(r"(?-u)(\d{2}:\d{2}:\d{2},\d{3})[\t\n\f\r ]-->[\t\n\f\r ](\d{2}:\d{2}:\d{2},\d{3})");

    let spans: Vec<MatchSpan> = re
        .captures_iter(input)
        .filter_map(|caps| {
            Some(MatchSpan {
                start: caps.get(1)?.range(),
                end: caps.get(2)?.range(),
            })
        })
        .collect();

    if spans.is_empty() {
        return Err(ShiftError::NoTimestamps);
    }
    Ok(spans)
}
