//! Subtitle offset module
//!
//! This module shifts the cue timings of a SubRip buffer:
//! - Locating `HH:MM:SS,mmm --> HH:MM:SS,mmm` ranges
//! - Parsing, shifting and formatting each timestamp
//! - Rebuilding the buffer with every other byte untouched

pub mod locator;
pub mod reassemble;
pub mod timestamp;

use std::borrow::Cow;

use crate::error::Result;
use crate::offset::Offset;

/// Apply `offset` to every cue timing in `input`.
///
/// A zero offset returns the input as is, without scanning it.
pub fn apply_offset<'a>(input: &'a [u8], offset: &Offset) -> Result<Cow<'a, [u8]>> {
    if offset.is_zero() {
        tracing::warn!("Offset is zero, file unmodified");
        return Ok(Cow::Borrowed(input));
    }

    let spans = locator::locate(input)?;
    tracing::debug!("Shifting {} cue(s) by {}", spans.len(), offset);

    let output = reassemble::reassemble(input, &spans, offset)?;
    Ok(Cow::Owned(output))
}
