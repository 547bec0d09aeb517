use crate::error::Result;
use crate::offset::Offset;

use super::locator::MatchSpan;
use super::timestamp::adjust;

/// Rebuild `input` with each located timestamp shifted by `offset`.
///
/// Bytes outside the spans are copied verbatim. Timestamps are fixed
/// width, so the output is always as long as the input.
pub fn reassemble(input: &[u8], spans: &[MatchSpan], offset: &Offset) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(input.len());
    let mut last = 0;

    for span in spans {
        // Filler up to the start timestamp
        output.extend_from_slice(&input[last..span.start.start]);
        output.extend_from_slice(adjust(offset, &input[span.start.clone()])?.as_bytes());

        // Arrow between start and end
        output.extend_from_slice(&input[span.start.end..span.end.start]);
        output.extend_from_slice(adjust(offset, &input[span.end.clone()])?.as_bytes());

        last = span.end.end;
    }
    output.extend_from_slice(&input[last..]);

    debug_assert_eq!(output.len(), input.len());
    Ok(output)
}
