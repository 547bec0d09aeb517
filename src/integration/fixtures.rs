//! Test fixtures for integration tests
//!
//! Subtitle files written to temporary paths.

use std::io::Write;

use tempfile::NamedTempFile;

/// A short SubRip file with a BOM, CRLF line endings and a cue near midnight
pub const CRLF_WITH_BOM: &[u8] = b"\xef\xbb\xbf1\r\n\
00:00:01,000 --> 00:00:02,000\r\n\
First line\r\n\
\r\n\
2\r\n\
00:00:03,250 --> 00:00:05,000\r\n\
Second line\r\n\
spans two rows\r\n\
\r\n\
3\r\n\
23:59:59,900 --> 23:59:59,999\r\n\
Late\r\n";

/// Same as [`CRLF_WITH_BOM`] shifted by +1.5s
pub const CRLF_WITH_BOM_PLUS_1500MS: &[u8] = b"\xef\xbb\xbf1\r\n\
00:00:02,500 --> 00:00:03,500\r\n\
First line\r\n\
\r\n\
2\r\n\
00:00:04,750 --> 00:00:06,500\r\n\
Second line\r\n\
spans two rows\r\n\
\r\n\
3\r\n\
00:00:01,400 --> 00:00:01,499\r\n\
Late\r\n";

/// Text without any cue timing
pub const NO_TIMESTAMPS: &[u8] = b"1\nJust text\n\n2\n0:00:01,000 --> 0:00:02,000\nAlmost\n";

/// A cue whose end time matches the digit pattern but is not a clock time
pub const OUT_OF_RANGE: &[u8] = b"1\n00:00:01,000 --> 00:00:02,000\nok\n\n2\n00:00:03,000 --> 00:75:00,000\nbad\n";

/// Write `content` to a fresh temporary file
pub fn subtitle_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
