//! Single entry point: read a subtitle file, shift it, write the result

use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, ShiftError};
use crate::offset::Offset;
use crate::subtitle;

/// Everything one invocation needs
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Subtitle file to read
    pub input: Option<PathBuf>,
    /// Shift applied to every timestamp
    pub offset: Offset,
}

/// Read `options.input`, shift it by `options.offset` and write it to `out`.
///
/// Nothing is written unless the whole file was adjusted successfully.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<()> {
    let path = options.input.as_deref().ok_or(ShiftError::MissingInput)?;

    let content = std::fs::read(path).map_err(|source| ShiftError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    let output = subtitle::apply_offset(&content, &options.offset)?;

    out.write_all(&output)?;
    out.flush()?;
    Ok(())
}
