//! JSON output formatter

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Write `value` as pretty JSON followed by a newline
pub fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
