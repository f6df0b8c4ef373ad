//! JSON output and the overwrite confirmation prompt.

use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use crate::core::constants::json;
use crate::core::error::Result;
use crate::core::types::Mapping;

/// Serialize the mapping to `path` as UTF-8 JSON, pretty-printed with a
/// 4-space indent. Non-ASCII characters are written literally, not escaped,
/// and no trailing newline is emitted, so reruns over an unchanged tree
/// produce byte-identical files.
pub fn write_mapping<P: AsRef<Path>>(path: P, mapping: &Mapping) -> Result<()> {
    let file = fs::File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(json::INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    mapping.serialize(&mut serializer)?;
    writer.flush()?;

    Ok(())
}

/// Ask whether an existing output file may be overwritten.
///
/// Prints `<path> already exists, overwrite? [y/N]` and reads one line.
/// Only `y`/`yes` (any case) count as affirmative; everything else,
/// including an empty answer, declines. Generic over reader and writer so
/// tests can drive it without a terminal.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<bool> {
    write!(writer, "{} already exists, overwrite? [y/N] ", path.display())?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();

    Ok(answer == "y" || answer == "yes")
}
