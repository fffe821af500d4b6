//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::core::models::SummaryRecord;
use crate::error::{RecapError, Result};

/// Writes the summary to `output_path` as pretty JSON.
pub fn write_json(summary: &SummaryRecord, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(summary)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the summary to pretty JSON with 4-space indentation.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(summary: &SummaryRecord) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    summary.serialize(&mut ser)?;
    into_json_string(buf)
}

fn into_json_string(buf: Vec<u8>) -> Result<String> {
    String::from_utf8(buf).map_err(|e| RecapError::utf8("JSON output", e))
}

/// Converts the summary to single-line JSON.
pub fn to_json_compact(summary: &SummaryRecord) -> Result<String> {
    Ok(serde_json::to_string(summary)?)
}
