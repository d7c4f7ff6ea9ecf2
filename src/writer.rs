//! JSON emitter: output naming, filename sanitizing, document persistence.

use crate::error::ConvertResult;
use crate::types::MultiSheetNaming;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Replace path-unsafe characters with `_` so any sheet name can become a
/// filename.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}

/// Output file name for one worksheet. Single-sheet workbooks are named
/// after the file; multi-sheet workbooks follow the configured policy.
pub fn output_file_name(
    file_stem: &str,
    sheet_name: &str,
    sheet_count: usize,
    naming: MultiSheetNaming,
) -> String {
    if sheet_count > 1 {
        match naming {
            MultiSheetNaming::SheetNameOnly => {
                format!("{}.json", sanitize_file_name(sheet_name))
            }
            MultiSheetNaming::FileAndSheetName => format!(
                "{}_{}.json",
                sanitize_file_name(file_stem),
                sanitize_file_name(sheet_name)
            ),
        }
    } else {
        format!("{}.json", sanitize_file_name(file_stem))
    }
}

/// Write one JSON document. `indent == 0` emits a compact single line;
/// otherwise the document is pretty-printed with that many spaces.
pub fn write_document(path: &Path, document: &Value, indent: usize) -> ConvertResult<()> {
    let bytes = if indent == 0 {
        serde_json::to_vec(document)?
    } else {
        let indent_bytes = vec![b' '; indent];
        let formatter = PrettyFormatter::with_indent(&indent_bytes);
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        document.serialize(&mut serializer)?;
        buffer
    };

    fs::write(path, bytes)?;
    Ok(())
}
