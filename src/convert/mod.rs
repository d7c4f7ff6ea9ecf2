//! Structure inference and conversion engine.
//!
//! One engine serves both worksheet shapes:
//! - key-value sheets become a flat JSON object,
//! - tabular sheets become an array of JSON records.
//!
//! The shape is decided once per sheet from its first cell and never
//! changes during processing.

mod classify;
mod coerce;
mod key_value;
mod tabular;

pub use classify::{classify, locate_header};
pub use coerce::coerce;
pub use key_value::convert_key_value;
pub use tabular::{convert_tabular, TabularConversion};

use crate::types::{Cell, ConvertOptions, Grid, SheetShape};
use serde_json::{Map, Value};

/// A converted worksheet document.
#[derive(Debug)]
pub struct SheetConversion {
    pub document: Value,
    pub shape: SheetShape,
    /// Tabular only: no `id`/`key` header row was found, row 0 was used.
    pub header_fallback: bool,
}

impl SheetConversion {
    /// Rows for tabular documents, fields for key-value documents.
    pub fn record_count(&self) -> usize {
        match &self.document {
            Value::Array(rows) => rows.len(),
            Value::Object(fields) => fields.len(),
            _ => 0,
        }
    }
}

/// Convert one worksheet grid into its JSON document.
///
/// An empty grid short-circuits to an empty object without running the
/// classifier.
pub fn convert_sheet(grid: &Grid, options: &ConvertOptions) -> SheetConversion {
    if grid.is_empty() {
        return SheetConversion {
            document: Value::Object(Map::new()),
            shape: SheetShape::KeyValue,
            header_fallback: false,
        };
    }

    match classify(grid) {
        SheetShape::KeyValue => SheetConversion {
            document: Value::Object(convert_key_value(grid, options.support_array_fields)),
            shape: SheetShape::KeyValue,
            header_fallback: false,
        },
        SheetShape::Tabular => {
            let converted = convert_tabular(grid);
            SheetConversion {
                document: Value::Array(converted.rows),
                shape: SheetShape::Tabular,
                header_fallback: converted.header_fallback,
            }
        }
    }
}

/// Derive a field name from a header or key cell: trim, strip a trailing
/// `[]` marker, trim again. Returns None when nothing usable remains, in
/// which case the column/row is skipped entirely.
pub(crate) fn field_name(cell: &Cell) -> Option<String> {
    let text = cell.as_text();
    let trimmed = text.trim();
    let name = trimmed.strip_suffix("[]").unwrap_or(trimmed).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
