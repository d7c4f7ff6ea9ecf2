//! Tabular converter: header row defines fields, each later row is a record.

use crate::convert::classify::locate_header;
use crate::convert::coerce::coerce;
use crate::convert::field_name;
use crate::types::{Cell, Grid};
use serde_json::{Map, Value};

/// Result of a tabular conversion.
#[derive(Debug)]
pub struct TabularConversion {
    pub rows: Vec<Value>,
    /// True when no `id`/`key` header row was found and row 0 was used.
    pub header_fallback: bool,
}

/// Convert a tabular grid into an ordered list of JSON records.
///
/// The header row is located via [`locate_header`]; leading comment rows
/// above it are ignored. A column with a blank header cell is skipped for
/// all rows. Rows that are entirely empty, or that produce zero fields,
/// contribute nothing. Missing trailing cells read as empty and coerce to
/// null like any other empty cell in a populated row.
pub fn convert_tabular(grid: &Grid) -> TabularConversion {
    if grid.len() < 2 {
        return TabularConversion {
            rows: Vec::new(),
            header_fallback: false,
        };
    }

    let (header_index, header_fallback) = match locate_header(grid) {
        Some(index) => (index, false),
        None => (0, true),
    };

    // None marks a column with no usable header name; note the marker
    // suffix is stripped here too, it just never changes extraction.
    let headers: Vec<Option<String>> = grid[header_index].iter().map(field_name).collect();

    let mut rows = Vec::new();
    for row in grid.iter().skip(header_index + 1) {
        if row.iter().all(Cell::is_empty) {
            continue;
        }

        let mut record = Map::new();
        for (col, name) in headers.iter().enumerate() {
            let Some(name) = name else {
                continue;
            };
            let cell = row.get(col).unwrap_or(&Cell::Empty);
            record.insert(name.clone(), coerce(cell));
        }

        if !record.is_empty() {
            rows.push(Value::Object(record));
        }
    }

    TabularConversion {
        rows,
        header_fallback,
    }
}
