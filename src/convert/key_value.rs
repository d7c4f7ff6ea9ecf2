//! Key-value converter: one field per row, columns 0/1 = name/value.

use crate::convert::coerce::coerce;
use crate::convert::field_name;
use crate::types::{Cell, Grid};
use serde_json::{Map, Value};

/// Convert a key-value grid into a flat JSON object.
///
/// Row 0 is always the header and is discarded. A row is skipped when it
/// has fewer than two cells, all its cells are empty, or its key cell
/// yields no usable field name. A later row with a duplicate field name
/// overwrites the earlier value.
///
/// When `support_array_fields` is on, a key ending in `[]` collapses the
/// row's trailing contiguous cells into an array value instead of taking
/// column 1 alone.
pub fn convert_key_value(grid: &Grid, support_array_fields: bool) -> Map<String, Value> {
    let mut result = Map::new();

    for row in grid.iter().skip(1) {
        if row.len() < 2 || row.iter().all(Cell::is_empty) {
            continue;
        }

        let key_cell = &row[0];
        if key_cell.is_empty() {
            continue;
        }

        let raw_key = key_cell.as_text();
        let Some(name) = field_name(key_cell) else {
            continue;
        };

        if support_array_fields && raw_key.trim().ends_with("[]") {
            result.insert(name, Value::Array(collect_array_values(row)));
        } else {
            result.insert(name, coerce(&row[1]));
        }
    }

    result
}

/// Collect coerced values from column 1 onward, stopping at the first
/// truly empty cell (arrays are contiguous runs; a gap terminates, it is
/// not skipped). A cell that coerces to null without being empty (e.g.
/// whitespace-only text) is excluded but does not terminate the run.
fn collect_array_values(row: &[Cell]) -> Vec<Value> {
    let mut values = Vec::new();

    for cell in &row[1..] {
        if cell.is_empty() {
            break;
        }
        let value = coerce(cell);
        if !value.is_null() {
            values.push(value);
        }
    }

    values
}
