//! Conversion engine tests: classification, coercion, and both converter
//! variants exercised through the public library API.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sheet2json::convert::{classify, coerce, convert_sheet, locate_header};
use sheet2json::types::{Cell, ConvertOptions, Grid, SheetShape};

fn text_grid(rows: &[&[&str]]) -> Grid {
    rows.iter()
        .map(|row| row.iter().map(|s| Cell::Text(s.to_string())).collect())
        .collect()
}

fn convert(grid: &Grid) -> Value {
    convert_sheet(grid, &ConvertOptions::default()).document
}

// ═══════════════════════════════════════════════════════════════════════════
// CLASSIFICATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_first_cell_always_classifies_tabular() {
    for grid in [
        vec![vec![Cell::Empty, Cell::Text("x".to_string())]],
        vec![vec![Cell::Text(String::new())]],
        vec![Vec::new()],
    ] {
        assert_eq!(classify(&grid), SheetShape::Tabular);
    }
}

#[test]
fn test_key_substring_classifies_key_value() {
    for first in ["key", "Key", " KEY ", "Key Name", "hotkey"] {
        let grid = text_grid(&[&[first, "value"]]);
        assert_eq!(classify(&grid), SheetShape::KeyValue, "for {:?}", first);
    }
}

#[test]
fn test_mode_is_decided_by_first_cell_only() {
    // "key" appearing further down changes nothing.
    let grid = text_grid(&[&["id", "name"], &["key", "Gold"]]);
    assert_eq!(classify(&grid), SheetShape::Tabular);
}

// ═══════════════════════════════════════════════════════════════════════════
// SPEC WORKED EXAMPLES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_key_value_record() {
    let grid = text_grid(&[
        &["key", "value"],
        &["name", "Bob"],
        &["age", "30"],
        &["active", "true"],
    ]);
    assert_eq!(
        convert(&grid),
        json!({"name": "Bob", "age": 30, "active": true})
    );
}

#[test]
fn test_tabular_records() {
    let grid = text_grid(&[
        &["id", "name", "type"],
        &["1", "Gold", "currency"],
        &["2", "Gem", "currency"],
    ]);
    assert_eq!(
        convert(&grid),
        json!([
            {"id": 1, "name": "Gold", "type": "currency"},
            {"id": 2, "name": "Gem", "type": "currency"},
        ])
    );
}

#[test]
fn test_array_marker_is_inert_in_tabular_mode() {
    // First cell "level" is not key-like, so the tabular path runs and
    // the rewards[] column stays a plain scalar column.
    let grid = text_grid(&[&["level", "rewards[]", "multiplier"], &["1", "coin", "gem"]]);
    let conversion = convert_sheet(&grid, &ConvertOptions::default());
    assert_eq!(conversion.shape, SheetShape::Tabular);
    assert_eq!(
        conversion.document,
        json!([{"level": 1, "rewards": "coin", "multiplier": "gem"}])
    );
}

#[test]
fn test_bracket_literal_coercion_tiers() {
    assert_eq!(coerce(&Cell::Text("[1,2,3]".to_string())), json!([1, 2, 3]));
    assert_eq!(
        coerce(&Cell::Text("[abc, def]".to_string())),
        json!(["abc", "def"])
    );
    assert_eq!(coerce(&Cell::Text("[abc]".to_string())), json!("[abc]"));
}

#[test]
fn test_empty_grid_is_empty_object() {
    assert_eq!(convert(&Vec::new()), json!({}));
}

// ═══════════════════════════════════════════════════════════════════════════
// ARRAY FIELDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_array_field_round_trip() {
    let mut grid = text_grid(&[&["key", "value"]]);
    grid.push(vec![
        Cell::Text("drops[]".to_string()),
        Cell::Text("a".to_string()),
        Cell::Text("b".to_string()),
        Cell::Text("c".to_string()),
        Cell::Empty,
        Cell::Text("ghost".to_string()),
    ]);
    // Contiguous run a, b, c; the gap terminates before "ghost".
    assert_eq!(convert(&grid), json!({"drops": ["a", "b", "c"]}));
}

#[test]
fn test_array_field_gap_stops_at_first_empty() {
    let grid = text_grid(&[&["key", "value"], &["drops[]", "a", "", "c"]]);
    assert_eq!(convert(&grid), json!({"drops": ["a"]}));
}

// ═══════════════════════════════════════════════════════════════════════════
// ROW AND HEADER EDGE CASES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_all_empty_rows_never_appear() {
    let grid = text_grid(&[&["id", "name"], &["", ""], &["1", "Gold"], &["", ""]]);
    assert_eq!(convert(&grid), json!([{"id": 1, "name": "Gold"}]));
}

#[test]
fn test_key_value_row_with_single_cell_is_ignored() {
    let grid = text_grid(&[&["key", "value"], &["lonely"], &["hp", "10"]]);
    assert_eq!(convert(&grid), json!({"hp": 10}));
}

#[test]
fn test_header_locator_skips_comments() {
    let grid = text_grid(&[
        &["Generated table - do not hand-edit"],
        &["id", "name"],
        &["1", "Gold"],
    ]);
    assert_eq!(locate_header(&grid), Some(1));
    assert_eq!(convert(&grid), json!([{"id": 1, "name": "Gold"}]));
}

#[test]
fn test_header_fallback_uses_row_zero() {
    let grid = text_grid(&[&["level", "boss"], &["1", "Slime King"]]);
    let conversion = convert_sheet(&grid, &ConvertOptions::default());
    assert!(conversion.header_fallback);
    assert_eq!(
        conversion.document,
        json!([{"level": 1, "boss": "Slime King"}])
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADER-SHAPED INPUT (non-text primitives)
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_number_and_bool_cells_pass_through() {
    let grid = vec![
        vec![Cell::Text("id".to_string()), Cell::Text("rate".to_string()), Cell::Text("on".to_string())],
        vec![Cell::Number(1.0), Cell::Number(1.5), Cell::Bool(true)],
    ];
    assert_eq!(convert(&grid), json!([{"id": 1, "rate": 1.5, "on": true}]));
}

#[test]
fn test_numeric_key_value_header_cell() {
    // A numeric key cell stringifies into the field name.
    let grid = vec![
        vec![Cell::Text("key".to_string()), Cell::Text("value".to_string())],
        vec![Cell::Number(7.0), Cell::Text("lucky".to_string())],
    ];
    assert_eq!(convert(&grid), json!({"7": "lucky"}));
}
