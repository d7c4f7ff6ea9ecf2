//! Value coercion engine: raw cell → typed JSON value.
//!
//! Pure and total. Structured-literal parse failures always degrade to the
//! trimmed string; nothing here returns an error.

use crate::types::Cell;
use serde_json::Value;

/// Coerce a raw cell into a JSON value.
///
/// Text cells go through, in order: empty check, JSON array literal (with a
/// comma-split fallback), JSON object literal, number, boolean, plain
/// string. Non-text primitives pass through unchanged.
pub fn coerce(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Null,
        Cell::Number(n) => number_value(*n),
        Cell::Bool(b) => Value::Bool(*b),
        Cell::Text(s) => coerce_text(s),
    }
}

fn coerce_text(raw: &str) -> Value {
    let text = raw.trim();
    if text.is_empty() {
        return Value::Null;
    }

    if text.starts_with('[') && text.ends_with(']') {
        if let Some(value) = parse_array_literal(text) {
            return value;
        }
        // Invalid literal with no usable comma split: the original trimmed
        // string stays the candidate for the remaining steps.
    } else if text.starts_with('{') && text.ends_with('}') {
        if let Ok(value @ Value::Object(_)) = serde_json::from_str(text) {
            return value;
        }
    }

    if let Some(value) = parse_number(text) {
        return value;
    }

    match text.to_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(text.to_string()),
    }
}

/// Parse a `[...]` cell. Strict JSON first; on failure, split the inner
/// content on commas when any are present, trimming pieces and dropping
/// empty ones. Returns None when neither path yields an array.
fn parse_array_literal(text: &str) -> Option<Value> {
    if let Ok(value @ Value::Array(_)) = serde_json::from_str(text) {
        return Some(value);
    }

    let inner = &text[1..text.len() - 1];
    if inner.contains(',') {
        let items: Vec<Value> = inner
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| Value::String(piece.to_string()))
            .collect();
        if !items.is_empty() {
            return Some(Value::Array(items));
        }
    }

    None
}

/// Numeric test: the entire trimmed string must parse as a finite f64.
/// Leading zeros, scientific notation, and a leading sign are fine;
/// `inf`/`NaN` spellings are rejected so they stay strings (JSON numbers
/// cannot carry them).
fn parse_number(text: &str) -> Option<Value> {
    let n: f64 = text.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(number_value(n))
}

/// JSON number from an f64, emitting whole values as integers (so "30"
/// round-trips as 30, not 30.0).
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        Value::Number(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}
