//! Structure classification and header location.

use crate::types::{Grid, SheetShape};

/// Decide whether a grid is a flat key-value record or a list of records.
///
/// Reads only `grid[0][0]`: an absent or empty cell means Tabular,
/// otherwise the normalized text is key-value exactly when it contains
/// "key". The substring match tolerates header variants like "Key Name".
pub fn classify(grid: &Grid) -> SheetShape {
    let first = match grid.first().and_then(|row| row.first()) {
        Some(cell) if !cell.is_empty() => cell,
        _ => return SheetShape::Tabular,
    };

    let normalized = first.as_text().to_lowercase();
    let normalized = normalized.trim();
    if normalized == "key" || normalized.contains("key") {
        SheetShape::KeyValue
    } else {
        SheetShape::Tabular
    }
}

/// Find the real header row of a tabular grid: the first row whose first
/// cell is exactly `id` or `key` (case-insensitive, trimmed). Leading
/// comment/title rows are skipped this way. Returns None if no row
/// qualifies; the caller falls back to row 0.
pub fn locate_header(grid: &Grid) -> Option<usize> {
    for (index, row) in grid.iter().enumerate() {
        let first = match row.first() {
            Some(cell) if !cell.is_empty() => cell,
            _ => continue,
        };

        let normalized = first.as_text().to_lowercase();
        let normalized = normalized.trim();
        if normalized == "id" || normalized == "key" {
            return Some(index);
        }
    }

    None
}
