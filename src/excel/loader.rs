//! Workbook loader - spreadsheet files → raw worksheet grids.

use crate::error::{ConvertError, ConvertResult};
use crate::types::{Cell, Grid, Sheet};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Spreadsheet extensions the loader accepts (case-insensitive).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// Check whether a path has a supported spreadsheet extension.
pub fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Workbook loader for a single spreadsheet file.
pub struct WorkbookLoader {
    path: std::path::PathBuf,
}

impl WorkbookLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load every worksheet as a raw grid, in workbook order. Empty
    /// sheets come through as empty grids; the caller decides their fate.
    pub fn load(&self) -> ConvertResult<Vec<Sheet>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            ConvertError::Spreadsheet(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                ConvertError::Spreadsheet(format!(
                    "Failed to read sheet '{}': {}",
                    sheet_name, e
                ))
            })?;
            sheets.push(Sheet::new(sheet_name, range_to_grid(&range)));
        }

        Ok(sheets)
    }
}

fn range_to_grid(range: &Range<Data>) -> Grid {
    range
        .rows()
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect()
}

/// Normalize a calamine cell into the loader contract: formula results
/// are already evaluated, dates and cell errors arrive as display text.
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        other => Cell::Text(other.to_string()),
    }
}
