use clap::ValueEnum;
use serde::Serialize;

//==============================================================================
// Worksheet Grid
//==============================================================================

/// A raw worksheet cell, as delivered by the sheet loader.
///
/// Loaders normalize everything the underlying format can hold (dates,
/// errors, formula results) into one of these four shapes before the
/// conversion engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// True for cells that count as "no value at all": absent cells and
    /// the empty string. A whitespace-only string is NOT empty here (it
    /// still coerces to JSON null, but it does not terminate array-field
    /// collection and does not make a row blank on its own).
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Display form of the cell, used for header/key names and
    /// classification. Mirrors a stringify-then-inspect flow: numbers and
    /// booleans become their canonical text, empty becomes "".
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_number(*n),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

/// Format a number the way spreadsheet text would show it: whole values
/// without a trailing ".0".
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A worksheet as a row-major grid of raw cells. Rows may be ragged;
/// missing trailing cells are treated as empty.
pub type Grid = Vec<Vec<Cell>>;

/// A named worksheet grid produced by the loader.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub grid: Grid,
}

impl Sheet {
    pub fn new(name: String, grid: Grid) -> Self {
        Self { name, grid }
    }
}

//==============================================================================
// Structure classification
//==============================================================================

/// The inferred shape of a worksheet, fixed once per sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetShape {
    /// Flat record: one field per row, columns 0/1 = name/value.
    KeyValue,
    /// List of records: one header row, each later row = one record.
    Tabular,
}

impl SheetShape {
    pub fn label(&self) -> &'static str {
        match self {
            SheetShape::KeyValue => "key-value",
            SheetShape::Tabular => "array",
        }
    }
}

//==============================================================================
// Conversion options
//==============================================================================

/// Output file naming policy for workbooks with more than one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MultiSheetNaming {
    /// `<sheet>.json`; sheet names are assumed unique across the batch.
    #[default]
    SheetNameOnly,
    /// `<file>_<sheet>.json`
    FileAndSheetName,
}

/// Unified converter configuration.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub naming: MultiSheetNaming,
    /// Spaces of JSON indentation; 0 emits compact single-line documents.
    pub json_indent: usize,
    /// Whether `name[]` keys in key-value sheets collapse trailing cells
    /// into an array value.
    pub support_array_fields: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            naming: MultiSheetNaming::SheetNameOnly,
            json_indent: 0,
            support_array_fields: true,
        }
    }
}

//==============================================================================
// Batch reporting
//==============================================================================

/// One emitted JSON artifact.
#[derive(Debug, Clone, Serialize)]
pub struct SheetOutput {
    /// Output file name (already sanitized).
    pub file_name: String,
    /// `<workbook file>/<sheet name>` provenance.
    pub source: String,
    pub shape: SheetShape,
    /// Rows for tabular documents, fields for key-value documents.
    pub record_count: usize,
    /// True when no `id`/`key` header row was found and row 0 was used.
    pub header_fallback: bool,
}

/// One workbook that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub file: String,
    pub error: String,
}

/// Result of converting a directory of workbooks.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    /// Workbooks fully processed.
    pub success: usize,
    /// Workbooks discovered.
    pub total: usize,
    pub outputs: Vec<SheetOutput>,
    pub failures: Vec<FileFailure>,
    /// `<workbook>/<sheet>` entries skipped because the sheet was empty.
    pub skipped: Vec<String>,
}
