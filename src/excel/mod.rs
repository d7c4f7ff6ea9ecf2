//! Spreadsheet input: workbook discovery and worksheet grid loading.

mod loader;

pub use loader::{is_supported_file, WorkbookLoader, SUPPORTED_EXTENSIONS};
