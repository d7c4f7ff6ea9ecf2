//! sheet2json - spreadsheet workbooks → JSON game-config documents.
//!
//! Given a directory of spreadsheet files, infers per worksheet whether
//! the sheet is a flat key-value record or a list of homogeneous records,
//! and emits one JSON artifact per worksheet in that shape.
//!
//! # Example
//!
//! ```no_run
//! use sheet2json::batch::convert_directory;
//! use sheet2json::types::ConvertOptions;
//! use std::path::Path;
//!
//! let report = convert_directory(
//!     Path::new("excels"),
//!     Path::new("jsons"),
//!     &ConvertOptions::default(),
//! )?;
//!
//! println!("Converted {}/{} files", report.success, report.total);
//! # Ok::<(), sheet2json::error::ConvertError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod convert;
pub mod error;
pub mod excel;
pub mod project;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{BatchReport, Cell, ConvertOptions, Grid, MultiSheetNaming, Sheet, SheetShape};
