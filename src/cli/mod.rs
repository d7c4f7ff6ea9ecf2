//! CLI command handlers

pub mod commands;

pub use commands::{convert, list_projects, new_project};
