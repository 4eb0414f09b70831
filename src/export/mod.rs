//! Export module for the expense tracker
//!
//! Writes expense records to spreadsheet-compatible CSV.

pub mod csv;

pub use csv::{export_expenses_csv, export_expenses_to_path, CSV_HEADER};
