//! CSV export of expense records
//!
//! One header row followed by one row per record, in the order given.
//! Fields containing commas, quotes or newlines are quoted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the export file
pub const CSV_HEADER: [&str; 5] = ["ID", "Date", "Amount", "Category", "Description"];

/// Write expenses as CSV to any writer
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date_string(),
            expense.amount.to_string(),
            expense.category.clone(),
            expense.description.clone(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV output: {}", e)))?;

    Ok(())
}

/// Write expenses to a CSV file, replacing any existing file at `path`
pub fn export_expenses_to_path(path: &Path, expenses: &[Expense]) -> ExpenseResult<()> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_expenses_csv(expenses, BufWriter::new(file))
}
