//! Storage initialization
//!
//! First-run setup and the sample records inserted into an empty database.

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::{parse_date, ExpenseDraft};

use super::{database, Storage};

/// Sample records as (date, amount, category, description), inserted in order
pub const SAMPLE_EXPENSES: [(&str, f64, &str, &str); 4] = [
    ("2025-01-01", 200.0, "Food", "Breakfast"),
    ("2025-01-02", 850.0, "Travel", "Auto fare"),
    ("2025-01-03", 1200.0, "Shopping", "T-shirt"),
    ("2025-01-04", 400.0, "Food", "Snacks"),
];

/// Make sure the data directory, database file and table exist
///
/// Returns `true` when the database file did not exist before this call.
/// Calling it again is harmless.
pub fn initialize_storage(paths: &ExpensePaths) -> ExpenseResult<bool> {
    paths.ensure_directories()?;

    let fresh = !paths.database_file().exists();
    database::open(&paths.database_file())?;

    Ok(fresh)
}

/// Insert every sample record, regardless of what is already stored
///
/// Returns the number of records inserted.
pub fn seed_sample_expenses(storage: &Storage) -> ExpenseResult<usize> {
    for (date, amount, category, description) in SAMPLE_EXPENSES {
        let draft = ExpenseDraft::new(parse_date(date)?, amount, category, description);
        let expense = storage.expenses.create(&draft)?;
        storage.log_create(&expense)?;
    }

    Ok(SAMPLE_EXPENSES.len())
}

/// Insert the sample records only when the store is empty
pub fn seed_if_empty(storage: &Storage) -> ExpenseResult<usize> {
    if storage.expenses.count()? > 0 {
        return Ok(0);
    }

    seed_sample_expenses(storage)
}
