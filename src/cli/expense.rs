//! CLI commands for listing, seeding and charting expenses

use std::io::Write;

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::reports::CategoryBreakdown;
use crate::services::ExpenseService;
use crate::storage::{seed_sample_expenses, Storage};

use super::FilterArgs;

/// Print the selected expenses as a table with totals
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    filter: &FilterArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expenses = service.list(&filter.to_filter()?)?;

    print!("{}", format_expense_table(&expenses, &settings.currency_symbol));

    Ok(())
}

/// Insert the sample records
///
/// `seeded_at_startup` is the number of samples already inserted into an
/// empty store during startup; when non-zero nothing more is inserted.
/// Returns the number of records this run added.
pub fn handle_seed_command(storage: &Storage, seeded_at_startup: usize) -> ExpenseResult<usize> {
    let inserted = if seeded_at_startup > 0 {
        seeded_at_startup
    } else {
        seed_sample_expenses(storage)?
    };
    let total = storage.expenses.count()?;

    println!("Inserted {} sample expenses ({} total).", inserted, total);

    Ok(inserted)
}

/// Print the spending breakdown by category
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    filter: &FilterArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expenses = service.list(&filter.to_filter()?)?;
    let breakdown = CategoryBreakdown::from_expenses(&expenses);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    breakdown.format_terminal(&mut handle, &settings.currency_symbol)?;
    handle.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::storage::seed_if_empty;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_seed_on_empty_store_inserts_samples_once() {
        let (_temp, storage) = create_test_storage();

        let seeded = seed_if_empty(&storage).unwrap();
        assert_eq!(handle_seed_command(&storage, seeded).unwrap(), 4);

        assert_eq!(storage.expenses.count().unwrap(), 4);
        assert_eq!(storage.audit().entry_count().unwrap(), 4);
    }

    #[test]
    fn test_seed_without_startup_seed_inserts_samples() {
        let (_temp, storage) = create_test_storage();

        assert_eq!(handle_seed_command(&storage, 0).unwrap(), 4);
        assert_eq!(storage.expenses.count().unwrap(), 4);
    }

    #[test]
    fn test_seed_on_populated_store_appends_samples() {
        let (_temp, storage) = create_test_storage();
        seed_if_empty(&storage).unwrap();

        let seeded = seed_if_empty(&storage).unwrap();
        assert_eq!(seeded, 0);
        assert_eq!(handle_seed_command(&storage, seeded).unwrap(), 4);
        assert_eq!(storage.expenses.count().unwrap(), 8);
    }
}
