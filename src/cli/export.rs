//! CLI command for CSV export

use std::path::Path;

use crate::error::ExpenseResult;
use crate::export::export_expenses_to_path;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::FilterArgs;

/// Export the selected expenses to a CSV file
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    filter: &FilterArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expenses = service.list(&filter.to_filter()?)?;

    export_expenses_to_path(output, &expenses)?;

    println!("Exported {} expenses to: {}", expenses.len(), output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::storage::seed_sample_expenses;
    use tempfile::TempDir;

    #[test]
    fn test_export_filtered_subset() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(ExpensePaths::with_base_dir(temp_dir.path().join("data"))).unwrap();
        seed_sample_expenses(&storage).unwrap();

        let output = temp_dir.path().join("food.csv");
        let filter = FilterArgs {
            category: Some("Food".into()),
            ..Default::default()
        };
        handle_export_command(&storage, &output, &filter).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,2025-01-01,200,Food,Breakfast");
        assert_eq!(lines[2], "4,2025-01-04,400,Food,Snacks");
    }
}
