//! Storage layer for the expense tracker
//!
//! SQLite-backed expense repository plus the audit log that records every
//! change made through the services.

pub mod database;
pub mod expenses;
pub mod init;

pub use expenses::ExpenseRepository;
pub use init::{initialize_storage, seed_if_empty, seed_sample_expenses, SAMPLE_EXPENSES};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::Expense;

/// Main storage coordinator that provides access to the repository and audit log
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Open the database under `paths`, creating it if needed
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let conn = database::open(&paths.database_file())?;

        Ok(Self {
            expenses: ExpenseRepository::new(conn),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a newly created expense in the audit log
    pub fn log_create(&self, expense: &Expense) -> ExpenseResult<()> {
        self.audit.log(&AuditEntry::create(expense))
    }

    /// Record an in-place update in the audit log
    pub fn log_update(&self, before: &Expense, after: &Expense) -> ExpenseResult<()> {
        self.audit.log(&AuditEntry::update(before, after))
    }

    /// Record a deletion in the audit log
    pub fn log_delete(&self, expense: &Expense) -> ExpenseResult<()> {
        self.audit.log(&AuditEntry::delete(expense))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{parse_date, ExpenseDraft};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("data"));
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").join("expenses.db").exists());
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_data_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let storage = Storage::new(paths.clone()).unwrap();
            let draft = ExpenseDraft::new(parse_date("2025-01-01").unwrap(), 200.0, "Food", "");
            storage.expenses.create(&draft).unwrap();
        }

        let storage = Storage::new(paths).unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 1);
    }

    #[test]
    fn test_log_helpers_append_entries() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let draft = ExpenseDraft::new(parse_date("2025-01-01").unwrap(), 1.0, "Food", "");
        let created = storage.expenses.create(&draft).unwrap();
        storage.log_create(&created).unwrap();
        storage.log_delete(&created).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Delete);
    }
}
