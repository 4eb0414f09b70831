//! Expense repository for SQLite storage
//!
//! All reads return records in ascending id order. Every write runs inside
//! its own transaction and is committed before the call returns.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};

const SELECT_COLUMNS: &str = "SELECT id, date, amount, category, description FROM expenses";

/// Repository for expense persistence
pub struct ExpenseRepository {
    conn: Mutex<Connection>,
}

impl ExpenseRepository {
    /// Create a repository over an open connection
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> ExpenseResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire connection lock: {}", e)))
    }

    /// Insert a new expense; the id is assigned by the database
    pub fn create(&self, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO expenses (date, amount, category, description) VALUES (?1, ?2, ?3, ?4)",
            params![draft.date, draft.amount, draft.category, draft.description],
        )?;
        let id = ExpenseId::new(tx.last_insert_rowid());

        tx.commit()?;
        Ok(draft.clone().into_expense(id))
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let conn = self.lock()?;
        let expense = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.value()],
                expense_from_row,
            )
            .optional()?;
        Ok(expense)
    }

    /// Replace every mutable field of the expense with the given id
    ///
    /// Returns the previous state, or `None` (and changes nothing) when no
    /// record has that id.
    pub fn update(&self, id: ExpenseId, draft: &ExpenseDraft) -> ExpenseResult<Option<Expense>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let before = tx
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.value()],
                expense_from_row,
            )
            .optional()?;

        if before.is_some() {
            tx.execute(
                "UPDATE expenses SET date = ?1, amount = ?2, category = ?3, description = ?4 WHERE id = ?5",
                params![
                    draft.date,
                    draft.amount,
                    draft.category,
                    draft.description,
                    id.value()
                ],
            )?;
        }

        tx.commit()?;
        Ok(before)
    }

    /// Delete the expense with the given id
    ///
    /// Returns the removed record, or `None` when no record has that id.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let removed = tx
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.value()],
                expense_from_row,
            )
            .optional()?;

        if removed.is_some() {
            tx.execute("DELETE FROM expenses WHERE id = ?1", params![id.value()])?;
        }

        tx.commit()?;
        Ok(removed)
    }

    /// Get every expense
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;
        let expenses = stmt
            .query_map([], expense_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Get expenses whose category matches exactly (case-sensitive)
    pub fn filter_by_category(&self, category: &str) -> ExpenseResult<Vec<Expense>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE category = ?1 ORDER BY id ASC",
            SELECT_COLUMNS
        ))?;
        let expenses = stmt
            .query_map(params![category], expense_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Get expenses dated within `[start, end]` inclusive
    ///
    /// Dates are stored as zero-padded ISO text, so the textual `BETWEEN`
    /// comparison matches calendar order.
    pub fn filter_by_date(&self, start: NaiveDate, end: NaiveDate) -> ExpenseResult<Vec<Expense>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE date BETWEEN ?1 AND ?2 ORDER BY id ASC",
            SELECT_COLUMNS
        ))?;
        let expenses = stmt
            .query_map(params![start, end], expense_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Get the total number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Map a row of `SELECT_COLUMNS` to an expense
fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: ExpenseId::new(row.get(0)?),
        date: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::database;

    fn create_test_repo() -> ExpenseRepository {
        ExpenseRepository::new(database::open_in_memory().unwrap())
    }

    fn draft(date: &str, amount: f64, category: &str, description: &str) -> ExpenseDraft {
        ExpenseDraft::new(
            crate::models::parse_date(date).unwrap(),
            amount,
            category,
            description,
        )
    }

    fn date(s: &str) -> NaiveDate {
        crate::models::parse_date(s).unwrap()
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let repo = create_test_repo();

        let first = repo.create(&draft("2025-01-01", 200.0, "Food", "Breakfast")).unwrap();
        let second = repo.create(&draft("2025-01-02", 850.0, "Travel", "Auto fare")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.count().unwrap(), 2);

        let all = repo.list_all().unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[test]
    fn test_created_fields_round_trip() {
        let repo = create_test_repo();
        let created = repo
            .create(&draft("2025-03-09", 12.75, "Bills", "Water, March"))
            .unwrap();

        let loaded = repo.get(created.id).unwrap().unwrap();
        assert_eq!(loaded.date, date("2025-03-09"));
        assert_eq!(loaded.amount, 12.75);
        assert_eq!(loaded.category, "Bills");
        assert_eq!(loaded.description, "Water, March");
    }

    #[test]
    fn test_update_replaces_fields() {
        let repo = create_test_repo();
        let created = repo.create(&draft("2025-01-01", 200.0, "Food", "Breakfast")).unwrap();
        repo.create(&draft("2025-01-02", 50.0, "Other", "")).unwrap();

        let before = repo
            .update(created.id, &draft("2025-02-01", 999.5, "Shopping", "Shoes"))
            .unwrap();
        assert_eq!(before, Some(created.clone()));

        let updated = repo.get(created.id).unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, date("2025-02-01"));
        assert_eq!(updated.amount, 999.5);
        assert_eq!(updated.category, "Shopping");
        assert_eq!(updated.description, "Shoes");
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let repo = create_test_repo();
        repo.create(&draft("2025-01-01", 200.0, "Food", "")).unwrap();
        let snapshot = repo.list_all().unwrap();

        let result = repo
            .update(ExpenseId::new(999), &draft("2025-02-01", 1.0, "Other", ""))
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.list_all().unwrap(), snapshot);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let repo = create_test_repo();
        let a = repo.create(&draft("2025-01-01", 1.0, "Food", "")).unwrap();
        let b = repo.create(&draft("2025-01-02", 2.0, "Food", "")).unwrap();

        let removed = repo.delete(a.id).unwrap();
        assert_eq!(removed, Some(a));
        assert_eq!(repo.list_all().unwrap(), vec![b]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let repo = create_test_repo();
        repo.create(&draft("2025-01-01", 1.0, "Food", "")).unwrap();

        assert!(repo.delete(ExpenseId::new(42)).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let repo = create_test_repo();
        let a = repo.create(&draft("2025-01-01", 1.0, "Food", "")).unwrap();
        repo.delete(a.id).unwrap();
        let b = repo.create(&draft("2025-01-01", 1.0, "Food", "")).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_filter_by_category_exact_match() {
        let repo = create_test_repo();
        let a = repo.create(&draft("2025-01-01", 200.0, "Food", "")).unwrap();
        repo.create(&draft("2025-01-02", 850.0, "Travel", "")).unwrap();
        repo.create(&draft("2025-01-03", 5.0, "food", "")).unwrap();
        let d = repo.create(&draft("2025-01-04", 400.0, "Food", "")).unwrap();

        let food = repo.filter_by_category("Food").unwrap();
        assert_eq!(food, vec![a, d]);
        assert!(repo.filter_by_category("Bills").unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_date_inclusive() {
        let repo = create_test_repo();
        repo.create(&draft("2024-12-31", 1.0, "Food", "")).unwrap();
        let a = repo.create(&draft("2025-01-01", 2.0, "Food", "")).unwrap();
        let b = repo.create(&draft("2025-01-03", 3.0, "Food", "")).unwrap();
        repo.create(&draft("2025-01-04", 4.0, "Food", "")).unwrap();
        let c = repo.create(&draft("2025-01-02", 5.0, "Food", "")).unwrap();

        let in_range = repo
            .filter_by_date(date("2025-01-01"), date("2025-01-03"))
            .unwrap();
        assert_eq!(in_range, vec![a, b, c]);
    }

    #[test]
    fn test_filter_by_date_reversed_range_is_empty() {
        let repo = create_test_repo();
        repo.create(&draft("2025-01-02", 1.0, "Food", "")).unwrap();

        let result = repo
            .filter_by_date(date("2025-01-03"), date("2025-01-01"))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let conn = database::open_in_memory().unwrap();
        conn.execute(
            "INSERT INTO expenses (date, amount, category, description) VALUES ('2025-01-01', 5.0, 'Food', NULL)",
            [],
        )
        .unwrap();
        let repo = ExpenseRepository::new(conn);

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "");
    }
}
