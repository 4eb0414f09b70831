//! Expense service
//!
//! Business logic on top of the expense repository: audited mutations,
//! filtered listings and totals.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{CategoryFilter, Expense, ExpenseDraft, ExpenseId};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for selecting which expenses to list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Category restriction (`All` means none)
    pub category: CategoryFilter,
    /// Inclusive date range
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }
}

/// Running total and record count for a set of expenses
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpenseSummary {
    pub total: f64,
    pub count: usize,
}

impl ExpenseSummary {
    /// Summarize the given expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self {
            total: expenses.iter().map(|e| e.amount).sum(),
            count: expenses.len(),
        }
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense
    pub fn add(&self, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
        let expense = self.storage.expenses.create(draft)?;

        self.storage.log_create(&expense)?;

        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Replace all fields of an existing expense
    ///
    /// Returns the updated record, or `None` when the id no longer exists
    /// (nothing is changed in that case).
    pub fn update(&self, id: ExpenseId, draft: &ExpenseDraft) -> ExpenseResult<Option<Expense>> {
        let Some(before) = self.storage.expenses.update(id, draft)? else {
            return Ok(None);
        };

        let after = draft.clone().into_expense(id);
        self.storage.log_update(&before, &after)?;

        Ok(Some(after))
    }

    /// Delete an expense
    ///
    /// Returns the removed record, or `None` when the id does not exist.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let removed = self.storage.expenses.delete(id)?;

        if let Some(expense) = &removed {
            self.storage.log_delete(expense)?;
        }

        Ok(removed)
    }

    /// List expenses matching the filter, in ascending id order
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = match (filter.date_range, &filter.category) {
            (Some((start, end)), _) => self.storage.expenses.filter_by_date(start, end)?,
            (None, CategoryFilter::Only(category)) => {
                self.storage.expenses.filter_by_category(category)?
            }
            (None, CategoryFilter::All) => self.storage.expenses.list_all()?,
        };

        if filter.date_range.is_some() {
            if let CategoryFilter::Only(category) = &filter.category {
                expenses.retain(|e| &e.category == category);
            }
        }

        Ok(expenses)
    }

    /// List every expense
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.list_all()
    }

    /// Total number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }
}
