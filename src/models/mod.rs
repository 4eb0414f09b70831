//! Core data models for the expense tracker
//!
//! This module contains the expense record, its validated draft form, and
//! the category helpers used by the form and the filters.

pub mod category;
pub mod expense;

pub use category::{CategoryFilter, ALL_CATEGORIES, DEFAULT_CATEGORIES};
pub use expense::{
    parse_amount, parse_date, parse_date_range, Expense, ExpenseDraft, ExpenseId,
    ValidationError, DATE_FORMAT,
};
