//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer: audited mutations, filtered
//! listings and totals.

pub mod expense;

pub use expense::{ExpenseFilter, ExpenseService, ExpenseSummary};
