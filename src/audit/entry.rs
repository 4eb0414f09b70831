//! Audit entry data structures
//!
//! Defines the operations that are audited and the format of a single
//! audit log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was created
    Create,
    /// Expense was updated
    Update,
    /// Expense was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on an expense with optional before/after snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected expense
    pub expense_id: ExpenseId,

    /// Short description of the expense (date, category, amount)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Snapshot before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly created expense
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            expense_id: expense.id,
            label: Some(expense.label()),
            before: None,
            after: serde_json::to_value(expense).ok(),
            diff_summary: None,
        }
    }

    /// Entry for an in-place update, with a field diff
    pub fn update(before: &Expense, after: &Expense) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            expense_id: after.id,
            label: Some(after.label()),
            before: before_json,
            after: after_json,
            diff_summary,
        }
    }

    /// Entry for a deleted expense
    pub fn delete(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            expense_id: expense.id,
            label: Some(expense.label()),
            before: serde_json::to_value(expense).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Expense #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(label) = &self.label {
            output.push_str(&format!(" ({})", label));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
