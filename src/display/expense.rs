//! Expense display formatting
//!
//! Plain-text tables of expense records for the CLI.

use crate::models::Expense;
use crate::services::ExpenseSummary;

const CATEGORY_WIDTH: usize = 14;
const DESCRIPTION_WIDTH: usize = 30;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{:>5}  {:10}  {:>12}  {}  {}",
        expense.id,
        expense.date_string(),
        format!("{}{:.2}", currency, expense.amount),
        pad(&expense.category, CATEGORY_WIDTH),
        truncate(&expense.description, DESCRIPTION_WIDTH)
    )
    .trim_end()
    .to_string()
}

/// Format a list of expenses as a table followed by the running total
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:10}  {:>12}  {}  {}\n",
        "ID",
        "Date",
        "Amount",
        pad("Category", CATEGORY_WIDTH),
        "Description"
    ));
    output.push_str(&"-".repeat(5 + 10 + 12 + CATEGORY_WIDTH + DESCRIPTION_WIDTH + 8));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&ExpenseSummary::from_expenses(expenses), currency));
    output.push('\n');

    output
}

/// Format the total and record count line shown under tables
pub fn format_summary(summary: &ExpenseSummary, currency: &str) -> String {
    format!(
        "Total: {}{:.2} · Records: {}",
        currency, summary.total, summary.count
    )
}

/// Left-align to `width` characters, truncating with "..." when longer
fn pad(s: &str, width: usize) -> String {
    format!("{:width$}", truncate(s, width), width = width)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
