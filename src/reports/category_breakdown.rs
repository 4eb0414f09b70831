//! Category breakdown
//!
//! Groups expenses by category for the spending chart.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Width of the bar drawn for a 100% slice in terminal output
const BAR_WIDTH: usize = 40;

/// One category's share of spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// Category label
    pub category: String,
    /// Sum of amounts in this category
    pub total: f64,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

impl CategorySlice {
    /// Percentage with one decimal place, e.g. `"33.3%"`
    pub fn format_percentage(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Spending grouped by category, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    pub slices: Vec<CategorySlice>,
    pub total: f64,
}

impl CategoryBreakdown {
    /// Aggregate expenses by category
    ///
    /// Shares are computed on absolute totals so refunds and other negative
    /// amounts cannot produce negative slices. A zero grand total gives every
    /// slice 0%.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut slices: Vec<CategorySlice> = Vec::new();

        for expense in expenses {
            match slices.iter_mut().find(|s| s.category == expense.category) {
                Some(slice) => slice.total += expense.amount,
                None => slices.push(CategorySlice {
                    category: expense.category.clone(),
                    total: expense.amount,
                    percentage: 0.0,
                }),
            }
        }

        let total: f64 = slices.iter().map(|s| s.total).sum();
        let magnitude: f64 = slices.iter().map(|s| s.total.abs()).sum();

        if magnitude > 0.0 {
            for slice in &mut slices {
                slice.percentage = slice.total.abs() / magnitude * 100.0;
            }
        }

        Self { slices, total }
    }

    /// True when there is nothing to chart
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Get the slice for a category
    pub fn get(&self, category: &str) -> Option<&CategorySlice> {
        self.slices.iter().find(|s| s.category == category)
    }

    /// Format the breakdown as a text chart for terminal output
    pub fn format_terminal<W: Write>(&self, writer: &mut W, currency: &str) -> ExpenseResult<()> {
        if self.is_empty() {
            writeln!(writer, "No data to display")?;
            return Ok(());
        }

        let name_width = self
            .slices
            .iter()
            .map(|s| s.category.chars().count())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        writeln!(writer, "Spending by Category")?;
        writeln!(writer, "{}", "=".repeat(name_width + BAR_WIDTH + 26))?;

        for slice in &self.slices {
            let filled = ((slice.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
            writeln!(
                writer,
                "{:<name_width$}  {:>12}  {:>6}  {}",
                slice.category,
                format!("{}{:.2}", currency, slice.total),
                slice.format_percentage(),
                "#".repeat(filled.min(BAR_WIDTH)),
                name_width = name_width
            )?;
        }

        writeln!(writer, "{}", "-".repeat(name_width + BAR_WIDTH + 26))?;
        writeln!(
            writer,
            "{:<name_width$}  {:>12}",
            "Total",
            format!("{}{:.2}", currency, self.total),
            name_width = name_width
        )?;

        Ok(())
    }
}
