//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod log;

pub use expense::{handle_chart_command, handle_list_command, handle_seed_command};
pub use export::handle_export_command;
pub use log::handle_log_command;

use clap::Args;

use crate::error::ExpenseResult;
use crate::models::{parse_date_range, CategoryFilter};
use crate::services::ExpenseFilter;

/// Record selection shared by `list`, `export` and `chart`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only records with exactly this category ("All" for every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Start of an inclusive date range (YYYY-MM-DD); requires --to
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// End of an inclusive date range (YYYY-MM-DD); requires --from
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Validate the arguments and build a service filter
    pub fn to_filter(&self) -> ExpenseResult<ExpenseFilter> {
        let mut filter = ExpenseFilter::new();

        if let Some(category) = &self.category {
            filter = filter.category(CategoryFilter::from_label(category));
        }

        if self.from.is_some() || self.to.is_some() {
            let (start, end) = parse_date_range(
                self.from.as_deref().unwrap_or_default(),
                self.to.as_deref().unwrap_or_default(),
            )?;
            filter = filter.date_range(start, end);
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    #[test]
    fn test_empty_args_select_everything() {
        let filter = FilterArgs::default().to_filter().unwrap();
        assert_eq!(filter, ExpenseFilter::new());
    }

    #[test]
    fn test_category_and_range() {
        let args = FilterArgs {
            category: Some("Food".into()),
            from: Some("2025-01-01".into()),
            to: Some("2025-01-03".into()),
        };

        let filter = args.to_filter().unwrap();
        assert_eq!(filter.category, CategoryFilter::Only("Food".into()));
        assert_eq!(
            filter.date_range,
            Some((
                parse_date("2025-01-01").unwrap(),
                parse_date("2025-01-03").unwrap()
            ))
        );
    }

    #[test]
    fn test_all_category_label() {
        let args = FilterArgs {
            category: Some("All".into()),
            ..Default::default()
        };
        assert_eq!(args.to_filter().unwrap().category, CategoryFilter::All);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let args = FilterArgs {
            from: Some("2025-13-01".into()),
            to: Some("2025-01-03".into()),
            ..Default::default()
        };
        let err = args.to_filter().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Dates must be YYYY-MM-DD.");
    }
}
