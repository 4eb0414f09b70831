//! Reports module for the expense tracker
//!
//! Aggregations over expense records used by the chart views.

pub mod category_breakdown;

pub use category_breakdown::{CategoryBreakdown, CategorySlice};
