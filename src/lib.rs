//! Expense Tracker - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for a single-user expense
//! tracker: dated, categorized amounts stored in a local SQLite database,
//! filtered views with running totals, CSV export and a per-category
//! spending chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, drafts, category filters)
//! - `storage`: SQLite storage layer and first-run seeding
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: CSV export
//! - `reports`: Category breakdown for the spending chart
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expenses::config::{paths::ExpensePaths, settings::Settings};
//! use expenses::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
