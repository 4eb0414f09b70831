//! Terminal User Interface module
//!
//! This module provides the interactive expense tracker using ratatui: an
//! entry form, category and date filters, a sortable table of records, and
//! dialogs for the spending chart, CSV export and delete confirmation.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
