//! Dialog modules for the TUI
//!
//! Contains modal dialogs: delete confirmation, help, spending chart and
//! CSV export.

pub mod chart;
pub mod confirm;
pub mod export;
pub mod help;
