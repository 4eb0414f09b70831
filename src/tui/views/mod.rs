//! TUI Views module
//!
//! Contains the expense form, the filters panel, the expense table and the
//! status bar.

pub mod form;
pub mod sidebar;
pub mod status_bar;
pub mod table;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{AppLayout, SidebarLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());
    let sidebar = SidebarLayout::new(layout.sidebar);

    form::render(frame, app, sidebar.form);
    sidebar::render(frame, app, sidebar.filters);
    table::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let label = app
                .rows
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.label())
                .unwrap_or_else(|| format!("#{}", id));
            let message = format!("Delete selected expense?\n{}", label);
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::Chart => {
            dialogs::chart::render(frame, app);
        }
        ActiveDialog::Export => {
            dialogs::export::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}
