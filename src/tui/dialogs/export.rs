//! Export dialog
//!
//! Asks for the CSV file to write every record to.

use std::path::PathBuf;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// File name offered when the dialog opens
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// State for the export dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDialogState {
    pub path_input: TextInput,
}

impl Default for ExportDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportDialogState {
    /// Create the dialog state pre-filled with the default file name
    pub fn new() -> Self {
        let mut path_input = TextInput::new()
            .label("File")
            .placeholder(DEFAULT_EXPORT_FILE)
            .content(DEFAULT_EXPORT_FILE);
        path_input.focused = true;
        Self { path_input }
    }

    /// Chosen path, or `None` when the field is blank
    pub fn path(&self) -> Option<PathBuf> {
        let value = self.path_input.value().trim();
        if value.is_empty() {
            None
        } else {
            Some(PathBuf::from(value))
        }
    }
}

/// Render the export dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(60, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Export to CSV ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Path
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&app.export_dialog.path_input, chunks[1]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Export all records  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let state = ExportDialogState::new();
        assert_eq!(state.path(), Some(PathBuf::from("expenses.csv")));
        assert!(state.path_input.focused);
    }

    #[test]
    fn test_blank_path_is_none() {
        let mut state = ExportDialogState::new();
        state.path_input.set_content("   ");
        assert_eq!(state.path(), None);
    }
}
