//! Expense table view
//!
//! Shows the loaded rows with the sort indicator in the header and a marker
//! on the record the form is editing.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::CategoryFilter;
use crate::tui::app::{App, FocusedPanel, SortColumn};

const COLUMNS: [SortColumn; 5] = [
    SortColumn::Id,
    SortColumn::Date,
    SortColumn::Amount,
    SortColumn::Category,
    SortColumn::Description,
];

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(title(app))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.rows.is_empty() {
        let text = Paragraph::new("No expenses. Fill in the form and press Ctrl+A to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(6),  // ID
        Constraint::Length(12), // Date
        Constraint::Length(12), // Amount
        Constraint::Length(15), // Category
        Constraint::Min(10),    // Description
    ];

    let header = Row::new(COLUMNS.iter().map(|&column| {
        let mut label = column.label().to_string();
        if column == app.sort.column {
            label.push_str(if app.sort.descending { " ▼" } else { " ▲" });
        }
        Cell::from(label).style(Style::default().add_modifier(Modifier::BOLD))
    }));

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|expense| {
            let marker = if app.selected == Some(expense.id) { "●" } else { " " };
            let amount_style = if expense.amount < 0.0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };

            Row::new(vec![
                Cell::from(format!("{}{:>4}", marker, expense.id)),
                Cell::from(expense.date_string()),
                Cell::from(format!("{:>10.2}", expense.amount)).style(amount_style),
                Cell::from(truncate_string(&expense.category, 15)),
                Cell::from(truncate_string(&expense.description, 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.table_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Table title naming the active filter
fn title(app: &App) -> String {
    let filter = &app.active_filter;
    match (&filter.category, filter.date_range) {
        (_, Some((start, end))) => format!(" Expenses {} to {} ", start, end),
        (CategoryFilter::Only(category), None) => format!(" Expenses: {} ", category),
        (CategoryFilter::All, None) => " Expenses ".to_string(),
    }
}

/// Truncate a string to at most `max_len` characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Food", 15), "Food");
        assert_eq!(truncate_string("Entertainment", 6), "Enter…");
        assert_eq!(truncate_string("₹₹₹₹", 3), "₹₹…");
    }
}
