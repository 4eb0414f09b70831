//! Expense form panel
//!
//! Date, amount, category and description fields used for add, update and
//! delete. The category field cycles through the configured suggestions but
//! keeps whatever label a selected record carries.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Expense, ExpenseDraft, ValidationError, DATE_FORMAT};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::{TextInput, LABEL_WIDTH};

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Amount,
    Category,
    Description,
}

impl FormField {
    /// Get the next field, or `None` after the last one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Date => Some(Self::Amount),
            Self::Amount => Some(Self::Category),
            Self::Category => Some(Self::Description),
            Self::Description => None,
        }
    }

    /// Get the previous field, or `None` before the first one
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Date => None,
            Self::Amount => Some(Self::Date),
            Self::Category => Some(Self::Amount),
            Self::Description => Some(Self::Category),
        }
    }
}

/// State for the expense form
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: FormField,
    pub date_input: TextInput,
    pub amount_input: TextInput,
    /// Category label; free-form, cycled through suggestions
    pub category: String,
    pub description_input: TextInput,
}

impl ExpenseFormState {
    /// Create an empty form dated `today` with `category` preselected
    pub fn new(today: NaiveDate, category: &str) -> Self {
        let mut state = Self {
            focused_field: FormField::Date,
            date_input: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category: String::new(),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional note"),
        };
        state.clear(today, category);
        state
    }

    /// Reset every field: date to `today`, category to `category`, the rest empty
    pub fn clear(&mut self, today: NaiveDate, category: &str) {
        self.date_input
            .set_content(today.format(DATE_FORMAT).to_string());
        self.amount_input.clear();
        self.category = category.to_string();
        self.description_input.clear();
        self.set_focus(FormField::Date);
    }

    /// Pre-fill the form from a stored record
    pub fn fill_from(&mut self, expense: &Expense) {
        self.date_input.set_content(expense.date_string());
        self.amount_input.set_content(expense.amount.to_string());
        self.category = expense.category.clone();
        self.description_input.set_content(expense.description.clone());
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.date_input.focused = field == FormField::Date;
        self.amount_input.focused = field == FormField::Amount;
        self.description_input.focused = field == FormField::Description;
    }

    /// Remove focus highlighting from every field
    pub fn blur(&mut self) {
        self.date_input.focused = false;
        self.amount_input.focused = false;
        self.description_input.focused = false;
    }

    /// Move to the next field; returns false when already on the last one
    pub fn next_field(&mut self) -> bool {
        match self.focused_field.next() {
            Some(field) => {
                self.set_focus(field);
                true
            }
            None => false,
        }
    }

    /// Move to the previous field; returns false when already on the first one
    pub fn prev_field(&mut self) -> bool {
        match self.focused_field.prev() {
            Some(field) => {
                self.set_focus(field);
                true
            }
            None => false,
        }
    }

    /// Get the focused text input; the category selector has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Date => Some(&mut self.date_input),
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Category => None,
            FormField::Description => Some(&mut self.description_input),
        }
    }

    /// Step the category through `suggestions`
    ///
    /// A label that is not a suggestion (e.g. from a selected record) moves
    /// to the first suggestion going forward and to the last going back.
    pub fn cycle_category(&mut self, suggestions: &[String], forward: bool) {
        if suggestions.is_empty() {
            return;
        }

        let len = suggestions.len();
        let next = match suggestions.iter().position(|c| *c == self.category) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.category = suggestions[next].clone();
    }

    /// Validate the fields and build a draft
    pub fn to_draft(&self) -> Result<ExpenseDraft, ValidationError> {
        ExpenseDraft::parse(
            self.date_input.value(),
            self.amount_input.value(),
            &self.category,
            self.description_input.value(),
        )
    }
}

/// Render the expense form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Form;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let title = match app.selected {
        Some(id) => format!(" Expense #{} ", id),
        None => " New Expense ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;
    frame.render_widget(&form.date_input, chunks[0]);
    frame.render_widget(&form.amount_input, chunks[1]);
    render_category(
        frame,
        chunks[2],
        &form.category,
        is_focused && form.focused_field == FormField::Category,
    );
    frame.render_widget(&form.description_input, chunks[3]);

    let hints = Line::from(vec![
        Span::styled("^A", Style::default().fg(Color::Yellow)),
        Span::raw(" Add  "),
        Span::styled("^U", Style::default().fg(Color::Yellow)),
        Span::raw(" Update  "),
        Span::styled("^D", Style::default().fg(Color::Yellow)),
        Span::raw(" Delete  "),
        Span::styled("^L", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Render the category selector line
fn render_category(frame: &mut Frame, area: Rect, category: &str, focused: bool) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(
        format!("{:>width$}: ", "Category", width = LABEL_WIDTH),
        label_style,
    )];

    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            category.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(
            category.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, ExpenseId};

    fn today() -> NaiveDate {
        parse_date("2025-02-10").unwrap()
    }

    fn suggestions() -> Vec<String> {
        ["Food", "Transport", "Bills"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ExpenseFormState::new(today(), "Food");

        assert_eq!(form.date_input.value(), "2025-02-10");
        assert_eq!(form.amount_input.value(), "");
        assert_eq!(form.category, "Food");
        assert_eq!(form.description_input.value(), "");
        assert_eq!(form.focused_field, FormField::Date);
        assert!(form.date_input.focused);
    }

    #[test]
    fn test_field_navigation_stops_at_ends() {
        let mut form = ExpenseFormState::new(today(), "Food");

        assert!(!form.prev_field());
        assert!(form.next_field());
        assert!(form.next_field());
        assert_eq!(form.focused_field, FormField::Category);
        assert!(form.focused_input().is_none());
        assert!(form.next_field());
        assert!(!form.next_field());
        assert_eq!(form.focused_field, FormField::Description);
        assert!(form.description_input.focused);
        assert!(!form.date_input.focused);
    }

    #[test]
    fn test_cycle_category() {
        let mut form = ExpenseFormState::new(today(), "Food");

        form.cycle_category(&suggestions(), true);
        assert_eq!(form.category, "Transport");
        form.cycle_category(&suggestions(), false);
        form.cycle_category(&suggestions(), false);
        assert_eq!(form.category, "Bills");

        form.category = "Travel".to_string();
        form.cycle_category(&suggestions(), true);
        assert_eq!(form.category, "Food");
    }

    #[test]
    fn test_fill_and_draft() {
        let expense = ExpenseDraft::new(parse_date("2025-01-02").unwrap(), 850.0, "Travel", "Auto fare")
            .into_expense(ExpenseId::new(2));
        let mut form = ExpenseFormState::new(today(), "Food");
        form.fill_from(&expense);

        assert_eq!(form.amount_input.value(), "850");
        assert_eq!(form.to_draft().unwrap(), expense.to_draft());
    }

    #[test]
    fn test_invalid_amount_rejected() {
        let mut form = ExpenseFormState::new(today(), "Food");
        form.amount_input.set_content("abc");

        assert_eq!(form.to_draft().unwrap_err(), ValidationError::InvalidAmount);
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut form = ExpenseFormState::new(today(), "Food");
        form.date_input.set_content("2024-01-01");
        form.amount_input.set_content("5");
        form.category = "Bills".into();
        form.description_input.set_content("x");
        form.set_focus(FormField::Description);

        form.clear(today(), "Food");
        assert_eq!(form, ExpenseFormState::new(today(), "Food"));
    }
}
