//! Filters panel
//!
//! Category selector and date-range inputs that choose which records the
//! table shows.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{CategoryFilter, ALL_CATEGORIES};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::{TextInput, LABEL_WIDTH};

/// Which filter control is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Category,
    From,
    To,
}

impl FilterField {
    /// Get the next field, or `None` after the last one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Category => Some(Self::From),
            Self::From => Some(Self::To),
            Self::To => None,
        }
    }

    /// Get the previous field, or `None` before the first one
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Category => None,
            Self::From => Some(Self::Category),
            Self::To => Some(Self::From),
        }
    }
}

/// State for the filters panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub focused_field: FilterField,
    /// Index into `All` followed by the category suggestions
    pub category_index: usize,
    pub from_input: TextInput,
    pub to_input: TextInput,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Create the filter state with `All` selected and empty dates
    pub fn new() -> Self {
        Self {
            focused_field: FilterField::Category,
            category_index: 0,
            from_input: TextInput::new().label("From").placeholder("YYYY-MM-DD"),
            to_input: TextInput::new().label("To").placeholder("YYYY-MM-DD"),
        }
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: FilterField) {
        self.focused_field = field;
        self.from_input.focused = field == FilterField::From;
        self.to_input.focused = field == FilterField::To;
    }

    /// Remove focus highlighting from every field
    pub fn blur(&mut self) {
        self.from_input.focused = false;
        self.to_input.focused = false;
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

    /// Get the focused date input, if a date field has focus
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FilterField::Category => None,
            FilterField::From => Some(&mut self.from_input),
            FilterField::To => Some(&mut self.to_input),
        }
    }

    /// Step the category selector through `All` and the suggestions
    pub fn cycle_category(&mut self, suggestions: &[String], forward: bool) {
        let len = suggestions.len() + 1;
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
    }

    /// Label of the selected category option
    pub fn category_label<'s>(&self, suggestions: &'s [String]) -> &'s str {
        match self.category_index {
            0 => ALL_CATEGORIES,
            i => suggestions
                .get(i - 1)
                .map(String::as_str)
                .unwrap_or(ALL_CATEGORIES),
        }
    }

    /// The selected category filter
    pub fn category_filter(&self, suggestions: &[String]) -> CategoryFilter {
        CategoryFilter::from_label(self.category_label(suggestions))
    }

    /// Select `All` without touching the date inputs
    pub fn reset_category(&mut self) {
        self.category_index = 0;
    }
}

/// Render the filters panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Filters;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // From
            Constraint::Length(1), // To
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(inner);

    let filters = &app.filters;
    let category_focused = is_focused && filters.focused_field == FilterField::Category;
    let label_style = if category_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let category_line = Line::from(vec![
        Span::styled(
            format!("{:>width$}: ", "Category", width = LABEL_WIDTH),
            label_style,
        ),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            filters.category_label(&app.settings.categories).to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[0]);

    frame.render_widget(&filters.from_input, chunks[2]);
    frame.render_widget(&filters.to_input, chunks[3]);

    let hint = Paragraph::new("Enter on a date applies the range")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[4]);
}
