//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the form, the filters, the rows shown in the table and the status
//! notifications. Every action reloads rows from storage so the table always
//! mirrors the database.

use std::path::Path;
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::export::export_expenses_to_path;
use crate::models::{parse_date_range, Expense, ExpenseId, ValidationError, DEFAULT_CATEGORIES};
use crate::reports::CategoryBreakdown;
use crate::services::{ExpenseFilter, ExpenseService, ExpenseSummary};
use crate::storage::Storage;

use super::dialogs::export::ExportDialogState;
use super::views::form::ExpenseFormState;
use super::views::sidebar::FilterState;
use super::widgets::NotificationQueue;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    Table,
    Filters,
}

impl FocusedPanel {
    /// Next panel in Tab order
    pub fn next(self) -> Self {
        match self {
            Self::Form => Self::Table,
            Self::Table => Self::Filters,
            Self::Filters => Self::Form,
        }
    }

    /// Previous panel in Tab order
    pub fn prev(self) -> Self {
        match self {
            Self::Form => Self::Filters,
            Self::Table => Self::Form,
            Self::Filters => Self::Table,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(ExpenseId),
    Chart,
    Export,
}

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Id,
    Date,
    Amount,
    Category,
    Description,
}

impl SortColumn {
    /// Next column in the `s` cycle
    pub fn next(self) -> Self {
        match self {
            Self::Id => Self::Date,
            Self::Date => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Id,
        }
    }

    /// Header label
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Description => "Description",
        }
    }
}

/// Sort column and direction of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSort {
    pub column: SortColumn,
    pub descending: bool,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Expense form state
    pub form: ExpenseFormState,

    /// Filters panel state
    pub filters: FilterState,

    /// Filter the table rows were loaded with
    pub active_filter: ExpenseFilter,

    /// Record the form is editing (if any)
    pub selected: Option<ExpenseId>,

    /// Rows shown in the table, in display order
    pub rows: Vec<Expense>,

    /// Cursor position in the table
    pub table_index: usize,

    /// Table sort order
    pub sort: TableSort,

    /// Status notifications
    pub notifications: NotificationQueue,

    /// Export dialog state
    pub export_dialog: ExportDialogState,

    /// Breakdown shown by the chart dialog
    pub breakdown: CategoryBreakdown,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty form and no rows loaded
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            form: ExpenseFormState::new(today(), DEFAULT_CATEGORIES[0]),
            filters: FilterState::new(),
            active_filter: ExpenseFilter::new(),
            selected: None,
            rows: Vec::new(),
            table_index: 0,
            sort: TableSort::default(),
            notifications: NotificationQueue::new(Duration::from_secs(
                settings.status_timeout_secs,
            )),
            export_dialog: ExportDialogState::new(),
            breakdown: CategoryBreakdown::default(),
        };
        app.clear_form();
        app
    }

    fn service(&self) -> ExpenseService<'a> {
        ExpenseService::new(self.storage)
    }

    /// Category suggestions offered by the form and the filter
    pub fn categories(&self) -> &'a [String] {
        &self.settings.categories
    }

    /// Category the form resets to
    pub fn default_category(&self) -> &'a str {
        self.settings
            .categories
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORIES[0])
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Report a failed action in the status area
    pub fn report(&mut self, result: ExpenseResult<()>) {
        if let Err(e) = result {
            self.notifications.error(e.to_string());
        }
    }

    // --- Focus ---

    /// Focus a panel, moving field highlighting with it
    pub fn focus(&mut self, panel: FocusedPanel) {
        self.focused_panel = panel;
        match panel {
            FocusedPanel::Form => {
                self.filters.blur();
                self.form.set_focus(self.form.focused_field);
            }
            FocusedPanel::Filters => {
                self.form.blur();
                self.filters.set_focus(self.filters.focused_field);
            }
            FocusedPanel::Table => {
                self.form.blur();
                self.filters.blur();
            }
        }
    }

    /// Whether keystrokes currently go into a text field
    pub fn is_editing_text(&self) -> bool {
        use super::views::form::FormField;
        use super::views::sidebar::FilterField;

        match self.focused_panel {
            FocusedPanel::Form => self.form.focused_field != FormField::Category,
            FocusedPanel::Filters => self.filters.focused_field != FilterField::Category,
            FocusedPanel::Table => false,
        }
    }

    // --- Dialogs ---

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    // --- Loading ---

    /// Load the rows matching `filter` into the table
    pub fn load(&mut self, filter: ExpenseFilter) -> ExpenseResult<()> {
        self.rows = self.service().list(&filter)?;
        self.active_filter = filter;
        self.sort_rows();
        self.clamp_index();
        Ok(())
    }

    /// Reload every record and reset the category filter to `All`
    pub fn reload_all(&mut self) -> ExpenseResult<()> {
        self.filters.reset_category();
        self.load(ExpenseFilter::new())
    }

    /// Total and count of the rows on screen
    pub fn summary(&self) -> ExpenseSummary {
        ExpenseSummary::from_expenses(&self.rows)
    }

    /// Apply the category selected in the filters panel
    pub fn apply_category_filter(&mut self) -> ExpenseResult<()> {
        let category = self.filters.category_filter(self.categories());
        self.load(ExpenseFilter::new().category(category))
    }

    /// Apply the date range typed in the filters panel
    pub fn apply_date_filter(&mut self) -> ExpenseResult<()> {
        let range = parse_date_range(
            self.filters.from_input.value(),
            self.filters.to_input.value(),
        );

        match range {
            Ok((start, end)) => {
                self.filters.reset_category();
                self.load(ExpenseFilter::new().date_range(start, end))
            }
            Err(e) => {
                self.notifications.error(e.to_string());
                Ok(())
            }
        }
    }

    // --- Table ---

    fn clamp_index(&mut self) {
        if self.rows.is_empty() {
            self.table_index = 0;
        } else if self.table_index >= self.rows.len() {
            self.table_index = self.rows.len() - 1;
        }
    }

    fn sort_rows(&mut self) {
        let sort = self.sort;
        self.rows.sort_by(|a, b| {
            let ordering = match sort.column {
                SortColumn::Id => a.id.cmp(&b.id),
                SortColumn::Date => a.date.cmp(&b.date),
                SortColumn::Amount => a.amount.total_cmp(&b.amount),
                SortColumn::Category => a.category.cmp(&b.category),
                SortColumn::Description => a.description.cmp(&b.description),
            }
            .then_with(|| a.id.cmp(&b.id));

            if sort.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    /// Re-sort the rows, keeping the cursor on the same record
    fn resort(&mut self) {
        let current = self.current_row().map(|e| e.id);
        self.sort_rows();
        if let Some(id) = current {
            if let Some(index) = self.rows.iter().position(|e| e.id == id) {
                self.table_index = index;
            }
        }
    }

    /// Sort by the next column, ascending
    pub fn cycle_sort_column(&mut self) {
        self.sort.column = self.sort.column.next();
        self.sort.descending = false;
        self.resort();
    }

    /// Flip the sort direction
    pub fn reverse_sort(&mut self) {
        self.sort.descending = !self.sort.descending;
        self.resort();
    }

    /// Move the table cursor up
    pub fn move_up(&mut self) {
        self.table_index = self.table_index.saturating_sub(1);
    }

    /// Move the table cursor down
    pub fn move_down(&mut self) {
        if self.table_index + 1 < self.rows.len() {
            self.table_index += 1;
        }
    }

    /// Jump to the first row
    pub fn move_top(&mut self) {
        self.table_index = 0;
    }

    /// Jump to the last row
    pub fn move_bottom(&mut self) {
        self.table_index = self.rows.len().saturating_sub(1);
    }

    /// Row under the table cursor
    pub fn current_row(&self) -> Option<&Expense> {
        self.rows.get(self.table_index)
    }

    /// Select the row under the cursor and pre-fill the form from it
    pub fn select_current_row(&mut self) -> bool {
        let Some(expense) = self.rows.get(self.table_index).cloned() else {
            return false;
        };

        self.form.fill_from(&expense);
        self.selected = Some(expense.id);
        true
    }

    // --- Form actions ---

    /// Reset the form and drop the selection
    pub fn clear_form(&mut self) {
        let category = self.default_category();
        self.form.clear(today(), category);
        self.selected = None;
        if self.focused_panel != FocusedPanel::Form {
            self.form.blur();
        }
    }

    /// Add the form contents as a new expense
    pub fn add_expense(&mut self) -> ExpenseResult<()> {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(e) => return self.reject(e),
        };

        self.service().add(&draft)?;
        self.reload_all()?;
        self.clear_form();
        self.notifications.success("Expense added successfully.");
        Ok(())
    }

    /// Replace the selected expense with the form contents
    ///
    /// The selection is kept; the form is cleared afterwards.
    pub fn update_expense(&mut self) -> ExpenseResult<()> {
        let Some(id) = self.selected else {
            return self.reject(ValidationError::NoSelection("update"));
        };

        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(e) => return self.reject(e),
        };

        let updated = self.service().update(id, &draft)?;
        self.reload_all()?;
        let category = self.default_category();
        self.form.clear(today(), category);

        if updated.is_some() {
            self.notifications.success("Expense updated.");
        } else {
            self.selected = None;
            self.notifications
                .error(format!("Expense #{} no longer exists.", id));
        }
        Ok(())
    }

    /// Ask for confirmation before deleting the selected expense
    pub fn request_delete(&mut self) -> ExpenseResult<()> {
        match self.selected {
            Some(id) => {
                self.open_dialog(ActiveDialog::ConfirmDelete(id));
                Ok(())
            }
            None => self.reject(ValidationError::NoSelection("delete")),
        }
    }

    /// Select the row under the cursor and ask to delete it
    pub fn request_delete_current_row(&mut self) -> ExpenseResult<()> {
        if !self.select_current_row() {
            return self.reject(ValidationError::NoSelection("delete"));
        }
        self.request_delete()
    }

    /// Delete an expense after confirmation
    pub fn confirm_delete(&mut self, id: ExpenseId) -> ExpenseResult<()> {
        self.close_dialog();
        self.service().delete(id)?;
        self.reload_all()?;
        self.clear_form();
        self.notifications.success("Expense deleted.");
        Ok(())
    }

    fn reject(&mut self, error: ValidationError) -> ExpenseResult<()> {
        self.notifications.error(error.to_string());
        Ok(())
    }

    // --- Chart & export ---

    /// Compute the category breakdown of every record and show the chart
    pub fn open_chart(&mut self) -> ExpenseResult<()> {
        let expenses = self.service().list_all()?;
        self.breakdown = CategoryBreakdown::from_expenses(&expenses);
        self.open_dialog(ActiveDialog::Chart);
        Ok(())
    }

    /// Show the export dialog with the default file name
    pub fn open_export(&mut self) {
        self.export_dialog = ExportDialogState::new();
        self.open_dialog(ActiveDialog::Export);
    }

    /// Export every record to the path in the export dialog
    ///
    /// An empty path cancels like Esc does.
    pub fn export_csv(&mut self) -> ExpenseResult<()> {
        self.close_dialog();

        let Some(path) = self.export_dialog.path() else {
            return Ok(());
        };

        self.export_to(&path)
    }

    fn export_to(&mut self, path: &Path) -> ExpenseResult<()> {
        let expenses = self.service().list_all()?;
        export_expenses_to_path(path, &expenses)?;
        self.notifications.success("Exported to CSV.");
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
