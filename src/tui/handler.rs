//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the active
//! dialog and the focused panel.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;
use super::views::form::FormField;
use super::views::sidebar::FilterField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Release/repeat events are reported on some platforms
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_key(app, key);
    }

    match key.code {
        KeyCode::Tab => {
            focus_next(app);
            return Ok(());
        }
        KeyCode::BackTab => {
            focus_prev(app);
            return Ok(());
        }
        _ => {}
    }

    // Global keys, unless they are being typed into a field
    if !app.is_editing_text() {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.quit();
                return Ok(());
            }
            KeyCode::Char('?') => {
                app.open_dialog(ActiveDialog::Help);
                return Ok(());
            }
            KeyCode::Char('g') => {
                let result = app.open_chart();
                app.report(result);
                return Ok(());
            }
            KeyCode::Char('x') => {
                app.open_export();
                return Ok(());
            }
            _ => {}
        }
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::Table => handle_table_key(app, key),
        FocusedPanel::Filters => handle_filters_key(app, key),
    }
}

/// Handle Ctrl shortcuts (work in every panel)
fn handle_control_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let result = match key.code {
        KeyCode::Char('c') => {
            app.quit();
            Ok(())
        }
        KeyCode::Char('a') => app.add_expense(),
        KeyCode::Char('u') => app.update_expense(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('l') => {
            app.clear_form();
            Ok(())
        }
        _ => Ok(()),
    };

    app.report(result);
    Ok(())
}

/// Move to the next field, continuing into the next panel after the last one
fn focus_next(app: &mut App) {
    match app.focused_panel {
        FocusedPanel::Form => {
            if !app.form.next_field() {
                app.focus(FocusedPanel::Table);
            }
        }
        FocusedPanel::Table => {
            app.filters.focused_field = FilterField::Category;
            app.focus(FocusedPanel::Filters);
        }
        FocusedPanel::Filters => {
            if !app.filters.next_field() {
                app.form.focused_field = FormField::Date;
                app.focus(FocusedPanel::Form);
            }
        }
    }
}

/// Move to the previous field, continuing into the previous panel
fn focus_prev(app: &mut App) {
    match app.focused_panel {
        FocusedPanel::Form => {
            if !app.form.prev_field() {
                app.filters.focused_field = FilterField::To;
                app.focus(FocusedPanel::Filters);
            }
        }
        FocusedPanel::Table => {
            app.form.focused_field = FormField::Description;
            app.focus(FocusedPanel::Form);
        }
        FocusedPanel::Filters => {
            if !app.filters.prev_field() {
                app.focus(FocusedPanel::Table);
            }
        }
    }
}

/// Handle keys when the form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.focus(FocusedPanel::Table),
        KeyCode::Enter => {
            app.form.next_field();
        }
        KeyCode::Left | KeyCode::Right if app.form.focused_field == FormField::Category => {
            let categories = app.categories();
            app.form
                .cycle_category(categories, key.code == KeyCode::Right);
        }
        _ => {
            if let Some(input) = app.form.focused_input() {
                input.handle_key(key);
            }
        }
    }
    Ok(())
}

/// Handle keys when the table is focused
fn handle_table_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Home => app.move_top(),
        KeyCode::End => app.move_bottom(),

        // Select row into the form
        KeyCode::Enter => {
            if app.select_current_row() {
                app.form.focused_field = FormField::Date;
                app.focus(FocusedPanel::Form);
            }
        }

        KeyCode::Char('d') => {
            let result = app.request_delete_current_row();
            app.report(result);
        }
        KeyCode::Char('c') => app.clear_form(),
        KeyCode::Char('s') => app.cycle_sort_column(),
        KeyCode::Char('r') => app.reverse_sort(),

        _ => {}
    }
    Ok(())
}

/// Handle keys when the filters panel is focused
fn handle_filters_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let categories = app.categories();
    let result = match (app.filters.focused_field, key.code) {
        (_, KeyCode::Esc) => {
            app.focus(FocusedPanel::Table);
            Ok(())
        }
        (FilterField::Category, KeyCode::Left) => {
            app.filters.cycle_category(categories, false);
            app.apply_category_filter()
        }
        (FilterField::Category, KeyCode::Right) => {
            app.filters.cycle_category(categories, true);
            app.apply_category_filter()
        }
        (FilterField::Category, KeyCode::Enter) => app.apply_category_filter(),
        (_, KeyCode::Enter) => app.apply_date_filter(),
        _ => {
            if let Some(input) = app.filters.focused_input() {
                input.handle_key(key);
            }
            Ok(())
        }
    };

    app.report(result);
    Ok(())
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help | ActiveDialog::Chart => app.close_dialog(),
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let result = app.confirm_delete(id);
                app.report(result);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Export => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Enter => {
                let result = app.export_csv();
                app.report(result);
            }
            _ => {
                app.export_dialog.path_input.handle_key(key);
            }
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::models::ExpenseId;
    use crate::storage::{seed_sample_expenses, Storage};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        seed_sample_expenses(&storage).unwrap();
        (temp_dir, storage)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tab_walks_fields_then_panels() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.form.focused_field, FormField::Description);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_panel, FocusedPanel::Table);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_panel, FocusedPanel::Filters);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_panel, FocusedPanel::Table);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_panel, FocusedPanel::Form);
        assert_eq!(app.form.focused_field, FormField::Description);
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Tab); // Amount
        press(&mut app, KeyCode::Tab); // Category
        press(&mut app, KeyCode::Tab); // Description
        type_text(&mut app, "quiz");

        assert!(!app.should_quit);
        assert_eq!(app.form.description_input.value(), "quiz");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_through_keys() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload_all().unwrap();

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "75");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right); // Transport
        ctrl(&mut app, 'a');

        assert_eq!(storage.expenses.count().unwrap(), 5);
        let added = app.rows.last().unwrap();
        assert_eq!(added.amount, 75.0);
        assert_eq!(added.category, "Transport");
    }

    #[test]
    fn test_table_select_and_delete_confirm() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload_all().unwrap();
        app.focus(FocusedPanel::Table);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete(ExpenseId::new(2)));

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.has_dialog());
        assert_eq!(storage.expenses.count().unwrap(), 4);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(storage.expenses.count().unwrap(), 3);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_enter_selects_row_into_form() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload_all().unwrap();
        app.focus(FocusedPanel::Table);

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.selected, Some(ExpenseId::new(4)));
        assert_eq!(app.focused_panel, FocusedPanel::Form);
        assert_eq!(app.form.description_input.value(), "Snacks");
    }

    #[test]
    fn test_ctrl_delete_without_selection() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        ctrl(&mut app, 'd');
        assert!(!app.has_dialog());
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Select a record to delete."
        );
    }

    #[test]
    fn test_filter_category_with_arrows() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.reload_all().unwrap();
        app.focus(FocusedPanel::Filters);

        press(&mut app, KeyCode::Right); // Food
        assert_eq!(app.rows.len(), 2);
        press(&mut app, KeyCode::Left); // All
        assert_eq!(app.rows.len(), 4);
    }

    #[test]
    fn test_date_filter_with_enter() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.focus(FocusedPanel::Filters);

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2025-01-03");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2025-01-04");
        press(&mut app, KeyCode::Enter);

        let ids: Vec<i64> = app.rows.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_help_and_chart_close_on_any_key() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.focus(FocusedPanel::Table);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('z'));
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.active_dialog, ActiveDialog::Chart);
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_export_dialog_escape_cancels() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.focus(FocusedPanel::Table);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.active_dialog, ActiveDialog::Export);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.export_dialog.path_input.value(), "expenses.cs");
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_key_release_ignored() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.focus(FocusedPanel::Table);

        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(!app.should_quit);
    }
}
