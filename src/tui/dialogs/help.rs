//! Help dialog
//!
//! Shows the keyboard shortcuts for each panel

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, _app: &mut App) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys (outside text fields)"),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("g", "Spending chart"),
        key_line("x", "Export to CSV"),
        key_line("Tab", "Next field / panel"),
        key_line("Shift+Tab", "Previous field / panel"),
        key_line("Ctrl+A", "Add expense from form"),
        key_line("Ctrl+U", "Update selected expense"),
        key_line("Ctrl+D", "Delete selected expense"),
        key_line("Ctrl+L", "Clear form"),
        Line::from(""),
    ];

    lines.push(section("Form"));
    lines.push(key_line("←/→", "Cycle category suggestions"));
    lines.push(key_line("Esc", "Focus the table"));
    lines.push(Line::from(""));

    lines.push(section("Table"));
    lines.push(key_line("j/k", "Move cursor down/up"));
    lines.push(key_line("Home/End", "First/last row"));
    lines.push(key_line("Enter", "Select row into the form"));
    lines.push(key_line("d", "Delete row under cursor"));
    lines.push(key_line("c", "Clear form and selection"));
    lines.push(key_line("s", "Cycle sort column"));
    lines.push(key_line("r", "Reverse sort direction"));
    lines.push(Line::from(""));

    lines.push(section("Filters"));
    lines.push(key_line("←/→", "Change category filter"));
    lines.push(key_line("Enter", "Apply date range"));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
