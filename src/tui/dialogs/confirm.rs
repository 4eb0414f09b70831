//! Confirmation dialog
//!
//! Simple yes/no confirmation

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render a confirmation dialog; each line of `message` is shown on its own row
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(50, 8, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![Line::from("")];
    lines.extend(message.lines().map(|text| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::White),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Y]", Style::default().fg(Color::Green)),
        Span::raw(" Yes  "),
        Span::styled("[N]", Style::default().fg(Color::Red)),
        Span::raw(" No  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
