//! Status bar view
//!
//! Shows the total and record count of the loaded rows, the latest
//! notification, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.summary();

    let mut spans = vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            app.settings.format_amount(summary.total),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" · "),
        Span::styled(
            format!("Records: {}", summary.count),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(notification) = app.notifications.current() {
        let style = Style::default().fg(notification.notification_type.color());
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} {}", notification.notification_type.icon(), notification.message),
            style,
        ));
    }

    let hints = " g:Chart  x:Export  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
