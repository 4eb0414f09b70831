//! Spending chart dialog
//!
//! Pie chart of spending per category drawn on a braille canvas, with a
//! legend listing each category's total and share.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::reports::CategoryBreakdown;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Angular resolution of the pie
const ANGLE_STEPS: usize = 360;

/// Radial resolution of the pie
const RADIUS_STEPS: usize = 24;

const SLICE_COLORS: [Color; 10] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightMagenta,
];

/// Colour of the slice at `index`
pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Canvas points covering each slice of the pie, in slice order
///
/// Slices start at twelve o'clock and run clockwise over the unit circle.
/// A slice with a 0% share gets no points.
pub fn pie_points(breakdown: &CategoryBreakdown) -> Vec<Vec<(f64, f64)>> {
    let mut points = vec![Vec::new(); breakdown.slices.len()];

    let mut ends = Vec::with_capacity(breakdown.slices.len());
    let mut cumulative = 0.0;
    for slice in &breakdown.slices {
        cumulative += slice.percentage / 100.0;
        ends.push(cumulative);
    }

    for step in 0..ANGLE_STEPS {
        let fraction = (step as f64 + 0.5) / ANGLE_STEPS as f64;
        let Some(index) = ends.iter().position(|&end| fraction < end) else {
            continue;
        };

        let angle = FRAC_PI_2 - fraction * TAU;
        for r in 1..=RADIUS_STEPS {
            let radius = r as f64 / RADIUS_STEPS as f64;
            points[index].push((radius * angle.cos(), radius * angle.sin()));
        }
    }

    points
}

/// Render the chart dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(80, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Spending by Category ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.breakdown.is_empty() {
        let placeholder = Paragraph::new("No data to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        frame.render_widget(placeholder, middle);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    render_pie(frame, &app.breakdown, chunks[0]);
    render_legend(frame, app, chunks[1]);
}

fn render_pie(frame: &mut Frame, breakdown: &CategoryBreakdown, area: Rect) {
    let points = pie_points(breakdown);

    // Terminal cells are about twice as tall as they are wide
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1));
    let x_extent = (width / (2.0 * height)).max(1.0);
    let y_extent = (2.0 * height / width).max(1.0);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-y_extent, y_extent])
        .paint(|ctx| {
            for (index, coords) in points.iter().enumerate() {
                ctx.draw(&Points {
                    coords,
                    color: slice_color(index),
                });
            }
        });

    frame.render_widget(canvas, area);
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let settings = app.settings;
    let mut lines = vec![Line::from("")];

    for (index, slice) in app.breakdown.slices.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(slice_color(index))),
            Span::styled(
                format!("{:<14}", slice.category),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>12}", settings.format_amount(slice.total)),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{:>6}", slice.format_percentage()),
                Style::default().fg(Color::Cyan),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<14}", "Total"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>12}", settings.format_amount(app.breakdown.total)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
