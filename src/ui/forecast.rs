//! Forecast summary screen rendering
//!
//! Renders the two summary regions: the rolling 24-hour window and the
//! selectable list of upcoming days. After a failed fetch both regions show
//! the fixed error message instead of rows.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::record_line;
use crate::app::App;
use crate::data::bucket::FUTURE_DAYS;

/// Shown in both regions when the startup fetch failed
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load forecast data";
/// Shown when a region has nothing to display
pub const NO_DATA_MESSAGE: &str = "No data available";

/// Renders the forecast summary screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),                            // Next 24 hours
            Constraint::Length(FUTURE_DAYS as u16 + 2),    // Next 7 days + borders
            Constraint::Length(1),                         // Help line
        ])
        .split(area);

    render_today_window(frame, chunks[0], app);
    render_future_days(frame, chunks[1], app);
    render_help_line(frame, chunks[2]);
}

/// Renders the rolling 24-hour region
fn render_today_window(frame: &mut Frame, area: Rect, app: &App) {
    let block = titled_block(" Next 24 hours ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.load_failed {
        render_message(frame, inner, FETCH_ERROR_MESSAGE, Color::Red);
        return;
    }
    if app.buckets.today_window.is_empty() {
        render_message(frame, inner, NO_DATA_MESSAGE, Color::Gray);
        return;
    }

    let rows: Vec<Line> = app.buckets.today_window.iter().map(record_line).collect();
    frame.render_widget(Paragraph::new(rows), inner);
}

/// Renders the selectable future-days region
fn render_future_days(frame: &mut Frame, area: Rect, app: &App) {
    let block = titled_block(" Next 7 days ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.load_failed {
        render_message(frame, inner, FETCH_ERROR_MESSAGE, Color::Red);
        return;
    }

    let future = app.buckets.future_days();
    if future.is_empty() {
        render_message(frame, inner, NO_DATA_MESSAGE, Color::Gray);
        return;
    }

    let rows: Vec<Line> = future
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let selected = i == app.selected_row;
            let marker = if selected { "▶ " } else { "  " };
            let base = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, base),
                Span::styled(format!("{:<18}", day.date_key), base),
                Span::styled(
                    format!("{:>7}", format!("{}°C", day.representative.temperature)),
                    base,
                ),
                Span::raw("  "),
                Span::styled(day.representative.weather, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), inner);
}

/// Renders the fixed key hints under the summary regions
fn render_help_line(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("↑/↓ select day · Enter details · q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Bordered region block with a bold title
fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
}

/// Centers a single status message inside a region
fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
