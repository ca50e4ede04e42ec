//! Day detail screen rendering
//!
//! Renders the full hourly breakdown for the day the navigator is open on,
//! with boundary-aware paging hints in the footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::record_line;
use crate::app::App;

/// Renders the day detail screen for the navigator's selected day
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let Some((date_key, group)) = app.buckets.group_at(app.navigator.selected_index()) else {
        render_no_data(frame, area);
        return;
    };

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" Weather - {} ", date_key),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));

    let inner = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Hourly rows
            Constraint::Length(1), // Paging hints
        ])
        .split(inner);

    let rows: Vec<Line> = group.iter().map(record_line).collect();
    frame.render_widget(Paragraph::new(rows), chunks[0]);

    render_paging_hints(frame, chunks[1], app);
}

/// Renders the footer hints, dimming directions that cannot move
fn render_paging_hints(frame: &mut Frame, area: Rect, app: &App) {
    let active = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let day_count = app.buckets.day_count();

    let hints = Line::from(vec![
        Span::styled(
            "←/h prev",
            if app.navigator.has_previous() { active } else { disabled },
        ),
        Span::styled(" · ", disabled),
        Span::styled(
            "→/l next",
            if app.navigator.has_next(day_count) { active } else { disabled },
        ),
        Span::styled(" · Esc close · q quit", disabled),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}

/// Fallback when the selected group is gone (should not happen: the
/// navigator only opens on keys resolved against the same buckets)
fn render_no_data(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(super::forecast::NO_DATA_MESSAGE)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
}
