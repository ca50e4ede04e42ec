//! UI rendering module for the Tallinn weather CLI
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod day_detail;
pub mod forecast;

pub use day_detail::render as render_day_detail;
pub use forecast::render as render_forecast;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::data::DisplayRecord;

/// Color for temperature (warmer = more red, colder = more blue)
fn temperature_color(temp: f64) -> Color {
    if temp >= 25.0 {
        Color::Red
    } else if temp >= 18.0 {
        Color::LightRed
    } else if temp >= 10.0 {
        Color::Yellow
    } else if temp >= 3.0 {
        Color::Green
    } else if temp >= -5.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Builds one forecast row line: time, temperature, weather, wind
fn record_line(record: &DisplayRecord) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("{:<7}", record.time),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:>7}", format!("{}°C", record.temperature)),
            Style::default().fg(temperature_color(record.temperature)),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{:<20}", record.weather),
            Style::default().fg(Color::White),
        ),
        Span::styled(record.wind.as_str(), Style::default().fg(Color::Gray)),
    ])
}
