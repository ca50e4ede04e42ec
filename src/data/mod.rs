//! Core data models for the Tallinn weather CLI
//!
//! This module contains the data types shared across the application for
//! representing decoded forecast samples and display-ready forecast rows.

pub mod bucket;
pub mod metno;
pub mod symbols;

pub use bucket::{bucketize, DailySummary, ForecastBuckets};
pub use metno::{ForecastClient, ForecastError};

use chrono::DateTime;
use chrono_tz::Tz;

/// Timezone every timestamp is rendered in.
///
/// The forecast covers a single fixed location, so display times are pinned
/// to its timezone rather than whatever the host machine is set to.
pub const DISPLAY_TZ: Tz = chrono_tz::Europe::Tallinn;

/// One instant sample decoded from the forecast timeseries.
///
/// Immutable after decoding; the bucketizer only reads these.
#[derive(Debug, Clone)]
pub struct ForecastEntry {
    /// Sample time, converted to [`DISPLAY_TZ`]
    pub timestamp: DateTime<Tz>,
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind origin bearing in degrees
    pub wind_direction: f64,
    /// Weather symbol code, resolved from the forward-looking summary
    /// blocks; `None` when the entry carries no summary at all
    pub symbol_code: Option<String>,
}

/// A display-ready forecast row as shown in every list view.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    /// Time of day, `HH:MM`
    pub time: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Translated weather label with icon
    pub weather: &'static str,
    /// Formatted wind string (speed plus compass direction)
    pub wind: String,
}
