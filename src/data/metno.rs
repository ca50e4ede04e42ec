//! MET Norway locationforecast API client
//!
//! This module fetches the compact locationforecast payload for the fixed
//! forecast coordinate and decodes its timeseries into our ForecastEntry
//! samples.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{ForecastEntry, DISPLAY_TZ};

/// Base URL for the locationforecast compact endpoint
const LOCATIONFORECAST_URL: &str = "https://api.met.no/weatherapi/locationforecast/2.0/compact";

/// api.met.no rejects anonymous clients, so every request carries an
/// identifying User-Agent.
const USER_AGENT: &str = "tlnweather/0.1 (https://github.com/tlnweather/tlnweather)";

/// Forecast coordinate: Tallinn
const LATITUDE: f64 = 59.437;
const LONGITUDE: f64 = 24.7535;

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum ForecastError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for fetching forecast data from the MET Norway API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Create a new ForecastClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the full forecast timeseries for the fixed coordinate
    ///
    /// # Returns
    /// * `Ok(Vec<ForecastEntry>)` - Decoded samples in the API's
    ///   chronological order
    /// * `Err(ForecastError)` - If the request or parsing fails
    pub async fn fetch_forecast(&self) -> Result<Vec<ForecastEntry>, ForecastError> {
        let url = format!("{}?lat={}&lon={}", LOCATIONFORECAST_URL, LATITUDE, LONGITUDE);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let text = response.text().await?;
        let payload: LocationForecast = serde_json::from_str(&text)?;

        Ok(decode_timeseries(payload))
    }
}

/// Decodes the raw payload into ForecastEntry samples, resolving each
/// entry's symbol code on the way.
fn decode_timeseries(payload: LocationForecast) -> Vec<ForecastEntry> {
    payload
        .properties
        .timeseries
        .into_iter()
        .map(|entry| {
            let symbol_code = resolve_symbol_code(&entry.data);
            let details = entry.data.instant.details;
            ForecastEntry {
                timestamp: entry.time.with_timezone(&DISPLAY_TZ),
                temperature: details.air_temperature,
                wind_speed: details.wind_speed,
                wind_direction: details.wind_from_direction,
                symbol_code,
            }
        })
        .collect()
}

/// Resolves an entry's symbol code from its forward-looking summaries.
///
/// Instant samples carry no symbol of their own; the API attaches summaries
/// at 1, 6, and 12 hour granularities and the shortest one present wins.
fn resolve_symbol_code(data: &EntryData) -> Option<String> {
    [&data.next_1_hours, &data.next_6_hours, &data.next_12_hours]
        .into_iter()
        .find_map(|block| block.as_ref().map(|b| b.summary.symbol_code.clone()))
}

/// locationforecast API response structure
#[derive(Debug, Deserialize)]
struct LocationForecast {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    timeseries: Vec<TimeseriesEntry>,
}

/// One timestamped entry of the timeseries
#[derive(Debug, Deserialize)]
struct TimeseriesEntry {
    time: DateTime<Utc>,
    data: EntryData,
}

#[derive(Debug, Deserialize)]
struct EntryData {
    instant: InstantBlock,
    #[serde(default)]
    next_1_hours: Option<SummaryBlock>,
    #[serde(default)]
    next_6_hours: Option<SummaryBlock>,
    #[serde(default)]
    next_12_hours: Option<SummaryBlock>,
}

#[derive(Debug, Deserialize)]
struct InstantBlock {
    details: InstantDetails,
}

#[derive(Debug, Deserialize)]
struct InstantDetails {
    air_temperature: f64,
    wind_speed: f64,
    wind_from_direction: f64,
}

#[derive(Debug, Deserialize)]
struct SummaryBlock {
    summary: SymbolSummary,
}

#[derive(Debug, Deserialize)]
struct SymbolSummary {
    symbol_code: String,
}
