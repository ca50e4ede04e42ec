//! Forecast bucketing
//!
//! Splits the raw timeseries into the rolling 24-hour window shown in the
//! "today" region and a per-calendar-day grouping that backs the future
//! summary rows and the daily detail views.

use chrono::{DateTime, DurationRound, TimeDelta};
use chrono_tz::Tz;
use log::warn;

use super::symbols::{translate_direction, translate_symbol};
use super::{DisplayRecord, ForecastEntry};

/// How many future days the summary screen lists.
pub const FUTURE_DAYS: usize = 7;

/// Grouping key format, e.g. "Monday, 3 Mar"
const DATE_KEY_FORMAT: &str = "%A, %-d %b";
/// Row time format
const TIME_FORMAT: &str = "%H:%M";

/// Bucketed forecast data.
///
/// `today_window` holds the rows inside the 24-hour window; `days` groups
/// every row by calendar date. Day order is first-insertion order, which
/// for a chronologically sorted timeseries is ascending date order — the
/// consumers below rely on that.
#[derive(Debug, Default)]
pub struct ForecastBuckets {
    /// Rows within 24 hours of the reference time, in input order
    pub today_window: Vec<DisplayRecord>,
    days: Vec<(String, Vec<DisplayRecord>)>,
}

/// A single row of the future-days list.
#[derive(Debug, Clone, Copy)]
pub struct DailySummary<'a> {
    /// The day's grouping key
    pub date_key: &'a str,
    /// The record standing in for the whole day
    pub representative: &'a DisplayRecord,
}

impl ForecastBuckets {
    /// Returns true when no entry was bucketed at all
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of distinct calendar days seen
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Day keys in insertion order
    pub fn date_keys(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(key, _)| key.as_str())
    }

    /// The key at `index`, if any
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.days.get(index).map(|(key, _)| key.as_str())
    }

    /// Position of `date_key` within the day order
    pub fn position(&self, date_key: &str) -> Option<usize> {
        self.days.iter().position(|(key, _)| key == date_key)
    }

    /// The rows grouped under `date_key`
    pub fn group(&self, date_key: &str) -> Option<&[DisplayRecord]> {
        self.days
            .iter()
            .find(|(key, _)| key == date_key)
            .map(|(_, group)| group.as_slice())
    }

    /// The key and rows at `index`
    pub fn group_at(&self, index: usize) -> Option<(&str, &[DisplayRecord])> {
        self.days
            .get(index)
            .map(|(key, group)| (key.as_str(), group.as_slice()))
    }

    /// Summary rows for the upcoming days.
    ///
    /// Skips the first day (today, already covered by the 24-hour window)
    /// and yields up to [`FUTURE_DAYS`] rows; a shorter dataset just yields
    /// fewer. The representative record is the one at the middle index of
    /// the group, a midday-ish pick rather than a true noon lookup.
    pub fn future_days(&self) -> Vec<DailySummary<'_>> {
        self.days
            .iter()
            .skip(1)
            .take(FUTURE_DAYS)
            .map(|(key, group)| DailySummary {
                date_key: key.as_str(),
                representative: &group[group.len() / 2],
            })
            .collect()
    }

    fn push(&mut self, date_key: String, record: DisplayRecord) {
        match self.days.iter_mut().find(|(key, _)| *key == date_key) {
            Some((_, group)) => group.push(record),
            None => self.days.push((date_key, vec![record])),
        }
    }
}

/// Buckets the decoded timeseries against `reference_now`.
///
/// The reference is truncated to the start of its hour before any
/// comparison, so the whole pass works against one stable window boundary.
/// The window is the closed interval from that boundary to 24 hours later.
/// Input order is preserved throughout; the timeseries arrives sorted and
/// is not re-sorted here.
pub fn bucketize(entries: &[ForecastEntry], reference_now: DateTime<Tz>) -> ForecastBuckets {
    let window_start = reference_now
        .duration_trunc(TimeDelta::hours(1))
        .unwrap_or(reference_now);
    let window_end = window_start + TimeDelta::hours(24);

    let mut buckets = ForecastBuckets::default();
    for entry in entries {
        if entry.symbol_code.is_none() {
            warn!("no symbol code resolved for entry at {}", entry.timestamp);
        }

        let record = DisplayRecord {
            time: entry.timestamp.format(TIME_FORMAT).to_string(),
            temperature: entry.temperature,
            weather: translate_symbol(entry.symbol_code.as_deref()),
            wind: format!(
                "༄ {} m/s {}",
                entry.wind_speed,
                translate_direction(entry.wind_direction)
            ),
        };

        if entry.timestamp >= window_start && entry.timestamp <= window_end {
            buckets.today_window.push(record.clone());
        }

        let date_key = entry.timestamp.format(DATE_KEY_FORMAT).to_string();
        buckets.push(date_key, record);
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::symbols::UNKNOWN_CONDITIONS;
    use crate::data::DISPLAY_TZ;
    use chrono::TimeZone;

    fn ts(day: u32, hour: u32) -> DateTime<Tz> {
        // March 2025: the 3rd is a Monday, well clear of the DST switch
        DISPLAY_TZ.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    fn entry(day: u32, hour: u32, temperature: f64) -> ForecastEntry {
        ForecastEntry {
            timestamp: ts(day, hour),
            temperature,
            wind_speed: 5.0,
            wind_direction: 45.0,
            symbol_code: Some("cloudy".to_string()),
        }
    }

    /// Three consecutive days, eight 3-hourly entries each
    fn three_day_series() -> Vec<ForecastEntry> {
        let mut entries = Vec::new();
        for day in 3..=5 {
            for slot in 0..8 {
                entries.push(entry(day, slot * 3, day as f64 + slot as f64 / 10.0));
            }
        }
        entries
    }

    #[test]
    fn test_window_spans_day_one_into_day_two() {
        let entries = three_day_series();
        let buckets = bucketize(&entries, ts(3, 0));

        // Closed interval [Mar 3 00:00, Mar 4 00:00]: all eight day-one
        // entries plus the day-two 00:00 boundary entry
        assert_eq!(buckets.today_window.len(), 9);
        assert_eq!(buckets.today_window[0].time, "00:00");
        assert_eq!(buckets.today_window[8].time, "00:00");
        assert_eq!(buckets.day_count(), 3);
    }

    #[test]
    fn test_window_is_closed_on_both_ends() {
        let entries = vec![entry(3, 12, 0.0), entry(4, 12, 0.0)];
        let buckets = bucketize(&entries, ts(3, 12));

        // Start boundary and exact +24h boundary both included
        assert_eq!(buckets.today_window.len(), 2);
    }

    #[test]
    fn test_window_excludes_past_and_beyond() {
        let entries = vec![entry(3, 9, 0.0), entry(3, 12, 0.0), entry(4, 13, 0.0)];
        let buckets = bucketize(&entries, ts(3, 12));

        assert_eq!(buckets.today_window.len(), 1);
        assert_eq!(buckets.today_window[0].time, "12:00");
        // Everything still lands in the by-date grouping
        assert_eq!(buckets.day_count(), 2);
    }

    #[test]
    fn test_reference_truncated_to_start_of_hour() {
        let entries = vec![entry(3, 10, 0.0)];
        let reference = DISPLAY_TZ.with_ymd_and_hms(2025, 3, 3, 10, 47, 31).unwrap();
        let buckets = bucketize(&entries, reference);

        // 10:00 is before 10:47 but inside the truncated window
        assert_eq!(buckets.today_window.len(), 1);
    }

    #[test]
    fn test_every_entry_in_exactly_one_group() {
        let entries = three_day_series();
        let buckets = bucketize(&entries, ts(3, 0));

        let total: usize = buckets
            .date_keys()
            .map(|key| buckets.group(key).unwrap().len())
            .sum();
        assert_eq!(total, entries.len());

        // Concatenating the groups in key order reproduces the input
        let flattened: Vec<&str> = buckets
            .date_keys()
            .flat_map(|key| buckets.group(key).unwrap())
            .map(|record| record.time.as_str())
            .collect();
        let expected: Vec<String> = entries
            .iter()
            .map(|e| e.timestamp.format("%H:%M").to_string())
            .collect();
        assert_eq!(flattened, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_date_keys_in_day_order() {
        let buckets = bucketize(&three_day_series(), ts(3, 0));

        let keys: Vec<&str> = buckets.date_keys().collect();
        assert_eq!(keys, vec!["Monday, 3 Mar", "Tuesday, 4 Mar", "Wednesday, 5 Mar"]);
        assert_eq!(buckets.position("Tuesday, 4 Mar"), Some(1));
        assert_eq!(buckets.position("Friday, 7 Mar"), None);
    }

    #[test]
    fn test_future_days_skip_today() {
        let buckets = bucketize(&three_day_series(), ts(3, 0));

        let future = buckets.future_days();
        assert_eq!(future.len(), 2);
        assert_eq!(future[0].date_key, "Tuesday, 4 Mar");
        assert_eq!(future[1].date_key, "Wednesday, 5 Mar");
    }

    #[test]
    fn test_future_days_capped_at_seven() {
        let mut entries = Vec::new();
        for day in 3..=12 {
            entries.push(entry(day, 6, 1.0));
            entries.push(entry(day, 18, 2.0));
        }
        let buckets = bucketize(&entries, ts(3, 0));

        assert_eq!(buckets.day_count(), 10);
        assert_eq!(buckets.future_days().len(), FUTURE_DAYS);
    }

    #[test]
    fn test_representative_is_middle_record() {
        let buckets = bucketize(&three_day_series(), ts(3, 0));

        // Eight 3-hourly rows per day: index 8 / 2 = 4 is the 12:00 row
        let future = buckets.future_days();
        assert_eq!(future[0].representative.time, "12:00");
        assert!((future[0].representative.temperature - 4.4).abs() < 0.01);
    }

    #[test]
    fn test_representative_of_odd_sized_group() {
        let entries = vec![entry(3, 12, 0.0), entry(4, 6, 0.0), entry(4, 12, 0.0), entry(4, 18, 0.0)];
        let buckets = bucketize(&entries, ts(3, 0));

        // Three rows: index 3 / 2 = 1
        assert_eq!(buckets.future_days()[0].representative.time, "12:00");
    }

    #[test]
    fn test_record_formatting() {
        let buckets = bucketize(&[entry(3, 9, 0.0)], ts(3, 0));

        let record = &buckets.today_window[0];
        assert_eq!(record.time, "09:00");
        assert_eq!(record.weather, "☁ Cloudy");
        assert_eq!(record.wind, "༄ 5 m/s NE");
    }

    #[test]
    fn test_missing_symbol_does_not_halt_bucketing() {
        let mut entries = vec![entry(3, 6, 0.0), entry(3, 9, 0.0)];
        entries[0].symbol_code = None;
        let buckets = bucketize(&entries, ts(3, 0));

        assert_eq!(buckets.today_window.len(), 2);
        assert_eq!(buckets.today_window[0].weather, UNKNOWN_CONDITIONS);
        assert_eq!(buckets.today_window[1].weather, "☁ Cloudy");
    }

    #[test]
    fn test_empty_input() {
        let buckets = bucketize(&[], ts(3, 0));

        assert!(buckets.is_empty());
        assert!(buckets.today_window.is_empty());
        assert!(buckets.future_days().is_empty());
        assert_eq!(buckets.day_count(), 0);
        assert_eq!(buckets.key_at(0), None);
        assert_eq!(buckets.group_at(0), None);
    }

    #[test]
    fn test_group_lookup_by_index_and_key_agree() {
        let buckets = bucketize(&three_day_series(), ts(3, 0));

        let (key, group) = buckets.group_at(1).unwrap();
        assert_eq!(key, "Tuesday, 4 Mar");
        assert_eq!(Some(group), buckets.group("Tuesday, 4 Mar"));
        assert_eq!(buckets.key_at(1), Some("Tuesday, 4 Mar"));
    }
}
