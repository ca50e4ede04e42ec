//! Day detail navigation
//!
//! A small state machine tracking which day group the detail view shows,
//! with bounded prev/next paging. Index 0 is today, which the pager never
//! shows: the 24-hour window already covers it, so `previous()` stops at 1
//! and `open()` is only ever fed future-day keys.

use log::warn;

use crate::data::ForecastBuckets;

/// Navigation state for the day detail view.
///
/// Closing preserves the selected index, so reopening without a fresh
/// `open()` resumes at the last-viewed day. The index is only meaningful
/// while the view is open and is always a valid position into the buckets
/// it was opened against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayNavigator {
    selected_index: usize,
    is_open: bool,
}

impl DayNavigator {
    /// Creates a closed navigator
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the detail view is currently shown
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The selected position within the day order
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Opens the detail view on `date_key`.
    ///
    /// A key that is not present in the buckets is rejected: the navigator
    /// is left untouched and false is returned.
    pub fn open(&mut self, date_key: &str, buckets: &ForecastBuckets) -> bool {
        match buckets.position(date_key) {
            Some(index) => {
                self.selected_index = index;
                self.is_open = true;
                true
            }
            None => {
                warn!("detail view requested for unknown day: {date_key}");
                false
            }
        }
    }

    /// Moves to the next day, stopping at the last group.
    ///
    /// Clamped rather than trusting the UI's disabled hint, so a burst of
    /// key events cannot run past the end.
    pub fn next(&mut self, day_count: usize) {
        if self.is_open && self.selected_index + 1 < day_count {
            self.selected_index += 1;
        }
    }

    /// Moves to the previous day, stopping at index 1.
    pub fn previous(&mut self) {
        if self.is_open && self.selected_index > 1 {
            self.selected_index -= 1;
        }
    }

    /// Hides the detail view, keeping the selected index
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether `next` would move
    pub fn has_next(&self, day_count: usize) -> bool {
        self.is_open && self.selected_index + 1 < day_count
    }

    /// Whether `previous` would move
    pub fn has_previous(&self) -> bool {
        self.is_open && self.selected_index > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{bucketize, ForecastEntry, DISPLAY_TZ};
    use chrono::TimeZone;

    /// Buckets with three day groups: Mon 3rd (today), Tue 4th, Wed 5th
    fn three_day_buckets() -> ForecastBuckets {
        let entries: Vec<ForecastEntry> = (3..=5)
            .flat_map(|day| {
                [9, 15].into_iter().map(move |hour| ForecastEntry {
                    timestamp: DISPLAY_TZ.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
                    temperature: 1.0,
                    wind_speed: 3.0,
                    wind_direction: 0.0,
                    symbol_code: Some("cloudy".to_string()),
                })
            })
            .collect();
        bucketize(
            &entries,
            DISPLAY_TZ.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_starts_closed_at_zero() {
        let navigator = DayNavigator::new();
        assert!(!navigator.is_open());
        assert_eq!(navigator.selected_index(), 0);
    }

    #[test]
    fn test_open_selects_key_position() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();

        assert!(navigator.open("Tuesday, 4 Mar", &buckets));
        assert!(navigator.is_open());
        assert_eq!(navigator.selected_index(), 1);
    }

    #[test]
    fn test_open_rejects_unknown_key() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();
        navigator.open("Wednesday, 5 Mar", &buckets);

        assert!(!navigator.open("Friday, 7 Mar", &buckets));
        // Untouched: still open on Wednesday
        assert!(navigator.is_open());
        assert_eq!(navigator.selected_index(), 2);
    }

    #[test]
    fn test_paging_scenario() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();
        navigator.open("Tuesday, 4 Mar", &buckets);

        // previous() at index 1 is a no-op
        navigator.previous();
        assert_eq!(navigator.selected_index(), 1);

        navigator.next(buckets.day_count());
        assert_eq!(navigator.selected_index(), 2);

        // next() at the last group is a no-op
        navigator.next(buckets.day_count());
        assert_eq!(navigator.selected_index(), 2);

        navigator.previous();
        assert_eq!(navigator.selected_index(), 1);
    }

    #[test]
    fn test_previous_never_reaches_today() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();
        navigator.open("Wednesday, 5 Mar", &buckets);

        for _ in 0..10 {
            navigator.previous();
        }
        assert_eq!(navigator.selected_index(), 1);
    }

    #[test]
    fn test_next_clamps_under_rapid_calls() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();
        navigator.open("Tuesday, 4 Mar", &buckets);

        for _ in 0..10 {
            navigator.next(buckets.day_count());
        }
        assert_eq!(navigator.selected_index(), buckets.day_count() - 1);
    }

    #[test]
    fn test_close_preserves_index() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();
        navigator.open("Wednesday, 5 Mar", &buckets);

        navigator.close();
        assert!(!navigator.is_open());
        assert_eq!(navigator.selected_index(), 2);
    }

    #[test]
    fn test_transitions_are_noops_while_closed() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();
        navigator.open("Tuesday, 4 Mar", &buckets);
        navigator.close();

        navigator.next(buckets.day_count());
        navigator.previous();
        assert_eq!(navigator.selected_index(), 1);
    }

    #[test]
    fn test_boundary_hints() {
        let buckets = three_day_buckets();
        let mut navigator = DayNavigator::new();

        // Closed: neither direction available
        assert!(!navigator.has_next(buckets.day_count()));
        assert!(!navigator.has_previous());

        navigator.open("Tuesday, 4 Mar", &buckets);
        assert!(navigator.has_next(buckets.day_count()));
        assert!(!navigator.has_previous());

        navigator.next(buckets.day_count());
        assert!(!navigator.has_next(buckets.day_count()));
        assert!(navigator.has_previous());
    }
}
