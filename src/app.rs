//! Application state management for the Tallinn weather CLI
//!
//! This module contains the main application state, handling keyboard input,
//! the startup fetch, and transitions between the summary and detail views.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use log::warn;

use crate::cli::StartupConfig;
use crate::data::bucket::FUTURE_DAYS;
use crate::data::{bucketize, ForecastBuckets, ForecastClient, DISPLAY_TZ};
use crate::navigator::DayNavigator;

/// Application state enum representing the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while the forecast is being fetched
    Loading,
    /// Forecast screens (summary, or day detail while the navigator is open)
    Forecast,
}

/// Main application struct owning all session state
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Bucketed forecast data; empty until the fetch succeeds
    pub buckets: ForecastBuckets,
    /// Set when the startup fetch failed; routes rendering to the error path
    pub load_failed: bool,
    /// Day detail navigation state
    pub navigator: DayNavigator,
    /// Cursor position in the future-days list
    pub selected_row: usize,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Future day to open once data has loaded (from the --day CLI flag)
    pub pending_open_day: Option<usize>,
    /// Forecast API client
    client: ForecastClient,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
            buckets: ForecastBuckets::default(),
            load_failed: false,
            navigator: DayNavigator::new(),
            selected_row: 0,
            should_quit: false,
            pending_open_day: None,
            client: ForecastClient::new(),
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();
        app.pending_open_day = config.open_day;
        app
    }

    /// Number of rows in the future-days list
    pub fn future_count(&self) -> usize {
        self.buckets.day_count().saturating_sub(1).min(FUTURE_DAYS)
    }

    /// The date key under the future-list cursor, if any
    pub fn selected_future_key(&self) -> Option<&str> {
        if self.selected_row < self.future_count() {
            self.buckets.key_at(self.selected_row + 1)
        } else {
            None
        }
    }

    /// Fetches the forecast and bucketizes it.
    ///
    /// On success the dataset replaces whatever was held before; on failure
    /// the dataset is cleared and the error path is flagged. Either way the
    /// app leaves the loading state — there is no retry, restarting the
    /// program is the only re-fetch.
    pub async fn load_forecast(&mut self) {
        match self.client.fetch_forecast().await {
            Ok(entries) => {
                let reference_now = Utc::now().with_timezone(&DISPLAY_TZ);
                self.buckets = bucketize(&entries, reference_now);
                self.load_failed = false;
            }
            Err(err) => {
                warn!("forecast fetch failed: {err}");
                self.buckets = ForecastBuckets::default();
                self.load_failed = true;
            }
        }

        self.apply_pending_open_day();
        self.state = AppState::Forecast;
    }

    /// Applies the --day startup request against the loaded dataset
    fn apply_pending_open_day(&mut self) {
        let Some(day) = self.pending_open_day.take() else {
            return;
        };
        match self.buckets.key_at(day).map(str::to_string) {
            Some(key) => {
                if self.navigator.open(&key, &self.buckets) {
                    self.selected_row = day - 1;
                }
            }
            None => warn!("--day {day} requested but only {} days available", self.future_count()),
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit from any screen
    /// - `Esc` (summary): Quit; (detail): Close the detail view
    /// - `Up`/`k`, `Down`/`j`: Move the future-days selection
    /// - `Enter`: Open the detail view for the selected day
    /// - `Left`/`h`, `Right`/`l`: Page through days in the detail view
    /// - `x` (detail): Close the detail view
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Forecast if self.navigator.is_open() => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Char('x') => {
                    self.navigator.close();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.navigator.previous();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.navigator.next(self.buckets.day_count());
                }
                _ => {}
            },
            AppState::Forecast => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    if let Some(key) = self.selected_future_key().map(str::to_string) {
                        self.navigator.open(&key, &self.buckets);
                    }
                }
                _ => {}
            },
        }
    }

    /// Moves the selection up in the future-days list, wrapping at the top
    fn move_selection_up(&mut self) {
        let count = self.future_count();
        if count == 0 {
            return;
        }
        if self.selected_row == 0 {
            self.selected_row = count - 1;
        } else {
            self.selected_row -= 1;
        }
    }

    /// Moves the selection down in the future-days list, wrapping at the bottom
    fn move_selection_down(&mut self) {
        let count = self.future_count();
        if count == 0 {
            return;
        }
        self.selected_row = (self.selected_row + 1) % count;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
