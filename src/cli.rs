//! Command-line interface parsing for the Tallinn weather CLI
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --day flag for jumping straight to a future day's detail view.

use clap::Parser;

/// Tallinn weather CLI - view the multi-day forecast in the terminal
#[derive(Parser, Debug)]
#[command(name = "tlnweather")]
#[command(about = "Tallinn multi-day weather forecast")]
#[command(version)]
pub struct Cli {
    /// Open directly on a future day's detail view (1 = tomorrow, up to 7)
    ///
    /// Examples:
    ///   tlnweather            # Open on the forecast summary
    ///   tlnweather --day 1    # Open on tomorrow's detail view
    ///   tlnweather --day 3    # Open three days ahead
    #[arg(long, value_name = "DAY", value_parser = clap::value_parser!(u8).range(1..=7))]
    pub day: Option<u8>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Future day whose detail view should open once data has loaded
    pub open_day: Option<usize>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            open_day: cli.day.map(usize::from),
        }
    }
}
