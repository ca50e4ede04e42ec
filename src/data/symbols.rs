//! Weather symbol and wind direction translation
//!
//! Fixed lookup tables mapping MET Norway symbol codes to icon+label
//! strings and wind bearings to eight compass sectors.

use log::warn;

/// Fallback label for a missing or unrecognized symbol code.
pub const UNKNOWN_CONDITIONS: &str = "❓ Unknown conditions";

/// Translates a weather symbol code into its display label.
///
/// Unknown and absent codes both fall back to [`UNKNOWN_CONDITIONS`] with a
/// logged warning; the caller keeps going either way.
pub fn translate_symbol(code: Option<&str>) -> &'static str {
    let Some(code) = code else {
        warn!("forecast entry resolved no symbol code");
        return UNKNOWN_CONDITIONS;
    };

    match code {
        "clearsky" | "clearsky_day" => "☀️ Clear sky",
        "clearsky_night" => "🌙 Clear sky",
        "partlycloudy" | "partlycloudy_day" | "partlycloudy_night" => "⛅ Partly cloudy",
        "cloudy" => "☁ Cloudy",
        "rain" => "🌧 Rain",
        "lightrain" => "🌦 Light rain",
        "heavyrain" => "🌧🌧 Heavy rain",
        "snow" => "❄ Snow",
        "lightsnow" => "❄ Light snow",
        "heavysnow" => "❄❄ Heavy snow",
        "thunderstorm" => "⛈ Thunderstorm",
        "fair_day" => "⛅ Fair",
        "fair_night" => "🌙 Fair",
        other => {
            warn!("unknown symbol code: {other}");
            UNKNOWN_CONDITIONS
        }
    }
}

/// Compass sectors in 45° steps starting at north.
const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Translates a wind bearing in degrees into a compass label.
///
/// Total for any input: the rounded sector is reduced with `rem_euclid`, so
/// bearings at or past 360, negative values, and even non-finite ones stay
/// in range.
pub fn translate_direction(degrees: f64) -> &'static str {
    let sector = (degrees / 45.0).round() as i64;
    DIRECTIONS[sector.rem_euclid(8) as usize]
}
