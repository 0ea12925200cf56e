//! Current conditions model, measurement units and the combined report

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinates, DailySummary};
use super::forecast::whole_degrees;
use crate::WeatherAppError;

/// Measurement system requested from the provider
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius and metres per second
    #[default]
    Metric,
    /// Fahrenheit and miles per hour
    Imperial,
}

impl Units {
    /// Value of the provider's `units` query parameter
    #[must_use]
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    #[must_use]
    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    #[must_use]
    pub fn wind_speed_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for Units {
    type Err = WeatherAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            other => Err(WeatherAppError::validation(format!(
                "Unknown units '{other}'. Must be one of: metric, imperial"
            ))),
        }
    }
}

/// Current weather of a city, renamed from the provider response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// City name as reported by the provider
    pub city: String,
    pub coordinates: Coordinates,
    /// Observation time, Unix epoch seconds
    pub timestamp_seconds: i64,
    /// Shift of the city's local time from UTC in seconds
    pub utc_offset_seconds: i32,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Icon code in the application vocabulary
    pub icon: String,
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    pub wind_speed: f64,
}

impl CurrentConditions {
    /// Observation time in the city's local time zone
    #[must_use]
    pub fn local_time(&self) -> Option<DateTime<FixedOffset>> {
        local_time(self.timestamp_seconds, self.utc_offset_seconds)
    }

    /// Format the observation time like "Thursday 16:00"
    #[must_use]
    pub fn format_local_time(&self) -> String {
        self.local_time()
            .map(|time| time.format("%A %H:%M").to_string())
            .unwrap_or_default()
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self, units: Units) -> String {
        format!(
            "{}{}",
            whole_degrees(self.temperature),
            units.temperature_symbol()
        )
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self, units: Units) -> String {
        format!("{:.0} {}", self.wind_speed, units.wind_speed_symbol())
    }

    /// Description with its first letter capitalized
    #[must_use]
    pub fn format_description(&self) -> String {
        let mut chars = self.description.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Convert epoch seconds into local time for the given UTC offset
#[must_use]
pub fn local_time(timestamp_seconds: i64, utc_offset_seconds: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(utc_offset_seconds)?;
    DateTime::<Utc>::from_timestamp(timestamp_seconds, 0).map(|time| time.with_timezone(&offset))
}

/// Everything one city search produces
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    /// At most five daily summaries in chronological order
    pub forecast: Vec<DailySummary>,
    pub units: Units,
}
