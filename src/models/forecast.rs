//! Forecast sample and daily summary models

use serde::{Deserialize, Serialize};

/// One fine-grained (3-hourly) forecast entry as supplied by the provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawSample {
    /// Unix epoch seconds
    pub timestamp_seconds: i64,
    pub temp_max: f64,
    pub temp_min: f64,
    /// Icon code in the provider vocabulary, e.g. `"10d"`
    pub provider_icon_code: String,
}

/// Maximum and minimum temperature of a day
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub maximum: f64,
    pub minimum: f64,
}

/// One normalized day of the forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailySummary {
    /// Unix epoch seconds of the representative sample
    pub timestamp_seconds: i64,
    pub temperature: Temperature,
    /// Icon code in the application vocabulary, e.g. `"rain-day"`
    pub icon: String,
}

impl DailySummary {
    /// Format the temperature range as `max° min°`, rounded to whole degrees
    #[must_use]
    pub fn format_temperature_range(&self) -> String {
        format!(
            "{}° {}°",
            whole_degrees(self.temperature.maximum),
            whole_degrees(self.temperature.minimum)
        )
    }
}

/// Round a temperature to whole degrees for display
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn whole_degrees(value: f64) -> i64 {
    value.round() as i64
}
