//! `cityweather` - current weather and a 5-day forecast for any city
//!
//! This library provides the forecast normalization core (icon mapping and
//! per-day sampling), the OpenWeatherMap client feeding it, and the text and
//! HTTP surfaces presenting its results.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod icons;
pub mod logging;
pub mod models;
pub mod render;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::{OpenWeatherClient, WeatherSource};
pub use config::AppConfig;
pub use error::WeatherAppError;
pub use forecast::{normalize, normalize_days};
pub use icons::map_icon;
pub use models::{CurrentConditions, DailySummary, RawSample, Temperature, Units, WeatherReport};
pub use weather::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherAppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
