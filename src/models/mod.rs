//! Data models for the cityweather application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates of a searched city
//! - Weather: Current conditions, measurement units and the combined report
//! - Forecast: Raw provider samples and the normalized daily summaries

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{DailySummary, RawSample, Temperature};
pub use location::Coordinates;
pub use weather::{CurrentConditions, Units, WeatherReport};
