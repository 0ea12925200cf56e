//! City search: current conditions followed by the normalized forecast

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::api::WeatherSource;
use crate::forecast::normalize_days;
use crate::models::{Units, WeatherReport};
use crate::{Result, WeatherAppError};

/// Combines a [`WeatherSource`] with the forecast normalization
#[derive(Clone)]
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
    forecast_days: usize,
}

impl WeatherService {
    #[must_use]
    pub fn new(source: Arc<dyn WeatherSource>, forecast_days: usize) -> Self {
        Self {
            source,
            forecast_days,
        }
    }

    /// Look up a city and build its report.
    ///
    /// The forecast is requested with the coordinates the provider returned
    /// for the city, so both halves describe the same place.
    #[instrument(skip(self))]
    pub async fn report(&self, city: &str, units: Units) -> Result<WeatherReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherAppError::validation("City cannot be empty"));
        }

        let current = self.source.current_conditions(city, units).await?;
        debug!(
            "Resolved '{}' to {} at {}",
            city,
            current.city,
            current.coordinates.format_coordinates()
        );

        let samples = self
            .source
            .forecast_samples(current.coordinates, units)
            .await?;
        let forecast = normalize_days(&samples, self.forecast_days);

        info!(
            "Built report for {} with {} forecast days from {} samples",
            current.city,
            forecast.len(),
            samples.len()
        );

        Ok(WeatherReport {
            current,
            forecast,
            units,
        })
    }
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("forecast_days", &self.forecast_days)
            .finish_non_exhaustive()
    }
}
