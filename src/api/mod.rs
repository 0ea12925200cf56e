//! Weather API client for OpenWeatherMap
//!
//! Fetches current conditions by city name and the 5-day/3-hour forecast by
//! coordinates. Each request is sent once; a failed search is repeated by the
//! user, not by the client.

pub mod openweather;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::{Coordinates, CurrentConditions, RawSample, Units};
use crate::{Result, WeatherAppError};

/// Source of current conditions and forecast samples
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Current conditions for a city name
    async fn current_conditions(&self, city: &str, units: Units) -> Result<CurrentConditions>;

    /// Chronological 3-hourly forecast samples for a location
    async fn forecast_samples(
        &self,
        coordinates: Coordinates,
        units: Units,
    ) -> Result<Vec<RawSample>>;
}

/// Weather API client for OpenWeatherMap
#[derive(Debug)]
pub struct OpenWeatherClient {
    /// HTTP client
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a new weather API client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            WeatherAppError::config(format!(
                "No OpenWeatherMap API key configured. Set weather.api_key or {}.",
                crate::config::API_KEY_ENV_VAR
            ))
        })?;

        let timeout = Duration::from_secs(config.timeout_seconds.into());
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cityweather/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherAppError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// GET request for an endpoint; `units` and `appid` follow the endpoint's own parameters
    fn request(&self, endpoint: &str, params: &[(&str, &str)], units: Units) -> RequestBuilder {
        self.client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(params)
            .query(&[("units", units.as_query()), ("appid", self.api_key.as_str())])
    }

    fn current_request(&self, city: &str, units: Units) -> RequestBuilder {
        self.request("weather", &[("q", city)], units)
    }

    fn forecast_request(&self, coordinates: Coordinates, units: Units) -> RequestBuilder {
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        self.request("forecast", &[("lat", lat.as_str()), ("lon", lon.as_str())], units)
    }

    /// Send a GET request and map non-success statuses to errors
    ///
    /// reqwest errors carry the request URL, which holds the API key, so it is
    /// stripped before the error is logged or returned.
    #[instrument(skip(self, request, city))]
    async fn send(
        &self,
        endpoint: &str,
        request: RequestBuilder,
        city: Option<&str>,
    ) -> Result<Response> {
        let start = Instant::now();

        let response = request.send().await.map_err(|e| {
            let e = e.without_url();
            warn!("Network error after {:.3}s: {}", start.elapsed().as_secs_f64(), e);
            WeatherAppError::api(format!("Network error: {e}"))
        })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start.elapsed().as_secs_f64()
        );

        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => {
                error!("API authentication failed (HTTP 401)");
                Err(WeatherAppError::Unauthorized)
            }
            StatusCode::NOT_FOUND if city.is_some() => {
                let city = city.unwrap_or_default();
                warn!("City not found (HTTP 404): {}", city);
                Err(WeatherAppError::city_not_found(city))
            }
            _ => {
                let message = format!(
                    "API request failed with status: {} - {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown error")
                );
                warn!("{}", message);
                Err(WeatherAppError::api_status(message, status.as_u16()))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
        city: Option<&str>,
    ) -> Result<T> {
        let response = self.send(endpoint, request, city).await?;
        response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            error!("Failed to parse {} response: {}", endpoint, e);
            WeatherAppError::api(format!("Invalid data received from OpenWeatherMap: {e}"))
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_conditions(&self, city: &str, units: Units) -> Result<CurrentConditions> {
        info!("Getting current weather for '{}'", city);
        let start = Instant::now();

        let response: openweather::CurrentWeatherResponse = self
            .get_json("weather", self.current_request(city, units), Some(city))
            .await?;
        let current = CurrentConditions::from(response);

        info!(
            "Retrieved current weather for {} ({}) in {:.3}s",
            current.city,
            current.coordinates.format_coordinates(),
            start.elapsed().as_secs_f64()
        );
        Ok(current)
    }

    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    async fn forecast_samples(
        &self,
        coordinates: Coordinates,
        units: Units,
    ) -> Result<Vec<RawSample>> {
        info!(
            "Getting forecast for coordinates: {}",
            coordinates.format_coordinates()
        );
        let start = Instant::now();

        let response: openweather::ForecastResponse = self
            .get_json("forecast", self.forecast_request(coordinates, units), None)
            .await?;
        let samples: Vec<RawSample> = response.list.into_iter().map(RawSample::from).collect();

        info!(
            "Retrieved forecast with {} samples in {:.3}s",
            samples.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(samples)
    }
}
