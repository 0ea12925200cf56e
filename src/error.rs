//! Error types and handling for the `cityweather` application

use thiserror::Error;

/// Main error type for the `cityweather` application
#[derive(Error, Debug)]
pub enum WeatherAppError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather provider communication errors
    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// The provider does not know the requested city
    #[error("City not found: {city}")]
    CityNotFound { city: String },

    /// The provider rejected the API key
    #[error("Unauthorized: the weather provider rejected the API key")]
    Unauthorized,

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherAppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error without an HTTP status
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
            status: None,
        }
    }

    /// Create a new API error carrying the HTTP status returned by the provider
    pub fn api_status<S: Into<String>>(message: S, status: u16) -> Self {
        Self::Api {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn city_not_found<S: Into<String>>(city: S) -> Self {
        Self::CityNotFound { city: city.into() }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherAppError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            WeatherAppError::Api { .. } => {
                "Unable to reach the weather service. Please check your connection and search again."
                    .to_string()
            }
            WeatherAppError::CityNotFound { city } => {
                format!("No weather found for '{city}'. Please check the spelling and search again.")
            }
            WeatherAppError::Unauthorized => {
                "The weather service rejected the API key. Please check your OpenWeatherMap API key."
                    .to_string()
            }
            WeatherAppError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WeatherAppError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
