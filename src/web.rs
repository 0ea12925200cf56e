//! HTTP surface: JSON weather endpoint and the static search page

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::WeatherAppError;
use crate::api::WeatherSource;
use crate::config::AppConfig;
use crate::models::{Units, WeatherReport};
use crate::weather::WeatherService;

/// Shared state of the HTTP handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: WeatherService,
    pub default_city: String,
    pub default_units: Units,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub units: Option<String>,
}

pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/weather", get(get_weather))
        .route("/health", get(health))
        .with_state(Arc::new(state));

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

pub async fn run(config: &AppConfig, source: Arc<dyn WeatherSource>) -> Result<()> {
    let state = AppState {
        service: WeatherService::new(source, config.defaults.forecast_days),
        default_city: config.defaults.city.clone(),
        default_units: config.weather.units,
    };
    let app = router(state, &config.server.static_dir);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down web server");
}

async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = query.city.unwrap_or_else(|| state.default_city.clone());
    let units = match query.units.as_deref() {
        Some(units) => units.parse::<Units>()?,
        None => state.default_units,
    };

    let report = state.service.report(&city, units).await?;
    Ok(Json(report))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Error response carrying the user-facing message
#[derive(Debug)]
pub struct ApiError(WeatherAppError);

impl From<WeatherAppError> for ApiError {
    fn from(err: WeatherAppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            WeatherAppError::Validation { .. } => StatusCode::BAD_REQUEST,
            WeatherAppError::CityNotFound { .. } => StatusCode::NOT_FOUND,
            WeatherAppError::Unauthorized | WeatherAppError::Api { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Weather request failed: {}", self.0);
        } else {
            tracing::debug!("Weather request rejected: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::tests::FakeSource;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app(source: FakeSource) -> Router {
        let state = AppState {
            service: WeatherService::new(Arc::new(source), 5),
            default_city: "Chicago".to_string(),
            default_units: Units::Metric,
        };
        router(state, "static")
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_weather_endpoint_returns_report() {
        let source = FakeSource {
            samples: 41,
            ..FakeSource::default()
        };

        let (status, body) = call(app(source), "/api/weather?city=Denver&units=imperial").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current"]["city"], "Denver");
        assert_eq!(body["units"], "imperial");
        assert_eq!(body["forecast"].as_array().unwrap().len(), 5);
        assert_eq!(body["forecast"][0]["icon"], "rain-night");
        assert_eq!(body["forecast"][0]["temperature"]["maximum"], 8.0);
    }

    #[tokio::test]
    async fn test_weather_endpoint_uses_default_city() {
        let (status, body) = call(app(FakeSource::default()), "/api/weather").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current"]["city"], "Chicago");
        assert_eq!(body["units"], "metric");
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let (status, body) = call(app(FakeSource::default()), "/api/weather?city=%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("City cannot be empty"));

        let (status, _) = call(app(FakeSource::default()), "/api/weather?units=kelvin").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let missing = FakeSource {
            missing_city: true,
            ..FakeSource::default()
        };
        let (status, body) = call(app(missing), "/api/weather?city=Atlantis").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(app(FakeSource::default()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn test_upstream_failures_map_to_bad_gateway() {
        assert_eq!(
            ApiError::from(WeatherAppError::Unauthorized).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(WeatherAppError::api_status("boom", 500)).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(WeatherAppError::config("no key")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
