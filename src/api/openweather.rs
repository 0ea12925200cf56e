//! OpenWeatherMap 2.5 response structures and conversion into internal models

use serde::Deserialize;

use crate::icons::map_icon;
use crate::models::{Coordinates, CurrentConditions, RawSample};

/// Response of `GET /weather`
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub coord: Coord,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: CurrentMain,
    #[serde(default)]
    pub wind: Wind,
    pub dt: i64,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: i32,
}

#[derive(Debug, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    #[serde(default)]
    pub humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

/// Response of `GET /forecast` (5 days, 3-hour steps)
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: ForecastMain,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastMain {
    pub temp_max: f64,
    pub temp_min: f64,
}

impl From<ForecastItem> for RawSample {
    fn from(item: ForecastItem) -> Self {
        Self {
            timestamp_seconds: item.dt,
            temp_max: item.main.temp_max,
            temp_min: item.main.temp_min,
            // An entry without conditions maps to the default icon
            provider_icon_code: item
                .weather
                .into_iter()
                .next()
                .map(|condition| condition.icon)
                .unwrap_or_default(),
        }
    }
}

impl From<CurrentWeatherResponse> for CurrentConditions {
    fn from(response: CurrentWeatherResponse) -> Self {
        let condition = response.weather.into_iter().next();
        let (description, icon) = condition
            .map(|c| (c.description, map_icon(&c.icon)))
            .unwrap_or_else(|| (String::new(), map_icon("")));

        Self {
            city: response.name,
            coordinates: Coordinates::new(response.coord.lat, response.coord.lon),
            timestamp_seconds: response.dt,
            utc_offset_seconds: response.timezone,
            description,
            icon: icon.to_string(),
            temperature: response.main.temp,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
        }
    }
}
