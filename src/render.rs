//! Terminal rendering of a weather report

use crate::icons::glyph;
use crate::models::{WeatherReport, weather::local_time};

/// Render the report as the text shown by `cityweather weather`
#[must_use]
pub fn render_report(report: &WeatherReport) -> String {
    let current = &report.current;
    let units = report.units;

    let mut lines = vec![
        current.city.clone(),
        format!(
            "{} · {}",
            current.format_local_time(),
            current.format_description()
        ),
        format!(
            "{}  {}   Humidity: {}%   Wind: {}",
            glyph(&current.icon),
            current.format_temperature(units),
            current.humidity,
            current.format_wind(units)
        ),
    ];

    if !report.forecast.is_empty() {
        lines.push(String::new());
    }
    lines.extend(report.forecast.iter().map(|day| {
        format!(
            "{}  {}  {}",
            format_day(day.timestamp_seconds, current.utc_offset_seconds),
            glyph(&day.icon),
            day.format_temperature_range()
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Abbreviated weekday ("Thu") of a timestamp in the city's local time
#[must_use]
pub fn format_day(timestamp_seconds: i64, utc_offset_seconds: i32) -> String {
    local_time(timestamp_seconds, utc_offset_seconds)
        .map(|time| time.format("%a").to_string())
        .unwrap_or_else(|| "???".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, CurrentConditions, DailySummary, Temperature, Units};

    fn report() -> WeatherReport {
        WeatherReport {
            current: CurrentConditions {
                city: "Chicago".to_string(),
                coordinates: Coordinates::new(41.85, -87.65),
                timestamp_seconds: 1_705_615_200,
                utc_offset_seconds: -21_600,
                description: "light rain".to_string(),
                icon: "rain-day".to_string(),
                temperature: 56.2,
                humidity: 65,
                wind_speed: 9.0,
            },
            forecast: [0_i64, 1, 2]
                .iter()
                .map(|day| DailySummary {
                    // Midnight UTC of Jan 19, 20 and 21 2024 (Fri, Sat, Sun UTC)
                    timestamp_seconds: 1_705_622_400 + day * 86_400,
                    temperature: Temperature {
                        maximum: 12.6,
                        minimum: 7.2,
                    },
                    icon: "snow-night".to_string(),
                })
                .collect(),
            units: Units::Imperial,
        }
    }

    #[test]
    fn test_header_lines() {
        let text = render_report(&report());
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Chicago"));
        assert_eq!(lines.next(), Some("Thursday 16:00 · Light rain"));
        let third = lines.next().unwrap();
        assert!(third.contains("56°F"));
        assert!(third.contains("Humidity: 65%"));
        assert!(third.contains("Wind: 9 mph"));
    }

    #[test]
    fn test_forecast_rows_use_local_weekday() {
        let text = render_report(&report());
        let rows: Vec<&str> = text.lines().skip(4).collect();

        // Midnight UTC is still the previous evening in Chicago
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Thu"));
        assert!(rows[1].starts_with("Fri"));
        assert!(rows[2].starts_with("Sat"));
        assert!(rows[0].ends_with("13° 7°"));
    }

    #[test]
    fn test_empty_forecast_has_no_rows() {
        let mut report = report();
        report.forecast.clear();
        assert_eq!(render_report(&report).lines().count(), 3);
    }

    #[test]
    fn test_output_ends_with_single_newline() {
        let text = render_report(&report());
        assert!(text.ends_with("13° 7°\n"));
        assert!(!text.ends_with("\n\n"));
    }
}
