//! Provider icon code to application icon mapping
//!
//! OpenWeatherMap reports conditions as short codes such as `"10d"`. The UI
//! works with descriptive names such as `"rain-day"`. The table below is the
//! only place that knows both vocabularies; the current conditions path and
//! the forecast path both go through [`map_icon`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Application icon used for any provider code missing from the table
pub const DEFAULT_ICON: &str = "clear-sky-day";

const ICON_MAPPINGS: [(&str, &str); 18] = [
    ("01d", "clear-sky-day"),
    ("01n", "clear-sky-night"),
    ("02d", "few-clouds-day"),
    ("02n", "few-clouds-night"),
    ("03d", "scattered-clouds-day"),
    ("03n", "scattered-clouds-night"),
    ("04d", "broken-clouds-day"),
    ("04n", "broken-clouds-night"),
    ("09d", "shower-rain-day"),
    ("09n", "shower-rain-night"),
    ("10d", "rain-day"),
    ("10n", "rain-night"),
    ("11d", "thunderstorm-day"),
    ("11n", "thunderstorm-night"),
    ("13d", "snow-day"),
    ("13n", "snow-night"),
    ("50d", "mist-day"),
    ("50n", "mist-night"),
];

static ICON_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ICON_MAPPINGS.into_iter().collect());

/// Translate a provider icon code into an application icon code.
///
/// Matching is exact (case-sensitive). Unknown codes, including the empty
/// string, yield [`DEFAULT_ICON`].
#[must_use]
pub fn map_icon(code: &str) -> &'static str {
    ICON_TABLE.get(code).copied().unwrap_or(DEFAULT_ICON)
}

/// Terminal glyph for an application icon code
#[must_use]
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "clear-sky-day" => "☀️",
        "clear-sky-night" => "🌙",
        "few-clouds-day" => "🌤️",
        "few-clouds-night" | "scattered-clouds-day" | "scattered-clouds-night" => "⛅",
        "broken-clouds-day" | "broken-clouds-night" => "☁️",
        "shower-rain-day" | "shower-rain-night" => "🌧️",
        "rain-day" => "🌦️",
        "rain-night" => "🌧️",
        "thunderstorm-day" | "thunderstorm-night" => "⛈️",
        "snow-day" | "snow-night" => "❄️",
        "mist-day" | "mist-night" => "🌫️",
        _ => "·",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("01d", "clear-sky-day")]
    #[case("01n", "clear-sky-night")]
    #[case("02d", "few-clouds-day")]
    #[case("02n", "few-clouds-night")]
    #[case("03d", "scattered-clouds-day")]
    #[case("03n", "scattered-clouds-night")]
    #[case("04d", "broken-clouds-day")]
    #[case("04n", "broken-clouds-night")]
    #[case("09d", "shower-rain-day")]
    #[case("09n", "shower-rain-night")]
    #[case("10d", "rain-day")]
    #[case("10n", "rain-night")]
    #[case("11d", "thunderstorm-day")]
    #[case("11n", "thunderstorm-night")]
    #[case("13d", "snow-day")]
    #[case("13n", "snow-night")]
    #[case("50d", "mist-day")]
    #[case("50n", "mist-night")]
    fn known_codes_map_exactly(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(map_icon(code), expected);
    }

    #[rstest]
    #[case("zz9")]
    #[case("")]
    #[case("01D")]
    #[case(" 01d")]
    #[case("10")]
    fn unknown_codes_fall_back_to_clear_sky_day(#[case] code: &str) {
        assert_eq!(map_icon(code), DEFAULT_ICON);
        assert_eq!(map_icon(code), "clear-sky-day");
    }

    #[test]
    fn every_mapped_icon_has_a_glyph() {
        for (_, icon) in ICON_MAPPINGS {
            assert_ne!(glyph(icon), "·", "missing glyph for {icon}");
        }
        assert_eq!(glyph("something-else"), "·");
    }

    #[test]
    fn mapping_is_stable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| map_icon("11n")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "thunderstorm-night");
        }
    }
}
