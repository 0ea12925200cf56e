//! Forecast normalization
//!
//! The provider delivers a flat, chronological series sampled every three
//! hours. The UI shows one column per day. Each day is represented by its
//! first slot (index 0, 8, 16, ...) and the series is cut to five days.
//!
//! The representative slot's own min/max is used as the day's range; the
//! eight slots of a day are not aggregated.

use crate::icons::map_icon;
use crate::models::{DailySummary, RawSample, Temperature};

/// Number of 3-hour samples in 24 hours
pub const SAMPLES_PER_DAY: usize = 8;

/// Number of days the forecast view shows
pub const MAX_FORECAST_DAYS: usize = 5;

/// Reduce a 3-hourly series to at most [`MAX_FORECAST_DAYS`] daily summaries.
///
/// The input is expected to be chronological with a fixed 3-hour interval;
/// this is not checked. Short or empty input yields a shorter or empty result.
#[must_use]
pub fn normalize(samples: &[RawSample]) -> Vec<DailySummary> {
    normalize_days(samples, MAX_FORECAST_DAYS)
}

/// Same as [`normalize`] with a caller-chosen cap, clamped to [`MAX_FORECAST_DAYS`]
#[must_use]
pub fn normalize_days(samples: &[RawSample], days: usize) -> Vec<DailySummary> {
    samples
        .iter()
        .step_by(SAMPLES_PER_DAY)
        .take(days.min(MAX_FORECAST_DAYS))
        .map(DailySummary::from)
        .collect()
}

impl From<&RawSample> for DailySummary {
    fn from(sample: &RawSample) -> Self {
        Self {
            timestamp_seconds: sample.timestamp_seconds,
            temperature: Temperature {
                maximum: sample.temp_max,
                minimum: sample.temp_min,
            },
            icon: map_icon(&sample.provider_icon_code).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_705_622_400; // 2024-01-19T00:00:00Z
    const THREE_HOURS: i64 = 3 * 60 * 60;

    fn series(len: usize) -> Vec<RawSample> {
        (0..len)
            .map(|i| {
                let offset = i64::try_from(i).unwrap();
                RawSample {
                    timestamp_seconds: START + offset * THREE_HOURS,
                    temp_max: 10.0 + offset as f64,
                    temp_min: offset as f64 - 5.0,
                    provider_icon_code: if i % 2 == 0 { "10d" } else { "01n" }.to_string(),
                }
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn five_full_days_yield_one_summary_per_day() {
        let samples = series(40);
        let days = normalize(&samples);

        assert_eq!(days.len(), 5);
        for (day, index) in days.iter().zip([0, 8, 16, 24, 32]) {
            let source = &samples[index];
            assert_eq!(day.timestamp_seconds, source.timestamp_seconds);
            assert_eq!(day.temperature.maximum, source.temp_max);
            assert_eq!(day.temperature.minimum, source.temp_min);
            assert_eq!(day.icon, "rain-day");
        }
    }

    #[test]
    fn trailing_samples_past_fifth_day_are_dropped() {
        let samples = series(41);
        let days = normalize(&samples);

        assert_eq!(days.len(), 5);
        assert_eq!(days[4].timestamp_seconds, samples[32].timestamp_seconds);
    }

    #[test]
    fn partial_day_yields_single_summary_from_first_sample() {
        let samples = series(7);
        let days = normalize(&samples);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].timestamp_seconds, samples[0].timestamp_seconds);
        assert_eq!(days[0].temperature.maximum, 10.0);
        assert_eq!(days[0].temperature.minimum, -5.0);
    }

    #[test]
    fn day_range_comes_from_representative_sample_only() {
        let mut samples = series(8);
        samples[3].temp_max = 40.0;
        samples[5].temp_min = -30.0;

        let days = normalize(&samples);

        assert_eq!(days[0].temperature.maximum, samples[0].temp_max);
        assert_eq!(days[0].temperature.minimum, samples[0].temp_min);
    }

    #[test]
    fn input_is_left_untouched() {
        let samples = series(41);
        let before = samples.clone();

        let _ = normalize(&samples);

        assert_eq!(samples, before);
    }

    #[test]
    fn timestamps_are_strictly_increasing() {
        let days = normalize(&series(40));
        assert!(
            days.windows(2)
                .all(|pair| pair[0].timestamp_seconds < pair[1].timestamp_seconds)
        );
    }

    #[test]
    fn unknown_provider_icon_uses_default() {
        let mut samples = series(1);
        samples[0].provider_icon_code = String::new();

        let days = normalize(&samples);

        assert_eq!(days[0].icon, "clear-sky-day");
    }

    #[test]
    fn custom_cap_is_honoured_and_clamped() {
        let samples = series(40);

        assert_eq!(normalize_days(&samples, 3).len(), 3);
        assert_eq!(normalize_days(&samples, 0).len(), 0);
        assert_eq!(normalize_days(&samples, 9).len(), MAX_FORECAST_DAYS);
    }

    #[test]
    fn length_never_exceeds_ceiling_of_days_in_input() {
        for len in 0..60usize {
            let expected = len.div_ceil(SAMPLES_PER_DAY).min(MAX_FORECAST_DAYS);
            assert_eq!(normalize(&series(len)).len(), expected, "len = {len}");
        }
    }
}
