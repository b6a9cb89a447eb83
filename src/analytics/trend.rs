//! Trend metrics over a trailing window of observations.

use crate::data::{ObservationSource, RawObservation, parse_observations};
use crate::domain::{Direction, TrendResult};
use crate::error::SeriesError;

pub const DEFAULT_WINDOW_MONTHS: usize = 12;

/// Fetch the last `months` observations of `series_id` and compute its trend.
pub fn calculate_trend<S>(source: &S, series_id: &str, months: usize) -> Result<TrendResult, SeriesError>
where
    S: ObservationSource + ?Sized,
{
    if months < 2 {
        return Err(SeriesError::InsufficientData);
    }
    let raws = source.fetch_windowed(series_id, months)?;
    compute_trend(series_id, &raws)
}

/// Compute a trend from records ordered newest-first (the source's order).
///
/// Missing values are dropped after reordering oldest-first, so
/// `avg_monthly_change` is the mean step between *kept* observations; gaps
/// left by missing months are not weighted by elapsed time.
pub fn compute_trend(series_id: &str, newest_first: &[RawObservation]) -> Result<TrendResult, SeriesError> {
    if newest_first.len() < 2 {
        return Err(SeriesError::InsufficientData);
    }

    let mut observations = parse_observations(newest_first)?;
    observations.reverse();

    let values: Vec<f64> = observations.iter().filter_map(|o| o.value).collect();
    let (first, last) = match (values.first(), values.last()) {
        (Some(&first), Some(&last)) if values.len() >= 2 => (first, last),
        _ => return Err(SeriesError::InsufficientData),
    };
    if first == 0.0 {
        return Err(SeriesError::InsufficientData);
    }

    let percent_change = (last - first) / first * 100.0;
    let steps = values.windows(2).map(|w| w[1] - w[0]);
    let avg_change = steps.sum::<f64>() / (values.len() - 1) as f64;
    // A subnormal base or an overflowing step must not surface as infinity.
    if !(percent_change.is_finite() && avg_change.is_finite()) {
        return Err(SeriesError::InsufficientData);
    }

    Ok(TrendResult {
        series_id: series_id.to_string(),
        percent_change: round2(percent_change),
        avg_monthly_change: round2(avg_change),
        direction: Direction::from_percent_change(percent_change),
    })
}

/// Two decimals, ties to even.
fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemorySource;

    /// Build newest-first records from oldest-first values, one per month of 2024.
    fn records(oldest_first: &[&str]) -> Vec<RawObservation> {
        let mut out: Vec<RawObservation> = oldest_first
            .iter()
            .enumerate()
            .map(|(i, v)| RawObservation::new(format!("2024-{:02}-01", i + 1), *v))
            .collect();
        out.reverse();
        out
    }

    #[test]
    fn worked_example() {
        let trend = compute_trend("CPI", &records(&["100", "102", "105", "104", "110"])).unwrap();
        assert_eq!(trend.series_id, "CPI");
        assert!((trend.percent_change - 10.0).abs() < 1e-12);
        assert!((trend.avg_monthly_change - 2.5).abs() < 1e-12);
        assert_eq!(trend.direction, Direction::Up);
    }

    #[test]
    fn missing_values_are_skipped_not_zeroed() {
        let trend = compute_trend("X", &records(&["50", ".", "55", "."])).unwrap();
        assert!((trend.percent_change - 10.0).abs() < 1e-12);
        // One kept step of +5, regardless of the skipped month in between.
        assert!((trend.avg_monthly_change - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let trend = compute_trend("X", &records(&["3", "4"])).unwrap();
        assert_eq!(trend.percent_change, 33.33);
        let trend = compute_trend("X", &records(&["3", "2"])).unwrap();
        assert_eq!(trend.percent_change, -33.33);
        assert_eq!(trend.direction, Direction::Down);
    }

    #[test]
    fn rounding_ties_go_to_even() {
        let up = compute_trend("X", &records(&["1.0", "1.125"])).unwrap();
        assert_eq!(up.avg_monthly_change, 0.12);
        assert_eq!(up.percent_change, 12.5);
        let down = compute_trend("X", &records(&["1.0", "0.875"])).unwrap();
        assert_eq!(down.avg_monthly_change, -0.12);
    }

    #[test]
    fn non_finite_results_are_insufficient_data() {
        assert_eq!(compute_trend("X", &records(&["1e-310", "1"])), Err(SeriesError::InsufficientData));
        assert_eq!(compute_trend("X", &records(&["1e308", "-1e308"])), Err(SeriesError::InsufficientData));
    }

    #[test]
    fn deadband_boundary_flips_direction() {
        let flat = compute_trend("X", &records(&["100", "100.1"])).unwrap();
        assert_eq!(flat.direction, Direction::Flat);
        let up = compute_trend("X", &records(&["100", "100.11"])).unwrap();
        assert_eq!(up.direction, Direction::Up);
        let down = compute_trend("X", &records(&["100", "99.89"])).unwrap();
        assert_eq!(down.direction, Direction::Down);
    }

    #[test]
    fn insufficient_data_cases() {
        assert_eq!(compute_trend("X", &records(&["1"])), Err(SeriesError::InsufficientData));
        assert_eq!(compute_trend("X", &records(&[".", "2", "."])), Err(SeriesError::InsufficientData));
        assert_eq!(compute_trend("X", &records(&["0", "5"])), Err(SeriesError::InsufficientData));
        assert_eq!(compute_trend("X", &[]), Err(SeriesError::InsufficientData));
    }

    #[test]
    fn malformed_record_aborts() {
        let got = compute_trend("X", &records(&["1", "oops", "3"]));
        assert!(matches!(got, Err(SeriesError::Malformed(_))));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let raws = records(&["4.1", "4.0", ".", "3.8"]);
        assert_eq!(compute_trend("U", &raws), compute_trend("U", &raws));
    }

    #[test]
    fn calculate_trend_uses_trailing_window() {
        let src = MemorySource::new().with_values(
            "FEDFUNDS",
            &[("2024-01-01", "1.0"), ("2024-02-01", "2.0"), ("2024-03-01", "4.0"), ("2024-04-01", "5.0")],
        );
        let trend = calculate_trend(&src, "FEDFUNDS", 2).unwrap();
        assert!((trend.percent_change - 25.0).abs() < 1e-12);
        assert!((trend.avg_monthly_change - 1.0).abs() < 1e-12);

        assert_eq!(calculate_trend(&src, "FEDFUNDS", 1), Err(SeriesError::InsufficientData));
        assert!(matches!(calculate_trend(&src, "NOPE", 12), Err(SeriesError::Fetch(_))));
    }
}
