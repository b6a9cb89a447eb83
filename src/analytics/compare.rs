//! Multi-series comparison.

use rayon::prelude::*;

use crate::analytics::latest::latest_observation;
use crate::analytics::trend::calculate_trend;
use crate::data::ObservationSource;
use crate::domain::{ComparisonEntry, ComparisonSet};
use crate::error::SeriesError;

/// Latest value and trend for each series, keyed by series id.
///
/// A series is included only if its latest lookup produced a value *and* its
/// trend computed; anything else is dropped (and logged) without affecting the
/// other series.
pub fn compare_series<S>(source: &S, series_ids: &[String], months: usize) -> ComparisonSet
where
    S: ObservationSource + ?Sized,
{
    series_ids
        .par_iter()
        .filter_map(|id| match compare_one(source, id, months) {
            Ok(entry) => Some((id.clone(), entry)),
            Err(err) => {
                tracing::debug!(series_id = %id, error = %err, "dropping series from comparison");
                None
            }
        })
        .collect()
}

fn compare_one<S>(source: &S, series_id: &str, months: usize) -> Result<ComparisonEntry, SeriesError>
where
    S: ObservationSource + ?Sized,
{
    let latest = latest_observation(source, series_id)?
        .value
        .ok_or(SeriesError::InsufficientData)?;
    let trend = calculate_trend(source, series_id, months)?;

    Ok(ComparisonEntry {
        latest,
        percent_change: trend.percent_change,
        direction: trend.direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemorySource;
    use crate::domain::Direction;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_only_fully_successful_series() {
        let src = MemorySource::new()
            .with_values("UNRATE", &[("2024-01-01", "4.0"), ("2024-02-01", "4.2")])
            // Latest value missing: trend alone is not enough.
            .with_values("GDP", &[("2024-01-01", "100"), ("2024-02-01", "101"), ("2024-03-01", ".")])
            // Only one point: latest alone is not enough.
            .with_values("DGS10", &[("2024-01-01", "4.1")])
            .with_failure("FEDFUNDS");

        let set = compare_series(&src, &ids(&["UNRATE", "GDP", "DGS10", "FEDFUNDS", "NOPE"]), 12);

        assert_eq!(set.len(), 1);
        let row = &set["UNRATE"];
        assert_eq!(row.latest, 4.2);
        assert_eq!(row.percent_change, 5.0);
        assert_eq!(row.direction, Direction::Up);
    }

    #[test]
    fn keys_are_subset_of_input_and_order_independent() {
        let src = MemorySource::new()
            .with_values("A", &[("2024-01-01", "1"), ("2024-02-01", "1")])
            .with_values("B", &[("2024-01-01", "2"), ("2024-02-01", "1")]);

        let forward = compare_series(&src, &ids(&["A", "B", "C"]), 6);
        let backward = compare_series(&src, &ids(&["C", "B", "A"]), 6);

        assert_eq!(forward, backward);
        assert_eq!(forward.keys().cloned().collect::<Vec<_>>(), ids(&["A", "B"]));
        assert_eq!(forward["A"].direction, Direction::Flat);
        assert_eq!(forward["B"].direction, Direction::Down);
    }

    #[test]
    fn malformed_series_does_not_leak() {
        let src = MemorySource::new()
            .with_values("OK", &[("2024-01-01", "10"), ("2024-02-01", "11")])
            .with_values("BAD", &[("2024-01-01", "10"), ("not-a-date", "11")]);

        let set = compare_series(&src, &ids(&["OK", "BAD"]), 12);
        assert!(set.contains_key("OK"));
        assert!(!set.contains_key("BAD"));
    }
}
