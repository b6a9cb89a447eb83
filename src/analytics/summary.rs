//! Curated headline view.

use rayon::prelude::*;

use crate::analytics::latest::latest_observation;
use crate::analytics::trend::calculate_trend;
use crate::data::ObservationSource;
use crate::domain::{Summary, SummaryEntry};

/// Headline series shown by `summary`, in display order: (series id, label).
pub const HEADLINE_SERIES: &[(&str, &str)] = &[
    ("CPIAUCSL", "Consumer Price Index"),
    ("UNRATE", "Unemployment Rate"),
    ("A191RL1Q225SBEA", "Real GDP Growth"),
    ("FEDFUNDS", "Federal Funds Rate"),
    ("DGS10", "10-Year Treasury Yield"),
];

/// Latest value and trend for every headline series.
///
/// Unlike `compare_series`, every series is listed; a failed lookup or trend
/// leaves the corresponding field empty.
pub fn build_summary<S>(source: &S, months: usize) -> Summary
where
    S: ObservationSource + ?Sized,
{
    let entries = HEADLINE_SERIES
        .par_iter()
        .map(|&(series_id, label)| {
            let latest = latest_observation(source, series_id)
                .inspect_err(|err| tracing::warn!(series_id, error = %err, "summary: latest lookup failed"))
                .ok();
            let trend = calculate_trend(source, series_id, months)
                .inspect_err(|err| tracing::debug!(series_id, error = %err, "summary: no trend"))
                .ok();
            SummaryEntry {
                series_id: series_id.to_string(),
                label: label.to_string(),
                latest,
                trend,
            }
        })
        .collect();

    Summary {
        window_months: months,
        entries,
    }
}
