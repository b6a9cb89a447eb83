//! Latest-value lookup.

use crate::data::{ObservationSource, parse_observation};
use crate::domain::IndicatorSnapshot;
use crate::error::SeriesError;

/// Fetch the single most recent observation for `series_id`.
///
/// A missing-value token yields a snapshot with `value: None`; an empty
/// response is `NoObservations`.
pub fn latest_observation<S>(source: &S, series_id: &str) -> Result<IndicatorSnapshot, SeriesError>
where
    S: ObservationSource + ?Sized,
{
    let raws = source.fetch_latest(series_id)?;
    let newest = raws.first().ok_or(SeriesError::NoObservations)?;
    let obs = parse_observation(newest)?;

    Ok(IndicatorSnapshot {
        series_id: series_id.to_string(),
        date: obs.date,
        value: obs.value,
    })
}
