//! The observation-source seam and raw record parsing.
//!
//! Sources return records exactly as upstream encodes them (date and value as
//! strings). Parsing happens on the analytics side so that one malformed record
//! fails only the series it belongs to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Observation;
use crate::error::SeriesError;

/// Upstream's marker for "not yet reported".
pub const MISSING_TOKEN: &str = ".";

/// One observation record as returned by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: String,
    pub value: String,
}

impl RawObservation {
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: value.into(),
        }
    }
}

/// Something that can answer observation queries for a series.
///
/// Implementations must be shareable across threads; the multi-series
/// analytics fan out over a rayon pool.
pub trait ObservationSource: Send + Sync {
    /// Up to `count` most recent observations, newest first.
    fn fetch_windowed(&self, series_id: &str, count: usize) -> Result<Vec<RawObservation>, SeriesError>;

    /// All observations dated within `[start, end]`. Order is not guaranteed.
    fn fetch_ranged(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawObservation>, SeriesError>;

    /// The most recent observation (at most one record).
    fn fetch_latest(&self, series_id: &str) -> Result<Vec<RawObservation>, SeriesError> {
        self.fetch_windowed(series_id, 1)
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, SeriesError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| SeriesError::Malformed(format!("invalid date '{raw}': {e}")))
}

/// Parse a value string. The missing token becomes `None`; anything else must
/// be a finite decimal.
pub fn parse_value(raw: &str) -> Result<Option<f64>, SeriesError> {
    let trimmed = raw.trim();
    if trimmed == MISSING_TOKEN {
        return Ok(None);
    }
    let v = trimmed
        .parse::<f64>()
        .map_err(|_| SeriesError::Malformed(format!("invalid value '{raw}'")))?;
    if v.is_finite() {
        Ok(Some(v))
    } else {
        Err(SeriesError::Malformed(format!("non-finite value '{raw}'")))
    }
}

pub fn parse_observation(raw: &RawObservation) -> Result<Observation, SeriesError> {
    Ok(Observation::new(parse_date(&raw.date)?, parse_value(&raw.value)?))
}

/// Parse every record, failing on the first malformed one. Order is preserved.
pub fn parse_observations(raws: &[RawObservation]) -> Result<Vec<Observation>, SeriesError> {
    raws.iter().map(parse_observation).collect()
}
