//! In-memory observation source.
//!
//! Backs the `--fixture` offline mode and the test suites. Records are stored
//! oldest-first, the way a series reads on a chart; the fetch methods reorder
//! them to match the live API's contract.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::data::source::{ObservationSource, RawObservation, parse_date};
use crate::error::{AppError, SeriesError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemorySource {
    #[serde(default)]
    series: HashMap<String, Vec<RawObservation>>,
    /// Series ids that fail every fetch, to simulate upstream errors.
    #[serde(default)]
    failing: HashSet<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a series. `records` must be oldest-first.
    pub fn with_series(mut self, series_id: impl Into<String>, records: Vec<RawObservation>) -> Self {
        self.series.insert(series_id.into(), records);
        self
    }

    /// Shorthand for `with_series` from `(date, value)` string pairs.
    pub fn with_values(self, series_id: impl Into<String>, rows: &[(&str, &str)]) -> Self {
        let records = rows
            .iter()
            .map(|(date, value)| RawObservation::new(*date, *value))
            .collect();
        self.with_series(series_id, records)
    }

    /// Make every fetch for `series_id` fail with a transport error.
    pub fn with_failure(mut self, series_id: impl Into<String>) -> Self {
        self.failing.insert(series_id.into());
        self
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::new(2, format!("Invalid fixture JSON: {e}")))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)
            .map_err(|e| AppError::new(2, format!("Failed to open fixture '{}': {e}", path.display())))?;
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid fixture JSON: {e}")))
    }

    fn records(&self, series_id: &str) -> Result<&[RawObservation], SeriesError> {
        if self.failing.contains(series_id) {
            return Err(SeriesError::Fetch(format!("simulated failure for {series_id}")));
        }
        self.series
            .get(series_id)
            .map(Vec::as_slice)
            .ok_or_else(|| SeriesError::Fetch(format!("The series {series_id} does not exist.")))
    }
}

impl ObservationSource for MemorySource {
    fn fetch_windowed(&self, series_id: &str, count: usize) -> Result<Vec<RawObservation>, SeriesError> {
        Ok(self.records(series_id)?.iter().rev().take(count).cloned().collect())
    }

    fn fetch_ranged(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawObservation>, SeriesError> {
        // Records with unparsable dates are passed through so the caller sees
        // them as malformed instead of having them silently dropped here.
        Ok(self
            .records(series_id)?
            .iter()
            .filter(|r| match parse_date(&r.date) {
                Ok(d) => start <= d && d <= end,
                Err(_) => true,
            })
            .cloned()
            .collect())
    }
}
