//! FRED API integration for the `series/observations` endpoint.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::FredConfig;
use crate::data::source::{ObservationSource, RawObservation};
use crate::error::{AppError, SeriesError};

/// FRED caps `limit` at 100000; ranged queries ask for the maximum.
const MAX_LIMIT: usize = 100_000;

pub struct FredClient {
    client: Client,
    config: FredConfig,
}

impl FredClient {
    pub fn new(config: FredConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(FredConfig::from_env()?)
    }

    pub fn config(&self) -> &FredConfig {
        &self.config
    }

    fn request(&self, series_id: &str, extra: &[(&str, String)]) -> Result<Vec<RawObservation>, SeriesError> {
        tracing::debug!(series_id, params = ?extra, "requesting FRED observations");

        let resp = self
            .client
            .get(self.config.observations_url())
            .query(&[
                ("series_id", series_id),
                ("api_key", self.config.api_key.as_str()),
                ("file_type", "json"),
            ])
            .query(extra)
            .send()
            .map_err(|e| SeriesError::Fetch(format!("FRED request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            // FRED reports unknown series and bad params as 400 with a JSON body.
            let detail = resp
                .json::<ErrorResponse>()
                .map(|e| e.error_message)
                .unwrap_or_default();
            return Err(SeriesError::Fetch(format!(
                "FRED request failed with status {status}. {detail}"
            )));
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| SeriesError::Fetch(format!("Failed to parse FRED response: {e}")))?;

        tracing::debug!(series_id, count = body.observations.len(), "received FRED observations");
        Ok(body.observations)
    }
}

impl ObservationSource for FredClient {
    fn fetch_windowed(&self, series_id: &str, count: usize) -> Result<Vec<RawObservation>, SeriesError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        self.request(
            series_id,
            &[
                ("sort_order", "desc".to_string()),
                ("limit", count.min(MAX_LIMIT).to_string()),
            ],
        )
    }

    fn fetch_ranged(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawObservation>, SeriesError> {
        if end < start {
            return Ok(Vec::new());
        }
        self.request(
            series_id,
            &[
                ("sort_order", "asc".to_string()),
                ("observation_start", start.to_string()),
                ("observation_end", end.to_string()),
                ("limit", MAX_LIMIT.to_string()),
            ],
        )
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<RawObservation>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error_message: String,
}
