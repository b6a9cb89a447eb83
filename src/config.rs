//! Runtime configuration for the FRED client.
//!
//! Values are resolved once from the environment (and `.env`, via `dotenvy`)
//! and then handed to `FredClient::new`; nothing reads the environment later.

use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the FRED observations API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FredConfig {
    pub api_key: String,
    /// API root without trailing slash, e.g. `https://api.stlouisfed.org/fred`.
    pub base_url: String,
    pub timeout: Duration,
}

impl FredConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load from `FRED_API_KEY`, `FRED_BASE_URL` and `FRED_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = env::var("FRED_API_KEY")
            .map_err(|_| AppError::new(2, "Missing FRED_API_KEY in environment (.env)."))?;
        Self::from_parts(
            api_key,
            env::var("FRED_BASE_URL").ok(),
            env::var("FRED_TIMEOUT_SECS").ok(),
        )
    }

    fn from_parts(
        api_key: String,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::new(2, "FRED_API_KEY is empty."));
        }

        let mut config = Self::new(api_key.trim());

        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = timeout_secs {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| AppError::new(2, format!("Invalid FRED_TIMEOUT_SECS '{raw}'.")))?;
            if secs == 0 {
                return Err(AppError::new(2, "FRED_TIMEOUT_SECS must be > 0."));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Full URL of the `series/observations` endpoint.
    pub fn observations_url(&self) -> String {
        format!("{}/series/observations", self.base_url)
    }
}
