//! Domain types used throughout the analytics.
//!
//! This module defines:
//!
//! - observations and latest-value snapshots (`Observation`, `IndicatorSnapshot`)
//! - derived metrics (`TrendResult`, `ComparisonSet`, `EventImpact`, `Summary`)
//! - regime classification labels and inputs (`Regime`, `RegimeInputs`)

pub mod types;

pub use types::*;
