//! Shared domain types.
//!
//! Everything here derives `Serialize` so the CLI can emit results as JSON
//! without a separate response layer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated value of a series.
///
/// `value` is `None` when upstream reported the missing-value token. It is
/// never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl Observation {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// Latest known observation for a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub series_id: String,
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Three-way classification of a percent change around a ±0.1% deadband.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Percent changes strictly inside this band are `Flat`.
    pub const DEADBAND_PCT: f64 = 0.1;

    pub fn from_percent_change(percent_change: f64) -> Self {
        if percent_change > Self::DEADBAND_PCT {
            Direction::Up
        } else if percent_change < -Self::DEADBAND_PCT {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Flat => "flat",
        }
    }
}

/// Derived trend metrics over a window of observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub series_id: String,
    /// Rounded to 2 decimals.
    pub percent_change: f64,
    /// Mean step between kept observations, rounded to 2 decimals.
    pub avg_monthly_change: f64,
    pub direction: Direction,
}

/// One row of a comparison set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub latest: f64,
    pub percent_change: f64,
    pub direction: Direction,
}

/// Series id → comparison row. Keyed (and ordered) by series id.
pub type ComparisonSet = BTreeMap<String, ComparisonEntry>;

/// Coarse macroeconomic state label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Tightening,
    Expansion,
    Stagnation,
    Neutral,
    Unknown,
}

impl Regime {
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Tightening => "tightening",
            Regime::Expansion => "expansion",
            Regime::Stagnation => "stagnation",
            Regime::Neutral => "neutral",
            Regime::Unknown => "unknown",
        }
    }
}

/// Latest values of the four indicators the regime rules read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegimeInputs {
    pub inflation: Option<f64>,
    pub unemployment: Option<f64>,
    pub output_growth: Option<f64>,
    pub policy_rate: Option<f64>,
}

/// FRED series ids backing each regime input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeSeries {
    pub inflation: String,
    pub unemployment: String,
    pub output_growth: String,
    pub policy_rate: String,
}

impl Default for RegimeSeries {
    fn default() -> Self {
        Self {
            // 5-year breakeven inflation, percent.
            inflation: "T5YIE".to_string(),
            unemployment: "UNRATE".to_string(),
            // Real GDP, percent change from preceding period (SAAR).
            output_growth: "A191RL1Q225SBEA".to_string(),
            policy_rate: "FEDFUNDS".to_string(),
        }
    }
}

/// Classified regime plus the inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeReport {
    pub regime: Regime,
    pub series: RegimeSeries,
    pub inputs: RegimeInputs,
}

/// Before/after values around an event date for one series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesImpact {
    pub before: Option<f64>,
    pub after: Option<f64>,
    pub percent_change: Option<f64>,
}

/// Parameters of an event-impact query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub event_date: NaiveDate,
    pub months_before: u32,
    pub months_after: u32,
}

/// Event-impact result: the resolved target dates plus one row per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventImpact {
    pub event_date: NaiveDate,
    pub before_target: NaiveDate,
    pub after_target: NaiveDate,
    pub impacts: BTreeMap<String, SeriesImpact>,
}

/// One headline indicator in the summary view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub series_id: String,
    pub label: String,
    pub latest: Option<IndicatorSnapshot>,
    pub trend: Option<TrendResult>,
}

/// Curated snapshot of headline indicators, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub window_months: usize,
    pub entries: Vec<SummaryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_deadband_is_exclusive() {
        assert_eq!(Direction::from_percent_change(0.1), Direction::Flat);
        assert_eq!(Direction::from_percent_change(-0.1), Direction::Flat);
        assert_eq!(Direction::from_percent_change(0.1000001), Direction::Up);
        assert_eq!(Direction::from_percent_change(-0.1000001), Direction::Down);
        assert_eq!(Direction::from_percent_change(0.0), Direction::Flat);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Regime::Stagnation).unwrap(), "\"stagnation\"");
    }
}
