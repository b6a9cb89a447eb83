//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the analytics stay free of presentation concerns
//! - output changes are localized

use serde::Serialize;

use crate::domain::{ComparisonSet, EventImpact, IndicatorSnapshot, RegimeReport, Summary, TrendResult};
use crate::error::AppError;

/// Pretty JSON for any result type.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::new(4, format!("Failed to encode JSON: {e}")))
}

pub fn format_indicator(snapshot: &IndicatorSnapshot) -> String {
    format!(
        "{} @ {}: {}\n",
        snapshot.series_id,
        snapshot.date,
        fmt_opt(snapshot.value)
    )
}

pub fn format_trend(trend: &TrendResult, months: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Trend: {} (last {months} obs) ===\n", trend.series_id));
    out.push_str(&format!("Change:     {:+.2}%\n", trend.percent_change));
    out.push_str(&format!("Avg step:   {:+.2}\n", trend.avg_monthly_change));
    out.push_str(&format!("Direction:  {}\n", trend.direction.as_str()));
    out
}

pub fn format_comparison(set: &ComparisonSet) -> String {
    if set.is_empty() {
        return "No series had enough data to compare.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{:<18} {:>12} {:>10} {:<5}\n", "series", "latest", "change%", "dir"));
    for (id, row) in set {
        out.push_str(&format!(
            "{:<18} {:>12.3} {:>+10.2} {:<5}\n",
            id,
            row.latest,
            row.percent_change,
            row.direction.as_str()
        ));
    }
    out
}

pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Macro summary (trend over {} obs) ===\n", summary.window_months));
    out.push_str(&format!(
        "{:<24} {:<16} {:<10} {:>10} {:>10} {:<5}\n",
        "indicator", "series", "date", "latest", "change%", "dir"
    ));

    for entry in &summary.entries {
        let (date, value) = match &entry.latest {
            Some(s) => (s.date.to_string(), fmt_opt(s.value)),
            None => ("-".to_string(), "n/a".to_string()),
        };
        let (change, dir) = match &entry.trend {
            Some(t) => (format!("{:+.2}", t.percent_change), t.direction.as_str()),
            None => ("n/a".to_string(), "-"),
        };
        out.push_str(&format!(
            "{:<24} {:<16} {:<10} {:>10} {:>10} {:<5}\n",
            entry.label, entry.series_id, date, value, change, dir
        ));
    }
    out
}

pub fn format_regime(report: &RegimeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Regime: {}\n", report.regime.as_str()));
    let rows = [
        ("inflation", &report.series.inflation, report.inputs.inflation),
        ("unemployment", &report.series.unemployment, report.inputs.unemployment),
        ("output growth", &report.series.output_growth, report.inputs.output_growth),
        ("policy rate", &report.series.policy_rate, report.inputs.policy_rate),
    ];
    for (label, id, value) in rows {
        out.push_str(&format!("- {label:<14} {id:<16} {}\n", fmt_opt(value)));
    }
    out
}

pub fn format_event_impact(impact: &EventImpact) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== Event {} (before ~{}, after ~{}) ===\n",
        impact.event_date, impact.before_target, impact.after_target
    ));
    out.push_str(&format!("{:<18} {:>12} {:>12} {:>10}\n", "series", "before", "after", "change%"));
    for (id, row) in &impact.impacts {
        out.push_str(&format!(
            "{:<18} {:>12} {:>12} {:>10}\n",
            id,
            fmt_opt(row.before),
            fmt_opt(row.after),
            row.percent_change
                .map(|v| format!("{v:+.2}"))
                .unwrap_or_else(|| "n/a".to_string()),
        ));
    }
    out
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.3}")).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{ComparisonEntry, Direction, SeriesImpact};

    #[test]
    fn indicator_shows_missing_as_na() {
        let snap = IndicatorSnapshot {
            series_id: "GDP".into(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            value: None,
        };
        assert_eq!(format_indicator(&snap), "GDP @ 2024-04-01: n/a\n");
    }

    #[test]
    fn comparison_rows_are_sorted_by_series() {
        let mut set = ComparisonSet::new();
        for (id, pct) in [("UNRATE", 5.0), ("CPIAUCSL", -0.05)] {
            set.insert(
                id.to_string(),
                ComparisonEntry {
                    latest: 1.0,
                    percent_change: pct,
                    direction: Direction::from_percent_change(pct),
                },
            );
        }
        let text = format_comparison(&set);
        let cpi = text.find("CPIAUCSL").unwrap();
        let unrate = text.find("UNRATE").unwrap();
        assert!(cpi < unrate);
        assert!(text.contains("flat"));
        assert!(format_comparison(&ComparisonSet::new()).contains("No series"));
    }

    #[test]
    fn event_impact_json_uses_null_for_absent() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let mut impacts = BTreeMap::new();
        impacts.insert("X".to_string(), SeriesImpact::default());
        let impact = EventImpact {
            event_date: date,
            before_target: date,
            after_target: date,
            impacts,
        };
        let json: serde_json::Value = serde_json::from_str(&to_json(&impact).unwrap()).unwrap();
        assert!(json["impacts"]["X"]["before"].is_null());
        assert!(json["impacts"]["X"]["percent_change"].is_null());
        assert_eq!(json["event_date"], "2020-03-01");
    }
}
