//! Command-line parsing for the FRED macro analytics tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! analytics; `app` turns these structs into calls.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::analytics::DEFAULT_WINDOW_MONTHS;
use crate::domain::RegimeSeries;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "macro", version, about = "Macroeconomic indicator analytics (FRED-based)")]
pub struct Cli {
    /// Read observations from a JSON fixture instead of the FRED API.
    #[arg(long, global = true, value_name = "JSON")]
    pub fixture: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Default log filter when RUST_LOG is unset (logs go to stderr).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Latest observation of one series.
    Indicator(IndicatorArgs),
    /// Percent change, average step and direction over a trailing window.
    Trend(TrendArgs),
    /// Latest value and trend side by side for several series.
    Compare(CompareArgs),
    /// Curated headline indicators with latest values and trends.
    Summary(WindowArgs),
    /// Classify the current macro regime from four indicators.
    Regime(RegimeArgs),
    /// Before/after shift of several series around an event date.
    EventImpact(EventArgs),
}

#[derive(Debug, Args)]
pub struct IndicatorArgs {
    /// FRED series id, e.g. CPIAUCSL.
    pub series: String,
}

#[derive(Debug, Args, Clone, Copy)]
pub struct WindowArgs {
    /// Number of most recent observations in the trend window.
    #[arg(
        short = 'm',
        long,
        default_value_t = DEFAULT_WINDOW_MONTHS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub months: usize,
}

#[derive(Debug, Args)]
pub struct TrendArgs {
    /// FRED series id.
    pub series: String,

    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// FRED series ids to compare.
    #[arg(required = true, num_args = 1..)]
    pub series: Vec<String>,

    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Debug, Args)]
pub struct RegimeArgs {
    /// Inflation proxy series (percent).
    #[arg(long, default_value = "T5YIE")]
    pub inflation: String,

    /// Unemployment rate series (percent).
    #[arg(long, default_value = "UNRATE")]
    pub unemployment: String,

    /// Output growth series (percent).
    #[arg(long, default_value = "A191RL1Q225SBEA")]
    pub growth: String,

    /// Policy rate series (percent).
    #[arg(long, default_value = "FEDFUNDS")]
    pub policy_rate: String,
}

impl RegimeArgs {
    pub fn to_series(&self) -> RegimeSeries {
        RegimeSeries {
            inflation: self.inflation.clone(),
            unemployment: self.unemployment.clone(),
            output_growth: self.growth.clone(),
            policy_rate: self.policy_rate.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct EventArgs {
    /// FRED series ids to measure.
    #[arg(required = true, num_args = 1..)]
    pub series: Vec<String>,

    /// Event date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    /// Whole calendar months before the event for the "before" reading.
    #[arg(long, default_value_t = 3)]
    pub months_before: u32,

    /// Whole calendar months after the event for the "after" reading.
    #[arg(long, default_value_t = 3)]
    pub months_after: u32,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_event_impact() {
        let cli = Cli::try_parse_from([
            "macro",
            "event-impact",
            "UNRATE",
            "CPIAUCSL",
            "--date",
            "2020-03-15",
            "--months-after",
            "6",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Command::EventImpact(args) = cli.command else {
            panic!("expected event-impact");
        };
        assert_eq!(args.series, vec!["UNRATE", "CPIAUCSL"]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2020, 3, 15).unwrap());
        assert_eq!(args.months_before, 3);
        assert_eq!(args.months_after, 6);
    }

    #[test]
    fn regime_defaults_match_domain_defaults() {
        let cli = Cli::try_parse_from(["macro", "regime"]).unwrap();
        let Command::Regime(args) = cli.command else {
            panic!("expected regime");
        };
        assert_eq!(args.to_series(), RegimeSeries::default());
    }

    #[test]
    fn trend_window_defaults_to_twelve() {
        let cli = Cli::try_parse_from(["macro", "trend", "CPIAUCSL"]).unwrap();
        let Command::Trend(args) = cli.command else {
            panic!("expected trend");
        };
        assert_eq!(args.window.months, 12);
    }

    #[test]
    fn zero_window_is_a_usage_error() {
        for cmd in ["trend", "compare"] {
            let err = Cli::try_parse_from(["macro", cmd, "UNRATE", "--months", "0"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
        let err = Cli::try_parse_from(["macro", "summary", "-m", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["macro", "summary", "-m", "1"]).unwrap();
        let Command::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(args.months, 1);
    }
}
