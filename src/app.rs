//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs logging
//! - builds the observation source (live FRED client or fixture)
//! - runs the requested analytic and prints text or JSON

use std::path::Path;

use clap::Parser;
use serde::Serialize;

use crate::analytics;
use crate::cli::{Cli, Command, CompareArgs, EventArgs, IndicatorArgs, RegimeArgs, TrendArgs, WindowArgs};
use crate::data::{FredClient, MemorySource, ObservationSource};
use crate::domain::EventWindow;
use crate::error::AppError;
use crate::report;

/// Entry point for the `macro` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init_tracing(&cli.log_level)?;

    let source = open_source(cli.fixture.as_deref())?;
    let output = execute(&cli.command, source.as_ref(), cli.json)?;
    print!("{output}");
    Ok(())
}

/// Live FRED client unless a fixture file was given.
pub fn open_source(fixture: Option<&Path>) -> Result<Box<dyn ObservationSource>, AppError> {
    match fixture {
        Some(path) => {
            tracing::info!(path = %path.display(), "using fixture observations");
            Ok(Box::new(MemorySource::from_json_file(path)?))
        }
        None => Ok(Box::new(FredClient::from_env()?)),
    }
}

/// Run one command against `source` and return the rendered output.
pub fn execute(command: &Command, source: &dyn ObservationSource, json: bool) -> Result<String, AppError> {
    match command {
        Command::Indicator(args) => handle_indicator(args, source, json),
        Command::Trend(args) => handle_trend(args, source, json),
        Command::Compare(args) => handle_compare(args, source, json),
        Command::Summary(args) => handle_summary(*args, source, json),
        Command::Regime(args) => handle_regime(args, source, json),
        Command::EventImpact(args) => handle_event(args, source, json),
    }
}

fn handle_indicator(args: &IndicatorArgs, source: &dyn ObservationSource, json: bool) -> Result<String, AppError> {
    let snapshot = analytics::latest_observation(source, &args.series).map_err(|err| {
        tracing::info!(series_id = %args.series, error = %err, "indicator lookup failed");
        AppError::new(3, format!("Series {} not found or no data ({err}).", args.series))
    })?;
    render(json, &snapshot, report::format_indicator)
}

fn handle_trend(args: &TrendArgs, source: &dyn ObservationSource, json: bool) -> Result<String, AppError> {
    let months = args.window.months;
    let trend = analytics::calculate_trend(source, &args.series, months)?;
    render(json, &trend, |t| report::format_trend(t, months))
}

fn handle_compare(args: &CompareArgs, source: &dyn ObservationSource, json: bool) -> Result<String, AppError> {
    let set = analytics::compare_series(source, &args.series, args.window.months);
    render(json, &set, report::format_comparison)
}

fn handle_summary(args: WindowArgs, source: &dyn ObservationSource, json: bool) -> Result<String, AppError> {
    let summary = analytics::build_summary(source, args.months);
    render(json, &summary, report::format_summary)
}

fn handle_regime(args: &RegimeArgs, source: &dyn ObservationSource, json: bool) -> Result<String, AppError> {
    let regime = analytics::current_regime(source, &args.to_series());
    render(json, &regime, report::format_regime)
}

fn handle_event(args: &EventArgs, source: &dyn ObservationSource, json: bool) -> Result<String, AppError> {
    let window = EventWindow {
        event_date: args.date,
        months_before: args.months_before,
        months_after: args.months_after,
    };
    let impact = analytics::analyze_event_impact(source, &args.series, &window)?;
    render(json, &impact, report::format_event_impact)
}

fn render<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<String, AppError> {
    if json {
        Ok(format!("{}\n", report::to_json(value)?))
    } else {
        Ok(text(value))
    }
}
