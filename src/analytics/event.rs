//! Before/after impact of an event date on a set of series.
//!
//! For each series we look for the observation nearest `event - months_before`
//! and `event + months_after`. Monthly and quarterly series rarely land on the
//! exact target day, so any observation within `MATCH_TOLERANCE_DAYS` counts.

use chrono::{Months, NaiveDate};
use rayon::prelude::*;

use crate::data::{ObservationSource, RawObservation, parse_observations};
use crate::domain::{EventImpact, EventWindow, SeriesImpact};
use crate::error::{AppError, SeriesError};

pub const MATCH_TOLERANCE_DAYS: i64 = 20;

/// Resolve the before/after target dates using calendar-month arithmetic.
///
/// Day-of-month is clamped (e.g. 31 March minus one month is 29 February in a
/// leap year).
pub fn event_targets(window: &EventWindow) -> Result<(NaiveDate, NaiveDate), AppError> {
    let before = window
        .event_date
        .checked_sub_months(Months::new(window.months_before))
        .ok_or_else(|| AppError::new(2, "months_before moves the window out of the supported date range."))?;
    let after = window
        .event_date
        .checked_add_months(Months::new(window.months_after))
        .ok_or_else(|| AppError::new(2, "months_after moves the window out of the supported date range."))?;
    Ok((before, after))
}

/// Measure the shift of each series across the event window.
///
/// Every requested series gets a row. Fetch failures, empty windows and
/// malformed data all produce a row with empty fields.
pub fn analyze_event_impact<S>(source: &S, series_ids: &[String], window: &EventWindow) -> Result<EventImpact, AppError>
where
    S: ObservationSource + ?Sized,
{
    let (before_target, after_target) = event_targets(window)?;

    let impacts = series_ids
        .par_iter()
        .map(|id| {
            let impact = source
                .fetch_ranged(id, before_target, after_target)
                .and_then(|raws| impact_from_records(&raws, before_target, after_target))
                .unwrap_or_else(|err| {
                    tracing::warn!(series_id = %id, error = %err, "event impact unavailable");
                    SeriesImpact::default()
                });
            (id.clone(), impact)
        })
        .collect();

    Ok(EventImpact {
        event_date: window.event_date,
        before_target,
        after_target,
        impacts,
    })
}

/// Pick the before/after values from one series' records.
///
/// Records are scanned once in the order given; when several fall within
/// tolerance of a target the last one scanned wins, even if its value is the
/// missing token.
pub fn impact_from_records(
    records: &[RawObservation],
    before_target: NaiveDate,
    after_target: NaiveDate,
) -> Result<SeriesImpact, SeriesError> {
    let observations = parse_observations(records)?;

    let mut before = None;
    let mut after = None;
    for obs in &observations {
        if within_tolerance(obs.date, before_target) {
            before = obs.value;
        }
        if within_tolerance(obs.date, after_target) {
            after = obs.value;
        }
    }

    let percent_change = match (before, after) {
        (Some(b), Some(a)) if b != 0.0 => Some((a - b) / b * 100.0).filter(|pct| pct.is_finite()),
        _ => None,
    };

    Ok(SeriesImpact {
        before,
        after,
        percent_change,
    })
}

fn within_tolerance(date: NaiveDate, target: NaiveDate) -> bool {
    (date - target).num_days().abs() <= MATCH_TOLERANCE_DAYS
}
