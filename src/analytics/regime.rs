//! Rule-based macro regime classification.

use crate::analytics::latest::latest_observation;
use crate::data::ObservationSource;
use crate::domain::{Regime, RegimeInputs, RegimeReport, RegimeSeries};

const TIGHTENING_INFLATION: f64 = 3.0;
const TIGHTENING_POLICY_RATE: f64 = 3.0;
const EXPANSION_GROWTH: f64 = 2.5;
const EXPANSION_UNEMPLOYMENT: f64 = 4.0;
const STAGNATION_GROWTH: f64 = 1.0;
const STAGNATION_UNEMPLOYMENT: f64 = 5.0;

/// Classify the regime from the four indicator values.
///
/// Rules are checked in order and the first match wins: the conditions
/// overlap, so tightening takes precedence over expansion over stagnation.
pub fn classify_regime(inputs: &RegimeInputs) -> Regime {
    let (Some(inflation), Some(unemployment), Some(growth), Some(policy_rate)) = (
        inputs.inflation,
        inputs.unemployment,
        inputs.output_growth,
        inputs.policy_rate,
    ) else {
        return Regime::Unknown;
    };

    if inflation > TIGHTENING_INFLATION && policy_rate > TIGHTENING_POLICY_RATE {
        Regime::Tightening
    } else if growth > EXPANSION_GROWTH && unemployment < EXPANSION_UNEMPLOYMENT {
        Regime::Expansion
    } else if growth < STAGNATION_GROWTH && unemployment > STAGNATION_UNEMPLOYMENT {
        Regime::Stagnation
    } else {
        Regime::Neutral
    }
}

/// Fetch the latest value of each configured indicator and classify.
///
/// A failed lookup or a missing latest value leaves that input empty, which
/// classifies as `Unknown`.
pub fn current_regime<S>(source: &S, series: &RegimeSeries) -> RegimeReport
where
    S: ObservationSource + ?Sized,
{
    let latest = |id: &str| match latest_observation(source, id) {
        Ok(snapshot) => snapshot.value,
        Err(err) => {
            tracing::warn!(series_id = %id, error = %err, "regime input unavailable");
            None
        }
    };
    let ((inflation, unemployment), (output_growth, policy_rate)) = rayon::join(
        || rayon::join(|| latest(series.inflation.as_str()), || latest(series.unemployment.as_str())),
        || rayon::join(|| latest(series.output_growth.as_str()), || latest(series.policy_rate.as_str())),
    );

    let inputs = RegimeInputs {
        inflation,
        unemployment,
        output_growth,
        policy_rate,
    };

    RegimeReport {
        regime: classify_regime(&inputs),
        series: series.clone(),
        inputs,
    }
}
