//! Derived analytics over observation sources.
//!
//! Every function here is stateless: inputs plus fetches in, typed result out.
//! Single-series operations return `Result<_, SeriesError>`; multi-series
//! operations absorb per-series failures so one bad series never spoils the
//! batch.

pub mod compare;
pub mod event;
pub mod latest;
pub mod regime;
pub mod summary;
pub mod trend;

pub use compare::compare_series;
pub use event::{MATCH_TOLERANCE_DAYS, analyze_event_impact, event_targets, impact_from_records};
pub use latest::latest_observation;
pub use regime::{classify_regime, current_regime};
pub use summary::{HEADLINE_SERIES, build_summary};
pub use trend::{DEFAULT_WINDOW_MONTHS, calculate_trend, compute_trend};
