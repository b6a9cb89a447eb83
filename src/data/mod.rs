//! Observation sources: the trait the analytics consume, the live FRED client,
//! and an in-memory source for fixtures.

pub mod fred;
pub mod memory;
pub mod source;

pub use fred::FredClient;
pub use memory::MemorySource;
pub use source::{MISSING_TOKEN, ObservationSource, RawObservation, parse_observation, parse_observations};
