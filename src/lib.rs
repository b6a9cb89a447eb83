//! `fred-macro` library crate.
//!
//! The binary (`macro`) is a thin wrapper around this library so that:
//!
//! - the analytics are testable without spawning processes or hitting FRED
//! - the observation source is swappable (live client, fixture file, test double)

pub mod analytics;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod logging;
pub mod report;
