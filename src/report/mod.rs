//! Reporting utilities: text tables and JSON rendering of analytics results.

pub mod format;

pub use format::*;
