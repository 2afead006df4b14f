//! Aggregation of calendar and worked-day state into report data.
//!
//! The aggregator functions are pure: they are recomputed from the current
//! period and worked days on every call and hold no state of their own.

pub mod aggregator;
pub mod data;

pub use aggregator::{classify, days_info, summary, worked_only};
pub use data::ReportData;
