//! Aggregation of extracted records
//!
//! This module computes the grouped counts, means, correlations and
//! density estimates the dashboard charts are drawn from.

pub mod aggregates;
pub mod stats;

// Re-export commonly used items
pub use aggregates::{
    ActionTable, Aggregates, CorrelationMatrix, HourGroup, PeriodGroup, Summary,
};
pub use stats::BoxStats;
