//! Error types
//!
//! Scheduling, advising, and aggregation are total over their input domain and
//! never return errors. The types here cover the two places a host can hand the
//! core bad data: boundary validation of records and configuration loading.

use chrono::{DateTime, Utc};

/// A record that violates the data-model invariants.
///
/// Returned by [`crate::ReviewableItem::validate`] and
/// [`crate::LearningMetrics::validate`]. The core operations never produce or
/// check these themselves; hosts call `validate()` where data enters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("item {id}: review count is {count} but it has never been reviewed")]
    CountWithoutTimestamp { id: String, count: u32 },

    #[error("item {id}: has a last-reviewed timestamp but a review count of 0")]
    TimestampWithoutCount { id: String },

    #[error("item {id}: next review {next} is before last review {last}")]
    NextBeforeLast {
        id: String,
        next: DateTime<Utc>,
        last: DateTime<Utc>,
    },

    #[error("item {id}: correct streak {streak} exceeds review count {count}")]
    StreakExceedsCount { id: String, streak: u32, count: u32 },

    #[error("item {id}: learned items must not have a next review scheduled")]
    LearnedButScheduled { id: String },

    #[error("correct answer rate {0} is outside [0, 1]")]
    RateOutOfRange(f64),
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Environment variable {var} has unusable value {value:?}")]
    Env { var: &'static str, value: String },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
