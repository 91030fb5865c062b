//! Review Scheduler Module
//!
//! Decides which items are due and advances an item's schedule after a review.
//!
//! ## Policy
//!
//! - **Miss**: the item drops out of mastery, its correct streak resets, and it
//!   comes back after a short same-session retry interval.
//! - **Hit**: the next review is pushed out by an exponentially growing interval,
//!   `base * growth^(review_count - 1)`, capped at a maximum.
//! - **Mastery**: once the review count exceeds the mastery threshold and the
//!   correct streak is long enough, the item is marked learned and gets no next
//!   review. It stays reviewable on demand.
//!
//! All operations are pure. The caller supplies `now`; nothing here reads a clock.

mod interval;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::item::ReviewableItem;

pub use interval::{backoff_interval, format_interval};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default delay before a missed item is due again (same-session retry)
pub const DEFAULT_RETRY_MINUTES: i64 = 10;

/// Default interval after the first correct review
pub const DEFAULT_BASE_INTERVAL_HOURS: i64 = 24;

/// Default multiplier applied per additional review
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Default ceiling on any single interval
pub const DEFAULT_MAX_INTERVAL_DAYS: i64 = 180;

/// Review count that must be exceeded before an item can be learned
pub const DEFAULT_MASTERY_THRESHOLD: u32 = 5;

/// Consecutive correct answers required at mastery time
pub const DEFAULT_MASTERY_STREAK: u32 = 3;

/// Longest interval any config may ask for (about a century)
pub const MAX_CONFIGURABLE_INTERVAL_DAYS: i64 = 36_500;

// ============================================================================
// SCHEDULER CONFIG
// ============================================================================

/// Tunable constants for the review scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    /// Delay before a missed item is due again
    pub retry_interval_minutes: i64,
    /// Interval after the first correct review
    pub base_interval_hours: i64,
    /// Multiplier applied per additional review (>= 1.0)
    pub growth_factor: f64,
    /// Ceiling on any single interval
    pub max_interval_days: i64,
    /// Review count that must be exceeded before mastery
    pub mastery_threshold: u32,
    /// Consecutive correct answers required at mastery time
    pub mastery_streak: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            retry_interval_minutes: DEFAULT_RETRY_MINUTES,
            base_interval_hours: DEFAULT_BASE_INTERVAL_HOURS,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_interval_days: DEFAULT_MAX_INTERVAL_DAYS,
            mastery_threshold: DEFAULT_MASTERY_THRESHOLD,
            mastery_streak: DEFAULT_MASTERY_STREAK,
        }
    }
}

impl SchedulerConfig {
    /// Retry delay as a duration
    pub fn retry_interval(&self) -> Duration {
        Duration::minutes(self.retry_interval_minutes)
    }

    /// Base interval as a duration
    pub fn base_interval(&self) -> Duration {
        Duration::hours(self.base_interval_hours)
    }

    /// Interval ceiling as a duration
    pub fn max_interval(&self) -> Duration {
        Duration::days(self.max_interval_days)
    }

    /// Reject values that would break the scheduling invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limit_days = MAX_CONFIGURABLE_INTERVAL_DAYS;

        if self.retry_interval_minutes < 0 {
            return Err(ConfigError::Invalid {
                field: "retryIntervalMinutes",
                reason: "must not be negative".to_string(),
            });
        }
        if self.retry_interval_minutes > limit_days * 24 * 60 {
            return Err(ConfigError::Invalid {
                field: "retryIntervalMinutes",
                reason: format!("must not exceed {} days", limit_days),
            });
        }
        if self.base_interval_hours <= 0 {
            return Err(ConfigError::Invalid {
                field: "baseIntervalHours",
                reason: "must be positive".to_string(),
            });
        }
        if self.base_interval_hours > limit_days * 24 {
            return Err(ConfigError::Invalid {
                field: "baseIntervalHours",
                reason: format!("must not exceed {} days", limit_days),
            });
        }
        if self.max_interval_days > limit_days {
            return Err(ConfigError::Invalid {
                field: "maxIntervalDays",
                reason: format!("must not exceed {}", limit_days),
            });
        }
        if !self.growth_factor.is_finite() || self.growth_factor < 1.0 {
            return Err(ConfigError::Invalid {
                field: "growthFactor",
                reason: format!("must be a finite number >= 1.0, got {}", self.growth_factor),
            });
        }
        if self.max_interval_days.saturating_mul(24) < self.base_interval_hours {
            return Err(ConfigError::Invalid {
                field: "maxIntervalDays",
                reason: "must not be shorter than the base interval".to_string(),
            });
        }
        if self.mastery_streak == 0 {
            return Err(ConfigError::Invalid {
                field: "masteryStreak",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// PREVIEW
// ============================================================================

/// The item state each review outcome would produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPreview {
    pub if_correct: ReviewableItem,
    pub if_incorrect: ReviewableItem,
}

// ============================================================================
// REVIEW SCHEDULER
// ============================================================================

/// Stateless review scheduler
///
/// Holds only its configuration, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct ReviewScheduler {
    config: SchedulerConfig,
}

impl ReviewScheduler {
    /// Create a scheduler with default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Items due at `now`, in input order
    pub fn select_due(&self, items: &[ReviewableItem], now: DateTime<Utc>) -> Vec<ReviewableItem> {
        select_due(items, now)
    }

    /// Interval granted for a correct answer that brings the count to `review_count`
    pub fn interval_for(&self, review_count: u32) -> Duration {
        backoff_interval(
            self.config.base_interval(),
            self.config.growth_factor,
            self.config.max_interval(),
            review_count,
        )
    }

    /// Apply one review outcome and return the updated item
    ///
    /// The input is not modified. Deterministic in `(item, was_correct, now)`.
    pub fn record_review(
        &self,
        item: &ReviewableItem,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> ReviewableItem {
        let mut next = item.clone();
        next.review_count = item.review_count.saturating_add(1);
        next.last_reviewed_at = Some(now);

        if !was_correct {
            next.learned = false;
            next.consecutive_correct = 0;
            next.next_review_at = Some(now + self.config.retry_interval());
        } else {
            next.consecutive_correct = item.consecutive_correct.saturating_add(1);

            if self.reaches_mastery(&next) {
                next.learned = true;
                next.next_review_at = None;
            } else {
                next.next_review_at = Some(now + self.interval_for(next.review_count));
            }
        }

        tracing::debug!(
            item_id = %next.id,
            was_correct,
            review_count = next.review_count,
            learned = next.learned,
            next_review_at = ?next.next_review_at,
            "Recorded review"
        );

        next
    }

    /// What each outcome would do to `item` if reviewed at `now`
    pub fn preview(&self, item: &ReviewableItem, now: DateTime<Utc>) -> ReviewPreview {
        ReviewPreview {
            if_correct: self.record_review(item, true, now),
            if_incorrect: self.record_review(item, false, now),
        }
    }

    fn reaches_mastery(&self, item: &ReviewableItem) -> bool {
        item.review_count > self.config.mastery_threshold
            && item.consecutive_correct >= self.config.mastery_streak
    }
}

/// Items due at `now`, in input order
///
/// An item is due iff it is not learned and its `next_review_at` is absent or
/// `<= now`. Learned items carry no next review but stay out of the rotation
/// until a miss brings them back.
pub fn select_due(items: &[ReviewableItem], now: DateTime<Utc>) -> Vec<ReviewableItem> {
    let due: Vec<ReviewableItem> = items
        .iter()
        .filter(|item| item.is_due_at(now))
        .cloned()
        .collect();

    tracing::trace!(total = items.len(), due = due.len(), "Selected due items");
    due
}

// ============================================================================
// TESTS
// ============================================================================
