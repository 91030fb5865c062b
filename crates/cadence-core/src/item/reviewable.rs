//! Reviewable Item - The unit of scheduling
//!
//! Each item represents one card (a word, phrase, or question) with:
//! - Review history counters
//! - The last and next review timestamps
//! - Mastery state
//! - Topic tags used to attribute mistakes
//!
//! Items are created by the host and only ever advanced through
//! [`crate::ReviewScheduler::record_review`], which returns a new value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ============================================================================
// REVIEWABLE ITEM
// ============================================================================

/// A card tracked by the review scheduler
///
/// Invariants (checked by [`ReviewableItem::validate`], never enforced by the
/// scheduler itself):
/// - `review_count == 0` iff `last_reviewed_at` is `None`
/// - `next_review_at >= last_reviewed_at` when both are present
/// - `consecutive_correct <= review_count`
/// - learned items have no `next_review_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewableItem {
    /// Opaque, host-assigned identifier
    pub id: String,
    /// True once the item reached mastery and left the review rotation
    #[serde(default)]
    pub learned: bool,
    /// Number of recorded reviews, correct or not
    #[serde(default)]
    pub review_count: u32,
    /// When the item was last reviewed; `None` means never
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    /// When the item is next due; `None` means due immediately (or retired, if learned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_at: Option<DateTime<Utc>>,
    /// Correct answers since the last miss
    #[serde(default)]
    pub consecutive_correct: u32,
    /// Topic labels (e.g. "verbs", "articles")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ReviewableItem {
    /// Create a never-reviewed item with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            learned: false,
            review_count: 0,
            last_reviewed_at: None,
            next_review_at: None,
            consecutive_correct: 0,
            tags: vec![],
        }
    }

    /// Create a never-reviewed item with a fresh UUID v4 id
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Builder-style tag assignment
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check if this item is due at `now`
    ///
    /// Due iff no next review is set, or the next review is at or before `now`.
    /// Learned items are retired from the rotation and never due.
    #[inline]
    pub fn is_due_at(&self, now: DateTime<Utc>) -> bool {
        !self.learned && self.next_review_at.map(|t| t <= now).unwrap_or(true)
    }

    /// Check if the item has ever been reviewed
    #[inline]
    pub fn is_new(&self) -> bool {
        self.review_count == 0
    }

    /// Check the record against the data-model invariants
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (self.review_count, self.last_reviewed_at) {
            (0, Some(_)) => {
                return Err(ValidationError::TimestampWithoutCount {
                    id: self.id.clone(),
                });
            }
            (count, None) if count > 0 => {
                return Err(ValidationError::CountWithoutTimestamp {
                    id: self.id.clone(),
                    count,
                });
            }
            _ => {}
        }

        if let (Some(next), Some(last)) = (self.next_review_at, self.last_reviewed_at) {
            if next < last {
                return Err(ValidationError::NextBeforeLast {
                    id: self.id.clone(),
                    next,
                    last,
                });
            }
        }

        if self.consecutive_correct > self.review_count {
            return Err(ValidationError::StreakExceedsCount {
                id: self.id.clone(),
                streak: self.consecutive_correct,
                count: self.review_count,
            });
        }

        if self.learned && self.next_review_at.is_some() {
            return Err(ValidationError::LearnedButScheduled {
                id: self.id.clone(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
