//! Session metrics
//!
//! [`LearningMetrics`] is the typed snapshot the advisor reads. Hosts either
//! build one directly or let a [`SessionTracker`] accumulate it answer by answer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::item::ReviewableItem;

// ============================================================================
// LEARNING METRICS
// ============================================================================

/// Rolling performance for one study session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMetrics {
    /// Fraction of answers that were correct, in [0, 1]
    pub correct_answer_rate: f64,
    /// Correct answers since the last miss
    #[serde(default)]
    pub consecutive_correct_answers: u32,
    /// Questions answered so far this session
    #[serde(default)]
    pub attempted_questions: u32,
    /// Miss counts per topic label, in first-seen order
    #[serde(default)]
    pub mistake_patterns: IndexMap<String, u32>,
}

impl LearningMetrics {
    /// Check the rate is a finite fraction
    ///
    /// The advisor itself never clamps or rejects metrics; this is for hosts
    /// that build metrics from untrusted input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let rate = self.correct_answer_rate;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ValidationError::RateOutOfRange(rate));
        }
        Ok(())
    }
}

// ============================================================================
// SESSION TRACKER
// ============================================================================

/// Accumulates answers into [`LearningMetrics`]
///
/// Created at session start, fed each scored answer, and dropped at session
/// end. Owned by the host; nothing here is global.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    correct: u32,
    attempted: u32,
    streak: u32,
    mistakes: IndexMap<String, u32>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one answer
    ///
    /// A miss resets the streak and counts once against every topic given.
    pub fn record_answer<I, S>(&mut self, correct: bool, topics: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attempted = self.attempted.saturating_add(1);

        if correct {
            self.correct = self.correct.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            return;
        }

        self.streak = 0;
        for topic in topics {
            let count = self.mistakes.entry(topic.as_ref().to_string()).or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    /// Score an answer to `item`, attributing a miss to its tags
    pub fn record_item_answer(&mut self, item: &ReviewableItem, correct: bool) {
        self.record_answer(correct, &item.tags);
    }

    /// Snapshot of the session so far
    pub fn metrics(&self) -> LearningMetrics {
        let correct_answer_rate = if self.attempted == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempted as f64
        };

        LearningMetrics {
            correct_answer_rate,
            consecutive_correct_answers: self.streak,
            attempted_questions: self.attempted,
            mistake_patterns: self.mistakes.clone(),
        }
    }
}
