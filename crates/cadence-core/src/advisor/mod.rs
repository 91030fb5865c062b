//! Difficulty Advisor Module
//!
//! Turns session metrics into a difficulty directive and a short list of topics
//! to drill.
//!
//! The decrease check runs first and short-circuits: a learner who just missed a
//! question (streak back at zero) is always told to ease off, however good the
//! overall rate looks.

mod level;
mod metrics;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use level::DifficultyLevel;
pub use metrics::{LearningMetrics, SessionTracker};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Rates strictly below this call for easier material
pub const DEFAULT_DECREASE_BELOW_RATE: f64 = 0.6;

/// Rates strictly above this (with streak and volume) call for harder material
pub const DEFAULT_INCREASE_ABOVE_RATE: f64 = 0.85;

/// Streak that must be exceeded before increasing
pub const DEFAULT_INCREASE_STREAK_ABOVE: u32 = 5;

/// Attempt count that must be exceeded before increasing
pub const DEFAULT_INCREASE_ATTEMPTS_ABOVE: u32 = 10;

/// Maximum number of focus topics returned
pub const MAX_FOCUS_TOPICS: usize = 3;

// ============================================================================
// TYPES
// ============================================================================

/// Advice on which way to move question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyDirective {
    Decrease,
    Maintain,
    Increase,
}

impl DifficultyDirective {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyDirective::Decrease => "decrease",
            DifficultyDirective::Maintain => "maintain",
            DifficultyDirective::Increase => "increase",
        }
    }
}

impl std::fmt::Display for DifficultyDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directive and focus topics in one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub directive: DifficultyDirective,
    pub focus: Vec<String>,
}

/// Thresholds for the advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisorConfig {
    pub decrease_below_rate: f64,
    pub increase_above_rate: f64,
    pub increase_streak_above: u32,
    pub increase_attempts_above: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            decrease_below_rate: DEFAULT_DECREASE_BELOW_RATE,
            increase_above_rate: DEFAULT_INCREASE_ABOVE_RATE,
            increase_streak_above: DEFAULT_INCREASE_STREAK_ABOVE,
            increase_attempts_above: DEFAULT_INCREASE_ATTEMPTS_ABOVE,
        }
    }
}

impl AdvisorConfig {
    /// Rates must be fractions and the decrease bound must not sit above the increase bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, rate) in [
            ("decreaseBelowRate", self.decrease_below_rate),
            ("increaseAboveRate", self.increase_above_rate),
        ] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be within [0, 1], got {}", rate),
                });
            }
        }
        if self.decrease_below_rate > self.increase_above_rate {
            return Err(ConfigError::Invalid {
                field: "decreaseBelowRate",
                reason: "must not exceed increaseAboveRate".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// DIFFICULTY ADVISOR
// ============================================================================

/// Stateless difficulty advisor
#[derive(Debug, Clone, Default)]
pub struct DifficultyAdvisor {
    config: AdvisorConfig,
}

impl DifficultyAdvisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom thresholds
    pub fn with_config(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Recommend a difficulty trend
    ///
    /// Metrics are taken as given: no clamping, no validation.
    pub fn assess_performance(&self, metrics: &LearningMetrics) -> DifficultyDirective {
        let cfg = &self.config;

        if metrics.correct_answer_rate < cfg.decrease_below_rate
            || metrics.consecutive_correct_answers == 0
        {
            return DifficultyDirective::Decrease;
        }

        if metrics.correct_answer_rate > cfg.increase_above_rate
            && metrics.consecutive_correct_answers > cfg.increase_streak_above
            && metrics.attempted_questions > cfg.increase_attempts_above
        {
            return DifficultyDirective::Increase;
        }

        DifficultyDirective::Maintain
    }

    /// Up to three topic labels with the most mistakes
    ///
    /// Sorted by count descending; equal counts keep their insertion order.
    pub fn recommend_focus(&self, metrics: &LearningMetrics) -> Vec<String> {
        let mut ranked: Vec<(&String, u32)> = metrics
            .mistake_patterns
            .iter()
            .map(|(topic, count)| (topic, *count))
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(MAX_FOCUS_TOPICS)
            .map(|(topic, _)| topic.clone())
            .collect()
    }

    /// Directive and focus topics together
    pub fn advise(&self, metrics: &LearningMetrics) -> Advice {
        let advice = Advice {
            directive: self.assess_performance(metrics),
            focus: self.recommend_focus(metrics),
        };

        tracing::debug!(
            directive = %advice.directive,
            focus = ?advice.focus,
            attempted = metrics.attempted_questions,
            "Assessed session"
        );

        advice
    }
}

// ============================================================================
// TESTS
// ============================================================================
