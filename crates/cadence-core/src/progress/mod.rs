//! Progress Aggregation
//!
//! Read-only views over a deck for dashboards:
//! - completion snapshot ([`calculate_progress`])
//! - due list ([`get_due_cards`])
//! - daily review streak ([`compute_streak`])
//! - upcoming workload ([`review_forecast`])

mod forecast;
mod streak;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::ReviewableItem;
use crate::scheduler::select_due;

pub use forecast::{review_forecast, ForecastDay, MAX_FORECAST_DAYS};
pub use streak::{compute_streak, DEFAULT_STREAK_LOOKBACK_DAYS};

/// Completion snapshot for a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyProgress {
    pub total_cards: usize,
    pub learned_cards: usize,
    /// Items still in the review rotation (not learned)
    pub to_review_cards: usize,
    /// `round(learned / total * 100)`, 0 for an empty deck
    pub completion_percentage: u8,
}

/// Summarize a deck
pub fn calculate_progress(items: &[ReviewableItem]) -> StudyProgress {
    let total_cards = items.len();
    let learned_cards = items.iter().filter(|item| item.learned).count();

    let completion_percentage = if total_cards == 0 {
        0
    } else {
        ((learned_cards as f64 / total_cards as f64) * 100.0).round() as u8
    };

    StudyProgress {
        total_cards,
        learned_cards,
        to_review_cards: total_cards - learned_cards,
        completion_percentage,
    }
}

/// Items due at `now`; same result as [`crate::select_due`]
pub fn get_due_cards(items: &[ReviewableItem], now: DateTime<Utc>) -> Vec<ReviewableItem> {
    select_due(items, now)
}
