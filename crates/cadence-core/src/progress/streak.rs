//! Daily review streak

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};

/// Default number of days walked back when counting a streak
pub const DEFAULT_STREAK_LOOKBACK_DAYS: u32 = 30;

/// Consecutive days with at least one review, ending at `today`
///
/// Walks backward from `today` one UTC calendar day at a time and stops at the
/// first day without a review or after `lookback_days` days. Returns 0 when
/// there was no review on `today`. Review dates after `today` are ignored.
pub fn compute_streak(review_dates: &[DateTime<Utc>], today: NaiveDate, lookback_days: u32) -> u32 {
    let reviewed: HashSet<NaiveDate> = review_dates.iter().map(|d| d.date_naive()).collect();

    let mut streak = 0;
    let mut day = today;

    while streak < lookback_days && reviewed.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    streak
}
