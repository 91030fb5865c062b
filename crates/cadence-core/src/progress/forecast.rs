//! Upcoming review workload

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::item::ReviewableItem;

/// Number of items coming due on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub due: usize,
}

/// Widest forecast window, in days
pub const MAX_FORECAST_DAYS: u32 = 366;

/// Per-day due counts for the `days` UTC calendar days starting at `now`
///
/// Learned items are excluded. Overdue and never-scheduled items land on day 0.
/// Items due beyond the window are not counted. Windows wider than
/// [`MAX_FORECAST_DAYS`] are truncated to it.
pub fn review_forecast(items: &[ReviewableItem], now: DateTime<Utc>, days: u32) -> Vec<ForecastDay> {
    let today = now.date_naive();
    let mut counts = vec![0usize; days.min(MAX_FORECAST_DAYS) as usize];

    if counts.is_empty() {
        return Vec::new();
    }

    for item in items.iter().filter(|item| !item.learned) {
        let offset = match item.next_review_at {
            None => 0,
            Some(next) => (next.date_naive() - today).num_days().max(0),
        };

        if let Some(slot) = usize::try_from(offset).ok().and_then(|i| counts.get_mut(i)) {
            *slot += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(offset, due)| ForecastDay {
            date: today + Duration::days(offset as i64),
            due,
        })
        .collect()
}
