//! Interval arithmetic
//!
//! Exponential backoff spacing: `base * growth^(n - 1)`, capped.

use chrono::Duration;

/// Capped exponential interval for the `review_count`-th review.
///
/// The first review (`review_count <= 1`) gets exactly `base`. Overflow of the
/// float power saturates at `max`.
pub fn backoff_interval(base: Duration, growth_factor: f64, max: Duration, review_count: u32) -> Duration {
    if base >= max {
        return max;
    }

    let exponent = i32::try_from(review_count.saturating_sub(1)).unwrap_or(i32::MAX);
    let base_ms = base.num_milliseconds() as f64;
    let max_ms = max.num_milliseconds() as f64;

    let scaled = base_ms * growth_factor.powi(exponent);
    if !scaled.is_finite() || scaled >= max_ms {
        return max;
    }

    Duration::milliseconds(scaled.round() as i64)
}

/// Format an interval as a compact human-readable label
///
/// `now`, `10m`, `3h`, `1d`, `2w`, `3mo`, `1y`. Negative intervals read as `now`.
pub fn format_interval(interval: Duration) -> String {
    let minutes = interval.num_minutes();
    if minutes <= 0 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = interval.num_hours();
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = interval.num_days();
    if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
