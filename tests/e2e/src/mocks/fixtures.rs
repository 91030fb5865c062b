//! Test Data Factory
//!
//! Provides utilities for generating realistic test data:
//! - Items in each scheduling state (new, scheduled, overdue, learned)
//! - Mixed decks for dashboard checks
//! - Session metrics and review-date histories

use cadence_core::{LearningMetrics, ReviewableItem};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Factory for creating test data
///
/// All timestamps are derived from an explicit reference time so tests stay
/// deterministic.
pub struct TestDataFactory;

/// A mixed deck with the expected classification of each item
#[derive(Debug, Clone)]
pub struct ScenarioDeck {
    pub items: Vec<ReviewableItem>,
    /// Ids due at the reference time, in deck order
    pub due_ids: Vec<String>,
    /// Ids not due at the reference time, in deck order
    pub upcoming_ids: Vec<String>,
    /// Ids marked learned
    pub learned_ids: Vec<String>,
}

const TOPICS: [&str; 5] = ["verbs", "nouns", "adjectives", "articles", "prepositions"];

impl TestDataFactory {
    /// A fixed reference instant (mid-morning UTC)
    pub fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 6, 9, 30, 0).unwrap()
    }

    /// `count` never-reviewed items, tagged round-robin with topics
    pub fn fresh_deck(count: usize) -> Vec<ReviewableItem> {
        (0..count)
            .map(|i| ReviewableItem::new(format!("card-{i}")).with_tags([TOPICS[i % TOPICS.len()]]))
            .collect()
    }

    /// An item reviewed `reviews` times (all correct), last at `last`, next due at `next`
    pub fn scheduled_item(id: &str, reviews: u32, last: DateTime<Utc>, next: DateTime<Utc>) -> ReviewableItem {
        let mut item = ReviewableItem::new(id);
        item.review_count = reviews.max(1);
        item.consecutive_correct = item.review_count.min(2);
        item.last_reviewed_at = Some(last);
        item.next_review_at = Some(next.max(last));
        item
    }

    /// A retired item
    pub fn learned_item(id: &str, last: DateTime<Utc>) -> ReviewableItem {
        let mut item = ReviewableItem::new(id);
        item.review_count = 6;
        item.consecutive_correct = 6;
        item.last_reviewed_at = Some(last);
        item.learned = true;
        item
    }

    /// A deck with new, overdue, due-exactly-now, upcoming, and learned items
    pub fn mixed_deck(now: DateTime<Utc>) -> ScenarioDeck {
        let items = vec![
            ReviewableItem::new("new-1"),
            Self::scheduled_item("overdue", 3, now - Duration::days(9), now - Duration::days(1)),
            Self::scheduled_item("upcoming-1", 2, now - Duration::hours(2), now + Duration::days(2)),
            Self::learned_item("learned-1", now - Duration::days(20)),
            Self::scheduled_item("due-now", 1, now - Duration::days(1), now),
            Self::scheduled_item("upcoming-2", 4, now, now + Duration::minutes(1)),
            ReviewableItem::new("new-2"),
        ];

        ScenarioDeck {
            items,
            due_ids: ["new-1", "overdue", "due-now", "new-2"].map(String::from).to_vec(),
            upcoming_ids: ["upcoming-1", "upcoming-2"].map(String::from).to_vec(),
            learned_ids: vec!["learned-1".to_string()],
        }
    }

    /// Metrics with the given headline numbers and no mistakes
    pub fn metrics(rate: f64, streak: u32, attempted: u32) -> LearningMetrics {
        LearningMetrics {
            correct_answer_rate: rate,
            consecutive_correct_answers: streak,
            attempted_questions: attempted,
            ..Default::default()
        }
    }

    /// Metrics carrying the given mistake counts, in order
    pub fn metrics_with_mistakes(entries: &[(&str, u32)]) -> LearningMetrics {
        LearningMetrics {
            mistake_patterns: entries
                .iter()
                .map(|(topic, count)| (topic.to_string(), *count))
                .collect(),
            ..Self::metrics(0.7, 2, 12)
        }
    }

    /// One review timestamp per listed day offset before `today` (0 = today)
    pub fn review_history(today: NaiveDate, days_ago: &[i64]) -> Vec<DateTime<Utc>> {
        days_ago
            .iter()
            .enumerate()
            .map(|(i, ago)| {
                let day = today - Duration::days(*ago);
                // vary time of day so only the calendar date matters
                let hour = (i as u32 * 7) % 24;
                Utc.from_utc_datetime(&day.and_hms_opt(hour, 45, 0).unwrap())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_items_are_valid() {
        let now = TestDataFactory::reference_now();
        let scenario = TestDataFactory::mixed_deck(now);
        for item in &scenario.items {
            assert!(item.validate().is_ok(), "{:?}", item);
        }
        for item in TestDataFactory::fresh_deck(12) {
            assert!(item.validate().is_ok());
        }
    }

    #[test]
    fn test_scenario_partitions_deck() {
        let scenario = TestDataFactory::mixed_deck(TestDataFactory::reference_now());
        assert_eq!(
            scenario.due_ids.len() + scenario.upcoming_ids.len() + scenario.learned_ids.len(),
            scenario.items.len()
        );
    }
}
