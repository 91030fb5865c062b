//! Multi-week study of a fresh deck

use cadence_core::{calculate_progress, compute_streak, review_forecast, DEFAULT_STREAK_LOOKBACK_DAYS};
use cadence_e2e_tests::{TestDataFactory, TestDeckManager};
use chrono::Duration;

#[test]
fn daily_study_masters_a_perfect_deck() {
    let mut deck = TestDeckManager::with_items(TestDataFactory::fresh_deck(8));
    let start = TestDataFactory::reference_now();

    // everything is due on day one
    assert_eq!(deck.due(start).len(), 8);

    let mut day = start;
    for _ in 0..400 {
        deck.review_due(day, |_| true);
        if calculate_progress(&deck.load()).completion_percentage == 100 {
            break;
        }
        day += Duration::days(1);
    }

    let progress = calculate_progress(&deck.load());
    assert_eq!(progress.learned_cards, 8);
    assert_eq!(progress.to_review_cards, 0);
    assert!(deck.due(day + Duration::days(365)).is_empty());
    deck.assert_valid();

    // default policy: 1 + 2 + 4 + 8 + 16 days between the six reviews
    assert_eq!(day - start, Duration::days(31));
}

#[test]
fn misses_keep_items_in_same_session_rotation() {
    let mut deck = TestDeckManager::with_items(TestDataFactory::fresh_deck(4));
    let now = TestDataFactory::reference_now();

    // miss the even cards
    deck.review_due(now, |item| !item.id.ends_with('0') && !item.id.ends_with('2'));

    let retry_at = now + Duration::minutes(10);
    let due_later: Vec<String> = deck.due(retry_at).into_iter().map(|i| i.id).collect();
    assert_eq!(due_later, vec!["card-0", "card-2"]);
    assert!(deck.due(now + Duration::minutes(9)).is_empty());

    deck.assert_valid();
}

#[test]
fn forecast_and_streak_follow_activity() {
    let mut deck = TestDeckManager::with_items(TestDataFactory::fresh_deck(5));
    let start = TestDataFactory::reference_now();

    deck.review_due(start, |_| true);
    deck.review_due(start + Duration::days(1), |_| true);

    let forecast = review_forecast(&deck.load(), start + Duration::days(1), 7);
    // second review of each card granted a 2-day interval
    assert_eq!(forecast[2].due, 5);
    assert_eq!(forecast.iter().map(|d| d.due).sum::<usize>(), 5);

    let today = (start + Duration::days(1)).date_naive();
    assert_eq!(compute_streak(deck.review_log(), today, DEFAULT_STREAK_LOOKBACK_DAYS), 2);

    // a skipped day breaks the streak
    let later = today + Duration::days(2);
    assert_eq!(compute_streak(deck.review_log(), later, DEFAULT_STREAK_LOOKBACK_DAYS), 0);
}
