//! Test Deck Manager
//!
//! Plays the host application in end-to-end tests:
//! - Keeps a deck in a temporary JSON file that is cleaned up on drop
//! - Reloads the deck from disk before every operation, so each step
//!   exercises the serialized form
//! - Supports snapshot/restore for what-if comparisons

use std::path::{Path, PathBuf};

use cadence_core::{ReviewScheduler, ReviewableItem};
use chrono::{DateTime, Utc};
use tempfile::TempDir;

/// Manager for a test deck on disk
///
/// # Example
///
/// ```rust,ignore
/// let mut deck = TestDeckManager::with_items(TestDataFactory::fresh_deck(10));
/// deck.review("card-0", true, now);
/// assert_eq!(deck.load()[0].review_count, 1);
/// ```
pub struct TestDeckManager {
    /// Scheduler used for reviews
    pub scheduler: ReviewScheduler,
    /// Temporary directory (kept alive to prevent premature deletion)
    _temp_dir: TempDir,
    /// Path to the deck file
    deck_path: PathBuf,
    /// Every review timestamp recorded through this manager
    review_log: Vec<DateTime<Utc>>,
    /// Snapshot data for restore operations
    snapshot: Option<Vec<ReviewableItem>>,
}

impl TestDeckManager {
    /// Create an empty deck with the default scheduler
    pub fn new_temp() -> Self {
        Self::with_scheduler(Vec::new(), ReviewScheduler::new())
    }

    /// Create a deck holding `items`
    pub fn with_items(items: Vec<ReviewableItem>) -> Self {
        Self::with_scheduler(items, ReviewScheduler::new())
    }

    /// Create a deck holding `items` reviewed by `scheduler`
    pub fn with_scheduler(items: Vec<ReviewableItem>, scheduler: ReviewScheduler) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let deck_path = temp_dir.path().join("deck.json");

        let manager = Self {
            scheduler,
            _temp_dir: temp_dir,
            deck_path,
            review_log: Vec::new(),
            snapshot: None,
        };
        manager.save(&items);
        manager
    }

    /// Path to the deck file
    pub fn path(&self) -> &Path {
        &self.deck_path
    }

    /// Read the deck from disk
    pub fn load(&self) -> Vec<ReviewableItem> {
        let json = std::fs::read_to_string(&self.deck_path).expect("Failed to read deck");
        serde_json::from_str(&json).expect("Failed to parse deck")
    }

    /// Overwrite the deck on disk
    pub fn save(&self, items: &[ReviewableItem]) {
        let json = serde_json::to_string_pretty(items).expect("Failed to serialize deck");
        std::fs::write(&self.deck_path, json).expect("Failed to write deck");
    }

    /// Fetch one item by id
    pub fn get(&self, id: &str) -> Option<ReviewableItem> {
        self.load().into_iter().find(|item| item.id == id)
    }

    /// Add an item to the deck
    pub fn insert(&mut self, item: ReviewableItem) {
        let mut items = self.load();
        items.push(item);
        self.save(&items);
    }

    /// Record one review and persist it (last write wins)
    pub fn review(&mut self, id: &str, was_correct: bool, now: DateTime<Utc>) -> ReviewableItem {
        let mut items = self.load();
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .unwrap_or_else(|| panic!("No item with id {id}"));

        let updated = self.scheduler.record_review(slot, was_correct, now);
        *slot = updated.clone();
        self.save(&items);
        self.review_log.push(now);
        updated
    }

    /// Review every item currently due, answering with `answer(item)`
    ///
    /// Returns the number of items reviewed.
    pub fn review_due<F>(&mut self, now: DateTime<Utc>, mut answer: F) -> usize
    where
        F: FnMut(&ReviewableItem) -> bool,
    {
        let due = self.scheduler.select_due(&self.load(), now);
        for item in &due {
            let correct = answer(item);
            self.review(&item.id, correct, now);
        }
        due.len()
    }

    /// Items due at `now`
    pub fn due(&self, now: DateTime<Utc>) -> Vec<ReviewableItem> {
        self.scheduler.select_due(&self.load(), now)
    }

    /// Timestamps of all reviews recorded so far
    pub fn review_log(&self) -> &[DateTime<Utc>] {
        &self.review_log
    }

    /// Take a snapshot of the current deck
    pub fn take_snapshot(&mut self) {
        self.snapshot = Some(self.load());
    }

    /// Restore from the last snapshot
    pub fn restore_snapshot(&mut self) -> bool {
        match self.snapshot.take() {
            Some(items) => {
                self.save(&items);
                true
            }
            None => false,
        }
    }

    /// Check that every item on disk satisfies the data-model invariants
    pub fn assert_valid(&self) {
        for item in self.load() {
            if let Err(e) = item.validate() {
                panic!("invalid item after persistence: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 2, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_review_persists() {
        let mut deck = TestDeckManager::with_items(vec![ReviewableItem::new("a")]);
        deck.review("a", true, now());

        assert_eq!(deck.get("a").unwrap().review_count, 1);
        assert_eq!(deck.review_log(), &[now()]);
        assert!(deck.path().exists());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut deck = TestDeckManager::with_items(vec![ReviewableItem::new("a")]);
        deck.take_snapshot();
        deck.review("a", false, now());
        assert!(deck.restore_snapshot());
        assert_eq!(deck.get("a").unwrap().review_count, 0);
        assert!(!deck.restore_snapshot());
    }
}
