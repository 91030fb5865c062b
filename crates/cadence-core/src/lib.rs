//! # Cadence Core
//!
//! Review scheduling and adaptive difficulty for language-learning decks.
//!
//! - **Review Scheduler**: due-item selection and exponential-backoff spacing
//!   with a mastery cutoff
//! - **Difficulty Advisor**: decrease / maintain / increase directives and
//!   focus topics from session metrics
//! - **Progress Aggregation**: completion snapshots, daily streaks, and a
//!   workload forecast
//!
//! Every operation is a pure, synchronous transform over caller-supplied data.
//! The caller passes the clock (`now` / `today`) and owns persistence; the
//! crate holds no global state and does no I/O outside config loading.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence_core::{DifficultyAdvisor, ReviewScheduler, ReviewableItem, SessionTracker};
//! use chrono::Utc;
//!
//! let scheduler = ReviewScheduler::new();
//! let advisor = DifficultyAdvisor::new();
//! let now = Utc::now();
//!
//! let deck = vec![ReviewableItem::new("hola"), ReviewableItem::new("adios")];
//! let due = scheduler.select_due(&deck, now);
//! assert_eq!(due.len(), 2);
//!
//! let mut session = SessionTracker::new();
//! let reviewed = scheduler.record_review(&due[0], true, now);
//! session.record_item_answer(&reviewed, true);
//! assert_eq!(reviewed.review_count, 1);
//!
//! let advice = advisor.advise(&session.metrics());
//! println!("{} {:?}", advice.directive, advice.focus);
//! ```
//!
//! ## Validation
//!
//! The core does not validate or clamp its inputs. Hosts that accept records
//! from outside call [`ReviewableItem::validate`] and
//! [`LearningMetrics::validate`] at the boundary.

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod advisor;
pub mod config;
pub mod error;
pub mod item;
pub mod progress;
pub mod scheduler;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Items
pub use item::ReviewableItem;

// Review scheduling
pub use scheduler::{
    backoff_interval, format_interval, select_due, ReviewPreview, ReviewScheduler,
    SchedulerConfig,
};

// Difficulty advice
pub use advisor::{
    Advice, AdvisorConfig, DifficultyAdvisor, DifficultyDirective, DifficultyLevel,
    LearningMetrics, SessionTracker, MAX_FOCUS_TOPICS,
};

// Progress aggregation
pub use progress::{
    calculate_progress, compute_streak, get_due_cards, review_forecast, ForecastDay,
    StudyProgress, DEFAULT_STREAK_LOOKBACK_DAYS, MAX_FORECAST_DAYS,
};

// Configuration and errors
pub use config::CadenceConfig;
pub use error::{ConfigError, Result, ValidationError};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        calculate_progress, compute_streak, get_due_cards, select_due, CadenceConfig,
        DifficultyAdvisor, DifficultyDirective, LearningMetrics, ReviewScheduler,
        ReviewableItem, SessionTracker, StudyProgress,
    };
}
