//! # mnemo-algo - flashcard review core
//!
//! Pure Rust, I/O-free building blocks of the trainer:
//!
//! - **Review Scheduler** - priority selection of the next word and the
//!   interval / ease update applied after every answer
//! - **Reveal Stages** - word, translation, mnemonic, image
//! - **Session State** - progress mapping plus the word on screen, passed by value
//!
//! ## Module structure
//!
//! - [`scheduler`] - `ReviewScheduler`, `record_outcome`, priority scoring
//! - [`progress`] - `reconcile` and the counters line
//! - [`reveal`] - `RevealStage` state machine
//! - [`session`] - `SessionState`
//! - [`sanitize`] - range repair for entries read from disk
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mnemo_algo::{reconcile, ProgressMap, ReviewScheduler, WordRecord};
//!
//! let vocab = vec![WordRecord::new("gato", "cat", "a cat on a gate")];
//! let progress = reconcile(&vocab, ProgressMap::new());
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! let mut scheduler = ReviewScheduler::with_seed(7);
//! let pick = scheduler.select_next(&vocab, &progress, today).unwrap();
//! let updated = scheduler.record_outcome(&progress[&pick.record.word], true, today);
//! assert_eq!(updated.interval_days, 6);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod progress;
pub mod reveal;
pub mod sanitize;
pub mod scheduler;
pub mod session;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use progress::{missing_words, progress_line, reconcile};

pub use reveal::RevealStage;

pub use scheduler::{base_priority, priority, record_outcome, ReviewScheduler, SchedulerError, Selection};

pub use session::{RecordedOutcome, SessionState};
