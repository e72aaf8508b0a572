//! Review Scheduler
//!
//! Picks the next word to review and updates a word's statistics after an
//! answer.
//!
//! Selection scores every catalog word from scratch on each call:
//!
//! ```text
//! days_overdue = today - (last_reviewed + interval_days)
//! priority     = days_overdue * 10 + times_wrong * 5 + U[-2, 2)
//! ```
//!
//! and returns the highest score. The jitter term breaks ties and keeps
//! equal-scored words from coming back in lock-step order. It is drawn from
//! a `ChaCha8Rng` owned by the scheduler so a fixed seed reproduces the
//! exact same selections.
//!
//! The outcome update is deterministic:
//! - correct: `times_correct + 1`; interval 1 graduates to 6, otherwise
//!   `floor(interval * ease)`; ease `+0.1` capped at 3.0
//! - wrong: `times_wrong + 1`; interval back to 1; ease `-0.2` floored at 1.3
//! - always: `last_reviewed = today`

use chrono::NaiveDate;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::types::{
    ProgressEntry, ProgressMap, WordRecord, EASE_STEP_CORRECT, EASE_STEP_WRONG,
    GRADUATION_INTERVAL_DAYS, INITIAL_INTERVAL_DAYS, JITTER_AMPLITUDE, MAX_EASE_FACTOR,
    MIN_EASE_FACTOR, OVERDUE_WEIGHT, WRONG_WEIGHT,
};

// ==================== Errors ====================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("vocabulary is empty, nothing to review")]
    EmptyCatalog,
}

// ==================== Data Structures ====================

/// Result of a selection
#[derive(Clone, Debug)]
pub struct Selection<'a> {
    /// Position of the record in the catalog slice
    pub index: usize,
    pub record: &'a WordRecord,
    /// Score the record won with, jitter included
    pub priority: f64,
}

// ==================== Scoring ====================

/// Priority without the jitter term
pub fn base_priority(entry: &ProgressEntry, today: NaiveDate) -> f64 {
    entry.days_overdue(today) as f64 * OVERDUE_WEIGHT + f64::from(entry.times_wrong) * WRONG_WEIGHT
}

/// Full priority for a given jitter sample
pub fn priority(entry: &ProgressEntry, today: NaiveDate, jitter: f64) -> f64 {
    base_priority(entry, today) + jitter
}

// ==================== Outcome Update ====================

/// Apply one answer to `entry` and return the updated statistics
pub fn record_outcome(entry: &ProgressEntry, correct: bool, today: NaiveDate) -> ProgressEntry {
    let mut next = entry.clone();

    if correct {
        next.times_correct = next.times_correct.saturating_add(1);
        next.interval_days = if entry.interval_days == INITIAL_INTERVAL_DAYS {
            GRADUATION_INTERVAL_DAYS
        } else {
            // `as` saturates, interval growth has no cap of its own
            (f64::from(entry.interval_days) * entry.ease_factor).floor() as u32
        };
        next.ease_factor = (entry.ease_factor + EASE_STEP_CORRECT).min(MAX_EASE_FACTOR);
    } else {
        next.times_wrong = next.times_wrong.saturating_add(1);
        next.interval_days = INITIAL_INTERVAL_DAYS;
        next.ease_factor = (entry.ease_factor - EASE_STEP_WRONG).max(MIN_EASE_FACTOR);
    }

    next.last_reviewed = today;
    next
}

// ==================== Scheduler ====================

/// Next-word selector with its own seedable jitter source
#[derive(Clone, Debug)]
pub struct ReviewScheduler {
    rng: ChaCha8Rng,
}

impl Default for ReviewScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewScheduler {
    /// Scheduler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Scheduler with a fixed seed, selections are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// `with_seed` when a seed is given, `new` otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Reset the random source
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn jitter(&mut self) -> f64 {
        self.rng.gen_range(-JITTER_AMPLITUDE..JITTER_AMPLITUDE)
    }

    /// Select the catalog word with the highest priority.
    ///
    /// A word with no progress entry is scored as a brand-new word. One
    /// jitter sample is drawn per catalog word, in catalog order.
    pub fn select_next<'a>(
        &mut self,
        vocab: &'a [WordRecord],
        progress: &ProgressMap,
        today: NaiveDate,
    ) -> Result<Selection<'a>, SchedulerError> {
        let fallback = ProgressEntry::default();
        let mut best: Option<Selection<'a>> = None;

        for (index, record) in vocab.iter().enumerate() {
            let entry = progress.get(&record.word).unwrap_or(&fallback);
            let score = priority(entry, today, self.jitter());

            if best.as_ref().map_or(true, |b| score > b.priority) {
                best = Some(Selection {
                    index,
                    record,
                    priority: score,
                });
            }
        }

        best.ok_or(SchedulerError::EmptyCatalog)
    }

    /// Same as the free [`record_outcome`]; no randomness involved
    pub fn record_outcome(&self, entry: &ProgressEntry, correct: bool, today: NaiveDate) -> ProgressEntry {
        record_outcome(entry, correct, today)
    }
}

// ==================== Tests ====================
