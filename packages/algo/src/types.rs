//! Common Types and Constants
//!
//! Shared data structures used by the scheduler, the reveal state machine
//! and the storage layer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Interval assigned to a brand-new word and after every wrong answer
pub const INITIAL_INTERVAL_DAYS: u32 = 1;

/// Interval a word graduates to on its first correct answer from day one
pub const GRADUATION_INTERVAL_DAYS: u32 = 6;

/// Ease factor of a brand-new word
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Lower bound of the ease factor
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Upper bound of the ease factor
pub const MAX_EASE_FACTOR: f64 = 3.0;

/// Ease gained per correct answer
pub const EASE_STEP_CORRECT: f64 = 0.1;

/// Ease lost per wrong answer
pub const EASE_STEP_WRONG: f64 = 0.2;

/// Priority weight per overdue day
pub const OVERDUE_WEIGHT: f64 = 10.0;

/// Priority weight per recorded wrong answer
pub const WRONG_WEIGHT: f64 = 5.0;

/// Half-width of the uniform jitter added to every priority, sampled in `[-J, J)`
pub const JITTER_AMPLITUDE: f64 = 2.0;

/// Legacy difficulty level written for new entries
pub const DEFAULT_DIFFICULTY_LEVEL: u32 = 1;

/// `last_reviewed` of a never-seen word: 1970-01-01
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

// ==================== Catalog Types ====================

/// A single catalog entry. Loaded once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Unique key
    pub word: String,
    pub translation: String,
    pub mnemonic: String,
    /// Path to a mnemonic picture, `None` when the catalog gives none (or an empty string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, translation: impl Into<String>, mnemonic: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            mnemonic: mnemonic.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = if image.is_empty() { None } else { Some(image) };
        self
    }
}

// ==================== Progress Types ====================

/// Review statistics of one word
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Days until the next review, always >= 1
    pub interval_days: u32,
    /// Date of the last answer, `YYYY-MM-DD` on disk
    pub last_reviewed: NaiveDate,
    /// Carried over from older progress files; never read by the scheduler
    #[serde(default = "default_difficulty_level")]
    pub difficulty_level: u32,
    pub times_correct: u32,
    pub times_wrong: u32,
    /// Interval multiplier, kept within `[MIN_EASE_FACTOR, MAX_EASE_FACTOR]`
    pub ease_factor: f64,
}

fn default_difficulty_level() -> u32 {
    DEFAULT_DIFFICULTY_LEVEL
}

impl Default for ProgressEntry {
    fn default() -> Self {
        Self {
            interval_days: INITIAL_INTERVAL_DAYS,
            last_reviewed: epoch_date(),
            difficulty_level: DEFAULT_DIFFICULTY_LEVEL,
            times_correct: 0,
            times_wrong: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
        }
    }
}

impl ProgressEntry {
    /// Date the word falls due again
    pub fn next_review(&self) -> Option<NaiveDate> {
        self.last_reviewed
            .checked_add_days(chrono::Days::new(u64::from(self.interval_days)))
    }

    /// Days past the due date on `today`; negative when the word is not yet due
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        (today - self.last_reviewed).num_days() - i64::from(self.interval_days)
    }

    /// Whether the word was never answered
    pub fn is_new(&self) -> bool {
        self.times_correct == 0 && self.times_wrong == 0
    }
}

/// Progress keyed by `WordRecord::word`
pub type ProgressMap = BTreeMap<String, ProgressEntry>;

// ==================== Tests ====================
