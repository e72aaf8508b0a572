//! Progress reconciliation
//!
//! Every catalog word owns exactly one [`ProgressEntry`]. Words seen for the
//! first time get a default entry whose `last_reviewed` sits at the epoch, so
//! they are overdue on any realistic `today`. Entries are never removed, even
//! when their word has left the catalog.

use crate::types::{ProgressEntry, ProgressMap, WordRecord};

/// Insert a default entry for every catalog word missing from `progress`.
///
/// Existing entries are left untouched, so calling this twice is the same as
/// calling it once.
pub fn reconcile(vocab: &[WordRecord], mut progress: ProgressMap) -> ProgressMap {
    for record in vocab {
        progress
            .entry(record.word.clone())
            .or_insert_with(ProgressEntry::default);
    }
    progress
}

/// Catalog words that have no entry yet
pub fn missing_words<'a>(vocab: &'a [WordRecord], progress: &ProgressMap) -> Vec<&'a str> {
    vocab
        .iter()
        .filter(|r| !progress.contains_key(&r.word))
        .map(|r| r.word.as_str())
        .collect()
}

/// One-line counters shown beneath the current word
pub fn progress_line(word: &str, entry: &ProgressEntry) -> String {
    format!(
        "Word: {} | Correct: {} | Wrong: {} | Interval: {} days",
        word, entry.times_correct, entry.times_wrong, entry.interval_days
    )
}
