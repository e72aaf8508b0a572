//! Session state
//!
//! The whole state of a review session as a plain value: the progress
//! mapping, which catalog word is on screen and how much of it is revealed.
//! Every operation takes the state by value and hands back the next one, so
//! the front end owns the single live instance and nothing is global.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reveal::RevealStage;
use crate::scheduler::ReviewScheduler;
use crate::types::{ProgressEntry, ProgressMap, WordRecord};

/// Statistics of one word before and after an answer
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedOutcome {
    pub word: String,
    pub correct: bool,
    pub before: ProgressEntry,
    pub after: ProgressEntry,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub progress: ProgressMap,
    /// Index into the catalog of the word on screen, `None` before the first
    /// selection or when the catalog is empty
    pub current: Option<usize>,
    pub stage: RevealStage,
    /// Priority the current word was selected with
    pub current_priority: Option<f64>,
    /// Answers recorded in this session
    pub answered: u32,
}

impl SessionState {
    pub fn new(progress: ProgressMap) -> Self {
        Self {
            progress,
            ..Default::default()
        }
    }

    /// Select a fresh word and reset the reveal stage
    pub fn next_word(
        mut self,
        vocab: &[WordRecord],
        scheduler: &mut ReviewScheduler,
        today: NaiveDate,
    ) -> Self {
        match scheduler.select_next(vocab, &self.progress, today) {
            Ok(selection) => {
                self.current = Some(selection.index);
                self.current_priority = Some(selection.priority);
            }
            Err(_) => {
                self.current = None;
                self.current_priority = None;
            }
        }
        self.stage = RevealStage::WordOnly;
        self
    }

    /// Show one more piece of the current word. No-op without a current word.
    pub fn reveal(mut self) -> Self {
        if self.current.is_some() {
            self.stage = self.stage.advance();
        }
        self
    }

    /// Record an answer for the current word, then move on to the next one.
    ///
    /// Answering before the image is shown is allowed. Without a current word
    /// nothing is recorded but a new selection is still attempted.
    pub fn answer(
        mut self,
        correct: bool,
        vocab: &[WordRecord],
        scheduler: &mut ReviewScheduler,
        today: NaiveDate,
    ) -> (Self, Option<RecordedOutcome>) {
        let outcome = self
            .current
            .and_then(|index| vocab.get(index))
            .map(|record| {
                let entry = self.progress.entry(record.word.clone()).or_default();
                let before = entry.clone();
                let after = scheduler.record_outcome(&before, correct, today);
                *entry = after.clone();
                RecordedOutcome {
                    word: record.word.clone(),
                    correct,
                    before,
                    after,
                }
            });

        if outcome.is_some() {
            self.answered += 1;
        }

        (self.next_word(vocab, scheduler, today), outcome)
    }

    pub fn current_record<'a>(&self, vocab: &'a [WordRecord]) -> Option<&'a WordRecord> {
        self.current.and_then(|index| vocab.get(index))
    }

    pub fn current_entry(&self, vocab: &[WordRecord]) -> Option<&ProgressEntry> {
        self.current_record(vocab)
            .and_then(|record| self.progress.get(&record.word))
    }
}
