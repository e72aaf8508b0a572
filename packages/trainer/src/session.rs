//! Session controller
//!
//! Drives user events through the core one at a time. Answers are written
//! through to the progress file before the next event is handled. A failed
//! save is reported but the in-memory mapping stays authoritative and the
//! next answer saves the full mapping again.

use chrono::NaiveDate;
use mnemo_algo::{
    missing_words, reconcile, RecordedOutcome, ReviewScheduler, SchedulerError, SessionState, WordRecord,
};

use crate::config::Config;
use crate::error::{Result, TrainerError};
use crate::store::{vocabulary, CorruptPolicy, ProgressStore};
use crate::view::CardView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Reveal,
    Correct,
    Wrong,
}

#[derive(Debug, Default)]
pub struct SessionUpdate {
    /// Set for answer events that had a word to grade
    pub outcome: Option<RecordedOutcome>,
    /// Save failure after this event; the session carries on
    pub save_error: Option<TrainerError>,
}

pub struct SessionController {
    vocab: Vec<WordRecord>,
    store: ProgressStore,
    scheduler: ReviewScheduler,
    state: SessionState,
    unsaved: bool,
}

impl SessionController {
    /// Load catalog and progress per `config` and pick the first word
    pub fn start(config: &Config, today: NaiveDate) -> Result<Self> {
        let vocab = vocabulary::load(&config.vocabulary_path)?;
        let store = ProgressStore::new(
            config.progress_path.clone(),
            CorruptPolicy::from_strict(config.strict_progress),
        );
        let scheduler = ReviewScheduler::from_seed(config.review_seed);
        Self::from_parts(vocab, store, scheduler, today)
    }

    pub fn from_parts(
        vocab: Vec<WordRecord>,
        store: ProgressStore,
        mut scheduler: ReviewScheduler,
        today: NaiveDate,
    ) -> Result<Self> {
        if vocab.is_empty() {
            return Err(SchedulerError::EmptyCatalog.into());
        }

        let progress = store.load()?;
        let new_words = missing_words(&vocab, &progress).len();
        if new_words > 0 {
            tracing::debug!(new_words, "default progress created for unseen words");
        }
        let progress = reconcile(&vocab, progress);

        let state = SessionState::new(progress).next_word(&vocab, &mut scheduler, today);
        if let Some(record) = state.current_record(&vocab) {
            tracing::debug!(word = %record.word, priority = ?state.current_priority, "word selected");
        }

        Ok(Self {
            vocab,
            store,
            scheduler,
            state,
            unsaved: false,
        })
    }

    /// Apply one event
    pub fn handle(&mut self, event: SessionEvent, today: NaiveDate) -> SessionUpdate {
        let state = std::mem::take(&mut self.state);

        match event {
            SessionEvent::Reveal => {
                self.state = state.reveal();
                SessionUpdate::default()
            }
            SessionEvent::Correct | SessionEvent::Wrong => {
                let correct = event == SessionEvent::Correct;
                let (state, outcome) = state.answer(correct, &self.vocab, &mut self.scheduler, today);
                self.state = state;

                let mut update = SessionUpdate {
                    outcome,
                    save_error: None,
                };

                if let Some(outcome) = &update.outcome {
                    tracing::info!(
                        word = %outcome.word,
                        correct,
                        interval_days = outcome.after.interval_days,
                        ease_factor = outcome.after.ease_factor,
                        "outcome recorded"
                    );
                    self.unsaved = true;
                    update.save_error = self.flush().err();
                }

                if let Some(record) = self.state.current_record(&self.vocab) {
                    tracing::debug!(word = %record.word, priority = ?self.state.current_priority, "word selected");
                }

                update
            }
        }
    }

    /// Save the mapping if an earlier save did not go through
    pub fn flush(&mut self) -> Result<()> {
        if !self.unsaved {
            return Ok(());
        }
        match self.store.save(&self.state.progress) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "progress not saved, will retry on next answer");
                Err(err)
            }
        }
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn view(&self) -> Option<CardView<'_>> {
        let record = self.state.current_record(&self.vocab)?;
        let entry = self.state.progress.get(&record.word)?;
        Some(CardView::new(record, entry, self.state.stage))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn vocabulary(&self) -> &[WordRecord] {
        &self.vocab
    }

    pub fn current_word(&self) -> Option<&WordRecord> {
        self.state.current_record(&self.vocab)
    }
}
