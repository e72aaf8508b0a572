use std::path::PathBuf;

use mnemo_algo::SchedulerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainerError {
    /// Catalog missing, unreadable or not a JSON array of records
    #[error("cannot read vocabulary {path}: {reason}")]
    DataFormat { path: PathBuf, reason: String },

    /// A catalog record lacks its `word`
    #[error("vocabulary record #{index} is invalid: {reason}")]
    Validation { index: usize, reason: String },

    #[error("duplicate word {word:?} in vocabulary (records #{first} and #{second})")]
    DuplicateWord {
        word: String,
        first: usize,
        second: usize,
    },

    #[error("failed to save progress to {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Only raised when corrupt progress is not allowed to fall back to empty
    #[error("progress file {path} is corrupt: {reason}")]
    CorruptProgress { path: PathBuf, reason: String },

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

impl TrainerError {
    /// Errors that end the session before it starts
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Persistence { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrainerError>;
