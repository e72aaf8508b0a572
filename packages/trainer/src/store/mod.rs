//! File-backed stores
//!
//! - [`vocabulary`] - read-only word catalog
//! - [`progress`] - per-word review statistics, written after every answer

pub mod progress;
pub mod vocabulary;

pub use mnemo_algo::reconcile;
pub use progress::{CorruptPolicy, ProgressStore};
