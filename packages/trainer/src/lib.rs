//! mnemo trainer: file-backed flashcard sessions on top of `mnemo-algo`

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod store;
pub mod view;

pub use error::{Result, TrainerError};
pub use session::{SessionController, SessionEvent, SessionUpdate};
