//! Error types for engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Event not found: {0}")]
    NotFound(u64),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Event store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
