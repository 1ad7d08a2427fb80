//! Error types for flashcards-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using TestError.
pub type Result<T> = std::result::Result<T, TestError>;

/// Errors that can occur while building or grading a test.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TestError {
    /// A generator was handed a batch of the wrong size. The builder always
    /// draws exactly the required size, so seeing this through the public API
    /// means a broken caller, not bad user input.
    #[error("generator requires {expected} cards, got {actual}")]
    InvalidBatchSize { expected: usize, actual: usize },

    #[error("collection has {available} cards, requested counts need {required}")]
    InsufficientCards { required: usize, available: usize },

    #[error("submission is for test {submitted}, not {expected}")]
    TestMismatch { expected: Uuid, submitted: Uuid },
}
