//! Error types for quiz generation.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised while building a quiz.
///
/// Every variant is recoverable: the caller should show the message and let
/// the user adjust the configuration rather than treating it as fatal.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid quiz configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("only {available} eligible cards for {requested} questions; reduce the question count or clear the quiz history")]
    InsufficientCards { available: usize, requested: usize },

    #[error("only {available} distinct wrong answers available, {needed} needed; reduce the choice count or allow answer reuse")]
    InsufficientPool { available: usize, needed: usize },
}
