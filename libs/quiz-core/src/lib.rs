//! Core quiz generation library.
//!
//! Provides:
//! - Multiple-choice quiz generation from a loaded card pool
//! - Distractor sampling with an injectable randomness source
//! - Grading of submitted answers
//! - Text normalization for answer comparison
//!
//! Persistence of quiz history and host integration live in the add-on
//! crate; everything here is pure computation over values.

pub mod error;
pub mod generator;
pub mod sampler;
pub mod scoring;
pub mod text;
pub mod types;

pub use error::{QuizError, Result};
pub use generator::generate_session;
pub use sampler::{build_choices, sample_distractors};
pub use scoring::{grade, QuestionResult, QuizReport};
pub use text::{normalize, strip_html};
pub use types::{Card, Question, QuizConfig, QuizSession};
