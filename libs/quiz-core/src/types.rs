//! Core types for quiz generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// A flashcard as supplied by the host's card loader.
///
/// Immutable once loaded; the generator only reads a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Options controlling quiz generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub question_count: usize,
    pub choice_count: usize,
    pub questions_per_page: usize,
    pub allow_answer_reuse: bool,
    pub save_history: bool,
    #[serde(default)]
    pub excluded_tags: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: 25,
            choice_count: 4,
            questions_per_page: 5,
            allow_answer_reuse: true,
            save_history: false,
            excluded_tags: Vec::new(),
        }
    }
}

impl QuizConfig {
    /// Check the numeric constraints, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.question_count == 0 {
            return Err(QuizError::InvalidConfig {
                reason: "question count must be at least 1".to_string(),
            });
        }
        if self.choice_count < 2 {
            return Err(QuizError::InvalidConfig {
                reason: format!("choice count must be at least 2, got {}", self.choice_count),
            });
        }
        if self.questions_per_page == 0 {
            return Err(QuizError::InvalidConfig {
                reason: "questions per page must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// A card promoted to multiple-choice form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub card_id: i64,
    pub prompt: String,
    /// Answer options in display order, the correct one included.
    pub choices: Vec<String>,
    /// Index into `choices` of the correct answer.
    pub correct_index: usize,
}

impl Question {
    /// The correct answer text.
    pub fn correct_answer(&self) -> &str {
        &self.choices[self.correct_index]
    }
}

/// A generated quiz: ordered questions plus the config they were built with.
///
/// Sessions are values; nothing is persisted until the caller commits the
/// session to the history store after scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub deck_id: String,
    pub config: QuizConfig,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    /// Questions partitioned into pages of `questions_per_page`.
    /// The last page may be shorter.
    pub fn pages(&self) -> impl Iterator<Item = &[Question]> {
        self.questions.chunks(self.config.questions_per_page)
    }

    pub fn page_count(&self) -> usize {
        self.questions.len().div_ceil(self.config.questions_per_page)
    }

    /// Card ids asked in this session, for the history commit.
    pub fn card_ids(&self) -> Vec<i64> {
        self.questions.iter().map(|q| q.card_id).collect()
    }
}
