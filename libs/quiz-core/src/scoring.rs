//! Grading for completed quiz sessions.

use serde::{Deserialize, Serialize};

use crate::types::QuizSession;

/// Outcome of a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub card_id: i64,
    pub prompt: String,
    /// The choice the user picked, if any.
    pub chosen: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// A graded session, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizReport {
    pub deck_id: String,
    pub total: usize,
    pub correct: usize,
    pub results: Vec<QuestionResult>,
}

impl QuizReport {
    /// Score as a rounded percentage.
    pub fn percent(&self) -> u32 {
        ((100 * self.correct) as f64 / self.total.max(1) as f64).round() as u32
    }
}

/// Grade submitted answers against a session.
///
/// `answers[i]` is the chosen choice index for question `i`. A missing
/// entry, `None`, or an out-of-range index counts as unanswered and wrong.
pub fn grade(session: &QuizSession, answers: &[Option<usize>]) -> QuizReport {
    let mut results = Vec::with_capacity(session.questions.len());
    let mut correct = 0;

    for (i, question) in session.questions.iter().enumerate() {
        let chosen_index = answers.get(i).copied().flatten();
        let chosen = chosen_index.and_then(|idx| question.choices.get(idx).cloned());
        let is_correct = chosen_index == Some(question.correct_index);
        if is_correct {
            correct += 1;
        }
        results.push(QuestionResult {
            card_id: question.card_id,
            prompt: question.prompt.clone(),
            chosen,
            correct_answer: question.correct_answer().to_string(),
            is_correct,
        });
    }

    QuizReport {
        deck_id: session.deck_id.clone(),
        total: session.questions.len(),
        correct,
        results,
    }
}
