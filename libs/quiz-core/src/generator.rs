//! Quiz session generation.

use std::collections::HashSet;

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::sampler::build_choices;
use crate::types::{Card, Question, QuizConfig, QuizSession};

/// Build a quiz from a loaded card pool.
///
/// `cards` is the deck snapshot from the host loader, already filtered by
/// excluded tags. `history` holds card ids previously asked for this deck;
/// it is applied only when `config.save_history` is set, so history tracking
/// and repeat prevention toggle together. A pool that cannot satisfy the
/// config fails with [`QuizError::InsufficientCards`] rather than repeating
/// cards; callers can clear the history and retry.
///
/// Generation has no side effects. Recording the asked cards happens when
/// the caller commits the finished session, so abandoned quizzes never
/// pollute the history.
pub fn generate_session<R: Rng>(
    deck_id: &str,
    cards: &[Card],
    config: &QuizConfig,
    history: &HashSet<i64>,
    rng: &mut R,
) -> Result<QuizSession> {
    config.validate()?;

    let mut eligible: Vec<&Card> = if config.save_history {
        cards.iter().filter(|c| !history.contains(&c.id)).collect()
    } else {
        cards.iter().collect()
    };

    if eligible.len() < config.question_count {
        return Err(QuizError::InsufficientCards {
            available: eligible.len(),
            requested: config.question_count,
        });
    }

    eligible.shuffle(rng);
    let selected = &eligible[..config.question_count];

    // Distractors come from the whole deck, not just the selected cards.
    let answer_pool: Vec<String> = cards.iter().map(|c| c.back.clone()).collect();

    let mut questions = Vec::with_capacity(selected.len());
    for card in selected {
        let (choices, correct_index) = build_choices(
            &card.back,
            &answer_pool,
            config.choice_count,
            config.allow_answer_reuse,
            rng,
        )?;
        questions.push(Question {
            card_id: card.id,
            prompt: card.front.clone(),
            choices,
            correct_index,
        });
    }

    Ok(QuizSession {
        deck_id: deck_id.to_string(),
        config: config.clone(),
        questions,
        created_at: Utc::now(),
    })
}
