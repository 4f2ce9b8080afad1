//! Distractor sampling for multiple-choice questions.
//!
//! All randomness flows through a caller-supplied [`Rng`] so generation is
//! reproducible under a seeded generator.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::text::normalize;

/// Select `count` wrong answers for `correct` from `candidates`.
///
/// Candidates are deduplicated by normalized text and never include anything
/// equal to the correct answer. When the pool is smaller than `count`:
/// with `allow_reuse` the deficit is filled by sampling the pool with
/// replacement, otherwise this is [`QuizError::InsufficientPool`]. An empty
/// pool fails either way; reuse cannot invent wrong answers out of nothing.
pub fn sample_distractors<R: Rng>(
    correct: &str,
    candidates: &[String],
    count: usize,
    allow_reuse: bool,
    rng: &mut R,
) -> Result<Vec<String>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let correct_key = normalize(correct);
    let mut seen = HashSet::new();
    let mut pool: Vec<&str> = Vec::new();
    for candidate in candidates {
        let key = normalize(candidate);
        if key == correct_key {
            continue;
        }
        if seen.insert(key) {
            pool.push(candidate.as_str());
        }
    }

    if pool.len() < count && !allow_reuse {
        return Err(QuizError::InsufficientPool {
            available: pool.len(),
            needed: count,
        });
    }
    if pool.is_empty() {
        return Err(QuizError::InsufficientPool {
            available: 0,
            needed: count,
        });
    }

    pool.shuffle(rng);
    let mut picked: Vec<String> = pool.iter().take(count).map(|s| s.to_string()).collect();
    while picked.len() < count {
        picked.push(pool[rng.gen_range(0..pool.len())].to_string());
    }
    Ok(picked)
}

/// Assemble the full choice list for one question.
///
/// Samples `choice_count - 1` distractors and places the correct answer at a
/// uniformly random position. Returns the ordered choices and the index of
/// the correct one.
pub fn build_choices<R: Rng>(
    correct: &str,
    candidates: &[String],
    choice_count: usize,
    allow_reuse: bool,
    rng: &mut R,
) -> Result<(Vec<String>, usize)> {
    if choice_count < 2 {
        return Err(QuizError::InvalidConfig {
            reason: format!("choice count must be at least 2, got {choice_count}"),
        });
    }
    let mut choices = sample_distractors(correct, candidates, choice_count - 1, allow_reuse, rng)?;
    let correct_index = rng.gen_range(0..=choices.len());
    choices.insert(correct_index, correct.to_string());
    Ok((choices, correct_index))
}
