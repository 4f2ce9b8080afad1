//! Quiz service: orchestrates card loading, history, and generation.

use std::collections::HashSet;

use quiz_core::generator::generate_session;
use quiz_core::types::{Card, QuizConfig, QuizSession};
use rand::Rng;
use thiserror::Error;

use crate::db::{DbError, HistoryRepository, SqliteRepository};

/// Errors surfaced by the quiz service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Quiz(#[from] quiz_core::QuizError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("failed to load deck {deck_id}: {message}")]
    Load { deck_id: String, message: String },
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Source of cards for a deck, already filtered by excluded tags.
///
/// Implemented by the host bridge; the service never talks to card storage
/// directly.
pub trait CardPoolLoader {
    fn load_deck(&self, deck_id: &str, excluded_tags: &[String]) -> Result<Vec<Card>>;
}

/// One instance per add-on, owning the card loader and the local store.
pub struct QuizService<L> {
    loader: L,
    repo: SqliteRepository,
}

impl<L: CardPoolLoader> QuizService<L> {
    pub fn new(loader: L, repo: SqliteRepository) -> Self {
        Self { loader, repo }
    }

    /// The underlying store, for settings access and history queries.
    pub fn repository(&self) -> &SqliteRepository {
        &self.repo
    }

    /// Generate a quiz for a deck with a caller-supplied randomness source.
    ///
    /// An unreadable history store degrades to an empty history so quiz
    /// generation is never blocked by a persistence failure.
    pub fn generate_with_rng<R: Rng>(
        &self,
        deck_id: &str,
        config: &QuizConfig,
        rng: &mut R,
    ) -> Result<QuizSession> {
        let cards = self.loader.load_deck(deck_id, &config.excluded_tags)?;

        let history = if config.save_history {
            match self.repo.history_for_deck(deck_id) {
                Ok(history) => history,
                Err(e) => {
                    tracing::warn!(
                        "could not read quiz history for {}: {}; treating as empty",
                        deck_id,
                        e
                    );
                    HashSet::new()
                }
            }
        } else {
            HashSet::new()
        };

        let session = generate_session(deck_id, &cards, config, &history, rng)?;
        tracing::info!(
            "generated quiz for {}: {} questions over {} pages",
            deck_id,
            session.questions.len(),
            session.page_count()
        );
        Ok(session)
    }

    /// Generate a quiz with the thread-local RNG.
    pub fn generate(&self, deck_id: &str, config: &QuizConfig) -> Result<QuizSession> {
        self.generate_with_rng(deck_id, config, &mut rand::thread_rng())
    }

    /// Record a completed session in the history store.
    ///
    /// Called after scoring, never at generation time, so abandoned sessions
    /// do not pollute the history. Skipped entirely when the session was
    /// generated without history tracking. A failure here is non-fatal: the
    /// session and its report stay valid, callers should surface a warning.
    pub fn commit_session(&mut self, session: &QuizSession) -> Result<()> {
        if !session.config.save_history {
            return Ok(());
        }
        let card_ids = session.card_ids();
        if let Err(e) = self.repo.record_asked(&session.deck_id, &card_ids) {
            tracing::warn!("could not save quiz history for {}: {}", session.deck_id, e);
            return Err(e.into());
        }
        tracing::info!(
            "recorded {} asked cards for {}",
            card_ids.len(),
            session.deck_id
        );
        Ok(())
    }

    /// Forget every asked card for a deck.
    pub fn clear_history(&mut self, deck_id: &str) -> Result<()> {
        self.repo.clear_history(deck_id)?;
        tracing::info!("cleared quiz history for {}", deck_id);
        Ok(())
    }
}
