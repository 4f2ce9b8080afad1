//! Repository pattern for add-on storage.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;
use quiz_core::types::QuizConfig;
use rusqlite::{params, Connection};

use crate::db::error::DbError;

type Result<T> = std::result::Result<T, DbError>;

/// Saved dialog state: last-used options plus the last chosen deck.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SavedSettings {
    pub config: QuizConfig,
    pub default_deck: Option<String>,
}

impl Default for SavedSettings {
    fn default() -> Self {
        Self {
            config: QuizConfig::default(),
            default_deck: None,
        }
    }
}

/// Repository for per-deck quiz history.
pub trait HistoryRepository {
    fn has_been_asked(&self, deck_id: &str, card_id: i64) -> Result<bool>;
    /// Snapshot of every asked card id for a deck, for the generator.
    fn history_for_deck(&self, deck_id: &str) -> Result<HashSet<i64>>;
    /// Append asked ids. Re-adding an existing id is a no-op.
    fn record_asked(&mut self, deck_id: &str, card_ids: &[i64]) -> Result<()>;
    /// Forget every asked id for a deck. A deck with no history is a no-op.
    fn clear_history(&mut self, deck_id: &str) -> Result<()>;
}

/// Repository for saved quiz settings.
pub trait SettingsRepository {
    fn saved_settings(&self) -> Result<SavedSettings>;
    fn save_settings(&self, settings: &SavedSettings) -> Result<()>;
}

/// SQLite implementation of the repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SETTINGS)?;
        Ok(())
    }
}

impl HistoryRepository for SqliteRepository {
    fn has_been_asked(&self, deck_id: &str, card_id: i64) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM quiz_history WHERE deck_id = ?1 AND card_id = ?2",
            params![deck_id, card_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn history_for_deck(&self, deck_id: &str) -> Result<HashSet<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT card_id FROM quiz_history WHERE deck_id = ?1")?;
        let ids = stmt
            .query_map(params![deck_id], |row| row.get(0))?
            .collect::<std::result::Result<HashSet<i64>, _>>()?;
        Ok(ids)
    }

    fn record_asked(&mut self, deck_id: &str, card_ids: &[i64]) -> Result<()> {
        let asked_at = Utc::now().to_rfc3339();
        // One transaction per session commit keeps the per-deck
        // read-modify-write atomic.
        let tx = self.conn.transaction()?;
        for card_id in card_ids {
            tx.execute(
                "INSERT OR IGNORE INTO quiz_history (deck_id, card_id, asked_at) VALUES (?1, ?2, ?3)",
                params![deck_id, card_id, asked_at],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn clear_history(&mut self, deck_id: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM quiz_history WHERE deck_id = ?1",
            params![deck_id],
        )?;
        Ok(())
    }
}

impl SettingsRepository for SqliteRepository {
    fn saved_settings(&self) -> Result<SavedSettings> {
        let (
            question_count,
            choice_count,
            questions_per_page,
            allow_answer_reuse,
            save_history,
            tags_json,
            default_deck,
        ) = self.conn.query_row(
            "SELECT question_count, choice_count, questions_per_page, allow_answer_reuse,
                    save_history, excluded_tags, default_deck
             FROM quiz_settings WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, bool>(3)?,
                    row.get::<_, bool>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, Option<String>>(6)?,
                ))
            },
        )?;

        let excluded_tags: Vec<String> = serde_json::from_str(&tags_json)
            .map_err(|e| DbError::InvalidData(format!("excluded_tags: {e}")))?;

        Ok(SavedSettings {
            config: QuizConfig {
                question_count: question_count as usize,
                choice_count: choice_count as usize,
                questions_per_page: questions_per_page as usize,
                allow_answer_reuse,
                save_history,
                excluded_tags,
            },
            default_deck,
        })
    }

    fn save_settings(&self, settings: &SavedSettings) -> Result<()> {
        let tags_json = serde_json::to_string(&settings.config.excluded_tags)
            .map_err(|e| DbError::InvalidData(format!("excluded_tags: {e}")))?;
        self.conn.execute(
            "UPDATE quiz_settings
             SET question_count = ?1, choice_count = ?2, questions_per_page = ?3,
                 allow_answer_reuse = ?4, save_history = ?5, excluded_tags = ?6,
                 default_deck = ?7
             WHERE id = 1",
            params![
                settings.config.question_count as i64,
                settings.config.choice_count as i64,
                settings.config.questions_per_page as i64,
                settings.config.allow_answer_reuse,
                settings.config.save_history,
                tags_json,
                settings.default_deck,
            ],
        )?;
        Ok(())
    }
}
