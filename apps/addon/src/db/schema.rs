//! SQLite schema definitions.

/// Complete schema for the add-on database.
pub const SCHEMA: &str = r#"
-- Cards already asked, per deck
CREATE TABLE IF NOT EXISTS quiz_history (
    deck_id TEXT NOT NULL,
    card_id INTEGER NOT NULL,
    asked_at TEXT NOT NULL,
    PRIMARY KEY (deck_id, card_id)
);

-- Last-used quiz options (single row)
CREATE TABLE IF NOT EXISTS quiz_settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    question_count INTEGER NOT NULL DEFAULT 25,
    choice_count INTEGER NOT NULL DEFAULT 4,
    questions_per_page INTEGER NOT NULL DEFAULT 5,
    allow_answer_reuse INTEGER NOT NULL DEFAULT 1,
    save_history INTEGER NOT NULL DEFAULT 0,
    excluded_tags TEXT NOT NULL DEFAULT '[]',
    default_deck TEXT
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_quiz_history_deck ON quiz_history(deck_id);
"#;

/// Initialize the settings row if not exists.
pub const INIT_SETTINGS: &str = r#"
INSERT OR IGNORE INTO quiz_settings (id) VALUES (1);
"#;
