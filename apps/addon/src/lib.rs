//! Host-integration layer for the autoquiz add-on.
//!
//! Wires the pure quiz-core logic to the pieces a host application needs:
//! - SQLite-backed quiz history and saved settings
//! - A quiz service orchestrating loading, generation, and history commits
//! - HTML export of graded results
//!
//! The host supplies the card source (via [`CardPoolLoader`]) and the UI;
//! nothing here renders dialogs or schedules reviews.

pub mod db;
pub mod export;
pub mod service;

pub use db::{DbError, HistoryRepository, SavedSettings, SettingsRepository, SqliteRepository};
pub use export::{render_report, write_report};
pub use service::{CardPoolLoader, QuizService, ServiceError};
