//! Local SQLite storage for quiz history and saved settings.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{
    HistoryRepository, SavedSettings, SettingsRepository, SqliteRepository,
};
