//! Common test utilities for the add-on integration tests.
//!
//! Everything runs against an in-memory SQLite store and a static in-memory
//! card loader, so these tests need no external services.

pub mod fixtures;

use autoquiz_addon::db::SqliteRepository;
use autoquiz_addon::service::QuizService;
use fixtures::StaticLoader;
use quiz_core::types::Card;

/// Build a service over an in-memory store and a fixed card pool.
pub fn service_with(cards: Vec<Card>) -> QuizService<StaticLoader> {
    let repo = SqliteRepository::open_in_memory().expect("in-memory database");
    QuizService::new(StaticLoader::new(cards), repo)
}
