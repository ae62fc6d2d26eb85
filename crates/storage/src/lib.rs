//! Persistence for the single LogiQuest player state: the repository
//! contract, an in-memory implementation for tests, and the SQLite
//! backend used by the desktop app.

pub mod repository;
pub mod sqlite;
