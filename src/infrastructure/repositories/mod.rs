// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_storage;

pub use error::map_sqlx;
pub use sqlite_storage::SqliteStorage;
