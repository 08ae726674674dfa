//! Link storage backed by SQL databases.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - single-file SQLite store
//! - [`PgLinkRepository`] - PostgreSQL store
//!
//! [`Database`] picks the backend from the connection URL, owns the pool and
//! hands out the matching repository.

pub mod database;
pub mod pg_link_repository;
pub mod sqlite_link_repository;

pub use database::{Database, DatabaseKind, PoolSettings};
pub use pg_link_repository::PgLinkRepository;
pub use sqlite_link_repository::SqliteLinkRepository;

use crate::error::StorageError;
use crate::utils::id_codec::encode_id;

/// Turns the row id assigned by the engine into the link's short id.
pub(crate) fn short_id_for(row_id: i64) -> Result<String, StorageError> {
    match u64::try_from(row_id) {
        Ok(id) if id > 0 => Ok(encode_id(id)),
        _ => Err(StorageError::InvalidRowId(row_id)),
    }
}

/// A click referencing a missing link fails the foreign key check.
pub(crate) fn map_click_error(e: sqlx::Error) -> StorageError {
    match e.as_database_error() {
        Some(db) if db.is_foreign_key_violation() => StorageError::SHORT_ID_NOT_FOUND,
        _ => StorageError::Database(e),
    }
}
