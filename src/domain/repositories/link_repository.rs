//! Repository trait for link storage and click statistics.

use crate::domain::entities::{Link, Stats};
use crate::error::StorageError;
use async_trait::async_trait;

/// The storage capabilities the shortener needs.
///
/// Any backend offering these four operations can sit behind
/// [`crate::application::services::ShortenerService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - embedded file database
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL server
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_sqlite.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a link for `url` and returns it with both identifiers assigned.
    ///
    /// The row is inserted with the stat id standing in for the short id,
    /// then the short id is derived from the engine-assigned row id and
    /// written back. Both steps share one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidInput`] if `url` is not an absolute URL;
    /// no row is written in that case.
    /// Returns [`StorageError::Database`] or [`StorageError::InvalidRowId`] if
    /// any step of the transaction fails; the transaction is rolled back.
    async fn create_link(&self, url: &str) -> Result<Link, StorageError>;

    /// Looks up the destination URL of a short id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no link has this short id.
    /// Returns [`StorageError::Database`] on database errors.
    async fn resolve_link(&self, short_id: &str) -> Result<String, StorageError>;

    /// Appends a click for `short_id`, timestamped now.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the link does not exist (the
    /// foreign key rejects the row).
    /// Returns [`StorageError::Database`] on database errors.
    async fn record_click(&self, short_id: &str, ip: &str) -> Result<(), StorageError>;

    /// Aggregates click statistics for the link owning `stat_id`.
    ///
    /// A link without clicks yields a zero count and an empty click list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no link has this stat id.
    /// Returns [`StorageError::Database`] on database errors.
    async fn get_stats(&self, stat_id: &str) -> Result<Stats, StorageError>;
}
