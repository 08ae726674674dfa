//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use super::{map_click_error, short_id_for};
use crate::domain::entities::link::expiration_from;
use crate::domain::entities::{Click, Link, RECENT_CLICKS_LIMIT, Stats};
use crate::domain::repositories::LinkRepository;
use crate::error::StorageError;
use crate::utils::id_codec::new_random_token;
use crate::utils::url_validator::validate_absolute_url;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS links (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        short_id        TEXT    NOT NULL UNIQUE,
        stat_id         TEXT    NOT NULL UNIQUE,
        url             TEXT    NOT NULL,
        expiration_date TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS clicks (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        short_id   TEXT      NOT NULL REFERENCES links (short_id) ON DELETE CASCADE,
        ip         TEXT      NOT NULL,
        clicked_at TIMESTAMP NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS clicks_short_id_clicked_at_idx ON clicks (short_id, clicked_at)",
];

/// SQLite repository for single-node deployments.
///
/// `AUTOINCREMENT` keeps row ids from ever being reused, so a short id
/// freed by a deleted link is never handed out again.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Creates the `links` and `clicks` tables if they are missing.
    pub async fn bootstrap_schema(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(self.pool.as_ref()).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create_link(&self, url: &str) -> Result<Link, StorageError> {
        validate_absolute_url(url)?;

        let stat_id = new_random_token();
        let expiration_date = expiration_from(Utc::now());

        // dropping `tx` on any early return rolls the insert back
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO links (short_id, stat_id, url, expiration_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&stat_id)
        .bind(&stat_id)
        .bind(url)
        .bind(expiration_date)
        .execute(&mut *tx)
        .await?;

        let id = inserted.last_insert_rowid();
        let short_id = short_id_for(id)?;

        sqlx::query("UPDATE links SET short_id = ? WHERE id = ?")
            .bind(&short_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Link::new(
            id,
            short_id,
            stat_id,
            url.to_string(),
            expiration_date,
        ))
    }

    async fn resolve_link(&self, short_id: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM links WHERE short_id = ?")
            .bind(short_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StorageError::SHORT_ID_NOT_FOUND)
    }

    async fn record_click(&self, short_id: &str, ip: &str) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO clicks (short_id, ip, clicked_at) VALUES (?, ?, ?)")
            .bind(short_id)
            .bind(ip)
            .bind(Utc::now())
            .execute(self.pool.as_ref())
            .await
            .map_err(map_click_error)?;

        Ok(())
    }

    async fn get_stats(&self, stat_id: &str) -> Result<Stats, StorageError> {
        let row = sqlx::query_as::<_, (String, Option<DateTime<Utc>>, i64)>(
            r#"
            SELECT l.short_id, l.expiration_date, COUNT(c.id)
            FROM links l
            LEFT JOIN clicks c ON c.short_id = l.short_id
            WHERE l.stat_id = ?
            GROUP BY l.id, l.short_id, l.expiration_date
            "#,
        )
        .bind(stat_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some((short_id, expiration_date, click_count)) = row else {
            return Err(StorageError::STAT_ID_NOT_FOUND);
        };

        let recent_clicks = sqlx::query_as::<_, (String, DateTime<Utc>)>(
            r#"
            SELECT ip, clicked_at
            FROM clicks
            WHERE short_id = ?
            ORDER BY clicked_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(&short_id)
        .bind(RECENT_CLICKS_LIMIT)
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .map(|(ip, clicked_at)| Click::new(ip, clicked_at))
        .collect();

        Ok(Stats {
            short_id,
            click_count,
            expiration_date,
            recent_clicks,
        })
    }
}
