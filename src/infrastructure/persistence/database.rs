//! Backend selection and connection pool setup.

use anyhow::{Context, Result, bail};
use sqlx::pool::PoolOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use super::{PgLinkRepository, SqliteLinkRepository};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;

/// Storage engine named by a connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Sqlite,
    Postgres,
}

impl DatabaseKind {
    /// Detects the engine from the URL scheme.
    ///
    /// `sqlite:` selects SQLite, `postgres:` and `postgresql:` select
    /// PostgreSQL. Anything else is `None`.
    pub fn from_url(url: &str) -> Option<Self> {
        let (scheme, _) = url.split_once(':')?;
        match scheme.to_ascii_lowercase().as_str() {
            "sqlite" => Some(Self::Sqlite),
            "postgres" | "postgresql" => Some(Self::Postgres),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        }
    }
}

/// Connection pool tuning.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 25,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(300),
        }
    }
}

impl From<&Config> for PoolSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_connections: config.db_max_connections,
            connect_timeout: Duration::from_secs(config.db_connect_timeout),
            idle_timeout: Duration::from_secs(config.db_idle_timeout),
            max_lifetime: Duration::from_secs(config.db_max_lifetime),
        }
    }
}

impl PoolSettings {
    fn options<DB: sqlx::Database>(&self) -> PoolOptions<DB> {
        PoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

/// An open connection pool for one of the supported engines.
#[derive(Clone)]
pub enum Database {
    Sqlite(Arc<SqlitePool>),
    Postgres(Arc<PgPool>),
}

impl Database {
    /// Opens a pool for the configured `DATABASE_URL`.
    pub async fn connect(config: &Config) -> Result<Self> {
        Self::connect_with(&config.database_url, &PoolSettings::from(config)).await
    }

    /// Opens a pool for `url`.
    ///
    /// For a file-backed SQLite URL, missing parent directories and the
    /// database file itself are created. In-memory SQLite databases are
    /// pinned to a single connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Fails on an unsupported scheme or if the engine is unreachable.
    pub async fn connect_with(url: &str, settings: &PoolSettings) -> Result<Self> {
        match DatabaseKind::from_url(url) {
            Some(DatabaseKind::Sqlite) => connect_sqlite(url, settings).await,
            Some(DatabaseKind::Postgres) => {
                let pool_options: PgPoolOptions = settings.options();
                let pool = pool_options
                    .connect(url)
                    .await
                    .context("Failed to connect to PostgreSQL")?;
                Ok(Self::Postgres(Arc::new(pool)))
            }
            None => bail!("unsupported database url scheme: {url}"),
        }
    }

    pub fn kind(&self) -> DatabaseKind {
        match self {
            Self::Sqlite(_) => DatabaseKind::Sqlite,
            Self::Postgres(_) => DatabaseKind::Postgres,
        }
    }

    /// Creates tables and indexes that do not exist yet.
    pub async fn bootstrap_schema(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Sqlite(pool) => {
                SqliteLinkRepository::new(pool.clone())
                    .bootstrap_schema()
                    .await
            }
            Self::Postgres(pool) => PgLinkRepository::new(pool.clone()).bootstrap_schema().await,
        }
    }

    /// Returns the link repository for this engine.
    pub fn link_repository(&self) -> Arc<dyn LinkRepository> {
        match self {
            Self::Sqlite(pool) => Arc::new(SqliteLinkRepository::new(pool.clone())),
            Self::Postgres(pool) => Arc::new(PgLinkRepository::new(pool.clone())),
        }
    }

    /// Round-trips a trivial query to prove the pool can reach the engine.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool.as_ref()).await?;
            }
            Self::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool.as_ref()).await?;
            }
        }
        Ok(())
    }

    pub async fn close(&self) {
        match self {
            Self::Sqlite(pool) => pool.close().await,
            Self::Postgres(pool) => pool.close().await,
        }
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

async fn connect_sqlite(url: &str, settings: &PoolSettings) -> Result<Database> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("Invalid SQLite url: {url}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options: SqlitePoolOptions = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(settings.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        ensure_parent_dir(options.get_filename())?;
        settings.options()
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .context("Failed to open SQLite database")?;

    Ok(Database::Sqlite(Arc::new(pool)))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
