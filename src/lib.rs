//! # linkstat
//!
//! A small URL shortener with per-redirect click statistics, built with Axum
//! and SQLx on top of SQLite or PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the repository trait and the click worker
//! - **Application Layer** ([`application`]) - The shortener service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and PostgreSQL storage
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Identifiers
//!
//! Every link gets two identifiers: a short id derived from its database row
//! id (so the first link is `AQ`) used for redirects, and an unrelated random
//! stat id used to read its statistics. Knowing one never reveals the other.
//! See [`utils::id_codec`].
//!
//! ## Quick Start
//!
//! ```bash
//! # SQLite file under ./database (created on first start)
//! cargo run
//!
//! curl -X POST localhost:8080/generate -H 'content-type: application/json' \
//!      -d '{"Url":"https://example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{Click, Link, Stats};
    pub use crate::error::{AppError, ShortenerError, StorageError};
    pub use crate::infrastructure::persistence::Database;
    pub use crate::state::AppState;
}
