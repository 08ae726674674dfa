//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer on top of
//! SQLite and PostgreSQL.
//!
//! # Modules
//!
//! - [`persistence`] - SQL repository implementations and pool setup

pub mod persistence;
