//! HTTP API layer.
//!
//! Translates HTTP requests into [`crate::application::services::ShortenerService`]
//! calls and formats the responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`routes`] - JSON route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
