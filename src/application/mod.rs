//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers, the click
//! worker and the admin CLI one entry point.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Link creation, resolution,
//!   click registration and statistics

pub mod services;
