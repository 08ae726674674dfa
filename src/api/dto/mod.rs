//! Data Transfer Objects for API requests and responses.
//!
//! Field names are PascalCase on the wire to stay compatible with existing
//! clients of the service.

pub mod generate;
pub mod stats;
