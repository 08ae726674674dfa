//! Utility functions shared across layers.
//!
//! - [`id_codec`] - Short id and stat id encoding
//! - [`url_validator`] - Destination URL validation
//! - [`client_ip`] - Caller IP extraction for click tracking

pub mod client_ip;
pub mod id_codec;
pub mod url_validator;
