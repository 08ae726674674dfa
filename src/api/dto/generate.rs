//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "Url")]
    pub url: String,
}

/// A freshly created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateResponse {
    pub full_url: String,
    pub short_id: String,
    pub stat_id: String,
    /// `YYYY-MM-DD`
    pub expiration_date: String,
}

impl From<Link> for GenerateResponse {
    fn from(link: Link) -> Self {
        let expiration_date = link.expiration_day();
        Self {
            full_url: link.url,
            short_id: link.short_id,
            stat_id: link.stat_id,
            expiration_date,
        }
    }
}
