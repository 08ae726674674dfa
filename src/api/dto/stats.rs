//! DTOs for link statistics.

use serde::Serialize;

use crate::domain::entities::{Click, Stats};

/// Click totals and the most recent clicks of a link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatsResponse {
    pub click_count: i64,
    /// `YYYY-MM-DD`, empty when the link has no expiration recorded.
    pub expiration_date: String,
    pub clicks: Vec<ClickInfo>,
}

/// A single recorded click.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    #[serde(rename = "IP")]
    pub ip: String,
    /// `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "Time")]
    pub time: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        let time = click.formatted_time();
        Self { ip: click.ip, time }
    }
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        let expiration_date = stats.expiration_day();
        Self {
            click_count: stats.click_count,
            expiration_date,
            clicks: stats.recent_clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_stats_response_shape() {
        let stats = Stats {
            short_id: "AQ".to_string(),
            click_count: 1,
            expiration_date: Some(Utc.with_ymd_and_hms(2026, 11, 19, 0, 0, 0).unwrap()),
            recent_clicks: vec![Click::new(
                "10.0.0.1".to_string(),
                Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 9).unwrap(),
            )],
        };

        let json = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ClickCount": 1,
                "ExpirationDate": "2026-11-19",
                "Clicks": [{ "IP": "10.0.0.1", "Time": "2026-10-19 14:05:09" }],
            })
        );
    }
}
