//! Shortener façade over a [`LinkRepository`].

use std::sync::Arc;

use crate::domain::entities::{Link, Stats};
use crate::domain::repositories::LinkRepository;
use crate::error::ShortenerError;

/// Service for creating, resolving and tracking short links.
///
/// Adds no rules of its own: every call goes straight to the repository and
/// failures come back wrapped in the [`ShortenerError`] variant naming the
/// operation.
pub struct ShortenerService {
    repository: Arc<dyn LinkRepository>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::GenerateShortUrl`] if the URL is invalid or
    /// the link cannot be stored.
    pub async fn generate_short_url(&self, url: &str) -> Result<Link, ShortenerError> {
        let link = self
            .repository
            .create_link(url)
            .await
            .map_err(ShortenerError::GenerateShortUrl)?;

        tracing::info!(short_id = %link.short_id, "Short url generated");
        Ok(link)
    }

    /// Resolves a short id to the URL to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::GetFullUrl`] if the short id is unknown or
    /// the lookup fails.
    pub async fn get_full_url(&self, short_id: &str) -> Result<String, ShortenerError> {
        self.repository
            .resolve_link(short_id)
            .await
            .map_err(ShortenerError::GetFullUrl)
    }

    /// Records one click on `short_id` from `ip`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::RegisterClick`] if the click cannot be stored.
    pub async fn register_click(&self, short_id: &str, ip: &str) -> Result<(), ShortenerError> {
        self.repository
            .record_click(short_id, ip)
            .await
            .map_err(ShortenerError::RegisterClick)
    }

    /// Returns click statistics for the link owning `stat_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::GetStats`] if the stat id is unknown or the
    /// query fails.
    pub async fn get_stats(&self, stat_id: &str) -> Result<Stats, ShortenerError> {
        self.repository
            .get_stats(stat_id)
            .await
            .map_err(ShortenerError::GetStats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::StorageError;
    use crate::utils::url_validator::UrlValidationError;
    use chrono::Utc;

    fn create_test_link(id: i64, short_id: &str, url: &str) -> Link {
        Link::new(
            id,
            short_id.to_string(),
            "AZCJv3Xk7r2bn8eXgOqH1Q".to_string(),
            url.to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_generate_short_url_success() {
        let mut mock_repo = MockLinkRepository::new();

        let created_link = create_test_link(1, "AQ", "http://example.com/a");
        mock_repo
            .expect_create_link()
            .withf(|url| url == "http://example.com/a")
            .times(1)
            .returning(move |_| Ok(created_link.clone()));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let result = service.generate_short_url("http://example.com/a").await;

        assert!(result.is_ok());
        let link = result.unwrap();
        assert_eq!(link.short_id, "AQ");
        assert_eq!(link.url, "http://example.com/a");
    }

    #[tokio::test]
    async fn test_generate_short_url_invalid_input() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_create_link().times(1).returning(|url| {
            Err(StorageError::InvalidInput(UrlValidationError::NotAbsolute(
                url.to_string(),
            )))
        });

        let service = ShortenerService::new(Arc::new(mock_repo));

        let err = service.generate_short_url("not a url").await.unwrap_err();

        assert!(matches!(err, ShortenerError::GenerateShortUrl(_)));
        assert!(matches!(err.cause(), StorageError::InvalidInput(_)));
        assert!(err.to_string().starts_with("generate short url error: "));
    }

    #[tokio::test]
    async fn test_get_full_url_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_resolve_link()
            .withf(|short_id| short_id == "AQ")
            .times(1)
            .returning(|_| Ok("http://example.com/a".to_string()));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let url = service.get_full_url("AQ").await.unwrap();
        assert_eq!(url, "http://example.com/a");
    }

    #[tokio::test]
    async fn test_get_full_url_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_resolve_link()
            .times(1)
            .returning(|_| Err(StorageError::SHORT_ID_NOT_FOUND));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let err = service.get_full_url("missing").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "get full url error: short url doesn't exist"
        );
    }

    #[tokio::test]
    async fn test_register_click_passes_arguments() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .withf(|short_id, ip| short_id == "AQ" && ip == "127.0.0.1")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ShortenerService::new(Arc::new(mock_repo));

        assert!(service.register_click("AQ", "127.0.0.1").await.is_ok());
    }

    #[tokio::test]
    async fn test_register_click_error_is_wrapped() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .times(1)
            .returning(|_, _| Err(StorageError::Database(sqlx::Error::PoolTimedOut)));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let err = service.register_click("AQ", "127.0.0.1").await.unwrap_err();
        assert!(matches!(err, ShortenerError::RegisterClick(_)));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_get_stats_success() {
        let mut mock_repo = MockLinkRepository::new();

        let stats = Stats {
            short_id: "AQ".to_string(),
            click_count: 1,
            expiration_date: Some(Utc::now()),
            recent_clicks: vec![Click::new("127.0.0.1".to_string(), Utc::now())],
        };
        mock_repo
            .expect_get_stats()
            .withf(|stat_id| stat_id == "stat")
            .times(1)
            .returning(move |_| Ok(stats.clone()));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let stats = service.get_stats("stat").await.unwrap();
        assert_eq!(stats.click_count, 1);
        assert_eq!(stats.recent_clicks[0].ip, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_get_stats()
            .times(1)
            .returning(|_| Err(StorageError::STAT_ID_NOT_FOUND));

        let service = ShortenerService::new(Arc::new(mock_repo));

        let err = service.get_stats("unknown").await.unwrap_err();
        assert!(matches!(err, ShortenerError::GetStats(_)));
        assert!(matches!(err.cause(), StorageError::NotFound(_)));
    }
}
