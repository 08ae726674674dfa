//! PostgreSQL repository tests.
//!
//! Need a reachable server: `DATABASE_URL=postgres://... cargo test -- --ignored`

use sqlx::PgPool;
use std::sync::Arc;

use linkstat::domain::repositories::LinkRepository;
use linkstat::error::StorageError;
use linkstat::infrastructure::persistence::{Database, PgLinkRepository};

async fn repository(pool: PgPool) -> PgLinkRepository {
    let database = Database::Postgres(Arc::new(pool.clone()));
    database.bootstrap_schema().await.unwrap();
    PgLinkRepository::new(Arc::new(pool))
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_first_link_gets_short_id_aq(pool: PgPool) {
    let repo = repository(pool).await;

    let link = repo.create_link("http://example.com/a").await.unwrap();

    assert_eq!(link.short_id, "AQ");
    assert_eq!(
        repo.resolve_link("AQ").await.unwrap(),
        "http://example.com/a"
    );
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_invalid_url_is_rejected(pool: PgPool) {
    let repo = repository(pool).await;

    let result = repo.create_link("not a url").await;

    assert!(matches!(result, Err(StorageError::InvalidInput(_))));
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_clicks_and_stats(pool: PgPool) {
    let repo = repository(pool).await;
    let link = repo.create_link("http://example.com/a").await.unwrap();

    let empty = repo.get_stats(&link.stat_id).await.unwrap();
    assert_eq!(empty.click_count, 0);
    assert!(empty.recent_clicks.is_empty());

    repo.record_click(&link.short_id, "10.0.0.1").await.unwrap();
    repo.record_click(&link.short_id, "10.0.0.2").await.unwrap();

    let stats = repo.get_stats(&link.stat_id).await.unwrap();
    assert_eq!(stats.click_count, 2);
    assert_eq!(stats.recent_clicks[0].ip, "10.0.0.2");
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_not_found_cases(pool: PgPool) {
    let repo = repository(pool).await;

    assert!(matches!(
        repo.resolve_link("missing").await,
        Err(StorageError::NotFound(_))
    ));
    assert!(matches!(
        repo.get_stats("missing").await,
        Err(StorageError::NotFound(_))
    ));
    assert!(matches!(
        repo.record_click("missing", "10.0.0.1").await,
        Err(StorageError::NotFound(_))
    ));
}
