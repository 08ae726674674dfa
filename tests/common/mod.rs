#![allow(dead_code)]

use axum::extract::ConnectInfo;
use std::net::SocketAddr;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

use linkstat::application::services::ShortenerService;
use linkstat::domain::click_event::ClickEvent;
use linkstat::domain::repositories::LinkRepository;
use linkstat::infrastructure::persistence::{Database, PoolSettings};
use linkstat::state::AppState;

pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Fresh in-memory SQLite database with the schema in place.
pub async fn memory_database() -> Database {
    let database = Database::connect_with("sqlite::memory:", &PoolSettings::default())
        .await
        .unwrap();
    database.bootstrap_schema().await.unwrap();
    database
}

pub async fn memory_repository() -> Arc<dyn LinkRepository> {
    memory_database().await.link_repository()
}

pub fn sqlite_pool(database: &Database) -> &SqlitePool {
    match database {
        Database::Sqlite(pool) => pool.as_ref(),
        Database::Postgres(_) => panic!("expected a SQLite database"),
    }
}

/// Writes a link row directly, bypassing validation.
pub async fn insert_raw_link(database: &Database, id: i64, short_id: &str, url: &str) {
    sqlx::query(
        "INSERT INTO links (id, short_id, stat_id, url, expiration_date) VALUES (?, ?, ?, ?, NULL)",
    )
    .bind(id)
    .bind(short_id)
    .bind(format!("seeded-stat-{id}"))
    .bind(url)
    .execute(sqlite_pool(database))
    .await
    .unwrap();
}

pub async fn count_links(database: &Database) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(sqlite_pool(database))
        .await
        .unwrap()
}

pub struct TestContext {
    pub database: Database,
    pub state: AppState,
    pub click_rx: mpsc::Receiver<ClickEvent>,
    pub repository: Arc<dyn LinkRepository>,
}

pub async fn create_test_state() -> TestContext {
    create_test_state_with(100, false).await
}

pub async fn create_test_state_with(queue_capacity: usize, behind_proxy: bool) -> TestContext {
    let database = memory_database().await;
    let repository = database.link_repository();
    let shortener = Arc::new(ShortenerService::new(repository.clone()));
    let (tx, click_rx) = mpsc::channel(queue_capacity);

    TestContext {
        database,
        state: AppState::new(shortener, tx, behind_proxy),
        click_rx,
        repository,
    }
}

/// Inserts `ConnectInfo` the way `into_make_service_with_connect_info` does.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
