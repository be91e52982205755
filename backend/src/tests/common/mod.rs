// Common test utilities and helpers

use async_trait::async_trait;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;

use crate::config::StaticConfig;
use crate::models::Product;
use crate::services::ProductCatalog;
use crate::utils::{ApiError, ApiResult};
use crate::{AppState, build_router};

/// Create an in-memory SQLite database for testing
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Insert a product row directly, bypassing ingestion validation
pub async fn insert_product(pool: &SqlitePool, name: Option<&str>, price: Option<f64>) -> i64 {
    sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
        .bind(name)
        .bind(price)
        .execute(pool)
        .await
        .expect("Failed to insert test product")
        .last_insert_rowid()
}

/// Catalog whose every read fails
pub struct FailingCatalog;

#[async_trait]
impl ProductCatalog for FailingCatalog {
    async fn list_all(&self) -> ApiResult<Vec<Product>> {
        Err(ApiError::catalog_unavailable("store offline"))
    }
}

/// The real router bound to an ephemeral port
pub struct TestServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn(catalog: Arc<dyn ProductCatalog>) -> Self {
        let state = Arc::new(AppState::new(catalog, "en"));
        let static_config = StaticConfig { enabled: false, web_root: String::new() };
        let app = build_router(state, &static_config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self { base_url, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// HTTP client that reports redirects instead of following them
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build http client")
}
