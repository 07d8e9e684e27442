/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory test database with migrations applied
/// - A fully built application router
/// - Request/response helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use taskman_api::app::{build_router, AppState};
use taskman_api::config::{ApiConfig, Config, DatabaseConfig};
use taskman_shared::db::migrations::run_migrations;
use taskman_shared::db::pool::{create_pool, DatabaseConfig as PoolConfig};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context backed by a fresh in-memory database
    ///
    /// A single-connection pool keeps the in-memory database alive and
    /// visible across all queries of the test.
    pub async fn new() -> anyhow::Result<Self> {
        let db = create_pool(PoolConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        })
        .await?;

        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let app = build_router(AppState::new(db.clone(), config));

        Ok(TestContext { db, app })
    }

    /// Sends a request through the router and returns the response
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Sends a GET request to `uri`
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Sends a JSON-bodied request with the given method to `uri`
    pub async fn send_json(&self, method: &str, uri: &str, body: serde_json::Value) -> Response {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Sends a bodyless DELETE request to `uri`
    pub async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

/// Reads a response body as JSON
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the response is a 404 with the given fixed message
pub async fn assert_not_found(response: Response, message: &str) {
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], message);
}
