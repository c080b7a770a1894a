//! End-to-end tests for the Clientele API.
//!
//! The service is driven entirely in process: each [`TestApp`] owns a
//! fresh in-memory `SQLite` database and an axum router, and requests go
//! through `tower::ServiceExt::oneshot`. No network listener is involved,
//! so tests run in parallel without fighting over ports.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clientele-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use clientele_api::config::ApiConfig;
use clientele_api::state::AppState;
use clientele_api::{db, routes};

/// An API instance backed by a private in-memory database.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Stand up a fresh application with the schema applied.
    ///
    /// The pool is capped at one connection: each `:memory:` connection is
    /// its own database, so a larger pool would hand out empty ones.
    ///
    /// # Panics
    ///
    /// Panics if the database cannot be opened or migrated.
    pub async fn spawn() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory database");

        db::MIGRATOR.run(&pool).await.expect("apply migrations");

        let config = ApiConfig {
            database_url: "sqlite::memory:".to_string(),
            host: std::net::Ipv4Addr::LOCALHOST.into(),
            port: 0,
        };

        Self {
            router: routes::router(AppState::new(config, pool)),
        }
    }

    /// Dispatch a request and return the raw response.
    ///
    /// # Panics
    ///
    /// Panics if the router fails to produce a response.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("dispatch request")
    }

    /// `GET` the given URI.
    pub async fn get(&self, uri: &str) -> Response {
        self.request(bare_request("GET", uri)).await
    }

    /// `POST` a JSON body to the given URI.
    pub async fn post(&self, uri: &str, body: serde_json::Value) -> Response {
        self.request(json_request("POST", uri, body)).await
    }

    /// `PUT` a JSON body to the given URI.
    pub async fn put(&self, uri: &str, body: serde_json::Value) -> Response {
        self.request(json_request("PUT", uri, body)).await
    }

    /// `DELETE` the given URI.
    pub async fn delete(&self, uri: &str) -> Response {
        self.request(bare_request("DELETE", uri)).await
    }
}

/// Build a request carrying a JSON body.
///
/// # Panics
///
/// Panics if the method or URI is invalid.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Build a request with an empty body.
///
/// # Panics
///
/// Panics if the method or URI is invalid.
#[must_use]
pub fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body cannot be read or is not valid JSON.
pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

/// Read a response body as a UTF-8 string.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn read_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}
