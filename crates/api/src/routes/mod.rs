//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Liveness check
//! GET    /health/ready          - Readiness check (verifies database)
//!
//! # Customers
//! GET    /api/customers         - List the caller's customers
//! POST   /api/customers         - Create a customer
//! GET    /api/customers/{id}    - Get one customer
//! PUT    /api/customers/{id}    - Replace a customer
//! DELETE /api/customers/{id}    - Delete a customer
//!
//! # Orders
//! GET    /api/orders            - List the caller's orders
//! POST   /api/orders            - Create an order
//! PUT    /api/orders/{id}       - Replace an order
//! DELETE /api/orders/{id}       - Delete an order
//!
//! # Schedules
//! GET    /api/schedules         - List the caller's schedules
//! POST   /api/schedules         - Create a schedule
//! DELETE /api/schedules/{id}    - Delete a schedule
//! ```
//!
//! Every `/api` route requires a `userId` query parameter naming the
//! caller; see [`crate::middleware::Principal`].

pub mod customers;
pub mod orders;
pub mod schedules;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Response body for delete operations.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Build the full application router.
///
/// CORS is permissive: the browser client is served from a separate origin
/// and the API carries no cookies.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/customers", customers::router())
        .nest("/orders", orders::router())
        .nest("/schedules", schedules::router());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
