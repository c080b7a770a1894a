//! Unified error handling for the API.
//!
//! All route handlers return `Result<T, ApiError>`. Errors render as a JSON
//! envelope of the form `{"error": "..."}` with a fixed message per
//! variant; underlying causes are logged server-side and never echoed to
//! the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Entity kinds named in client-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Customer,
    Order,
    Schedule,
}

impl Resource {
    const fn noun(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Order => "Order",
            Self::Schedule => "Schedule",
        }
    }
}

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// The `userId` query parameter is missing or blank.
    #[error("missing user identity")]
    MissingIdentity,

    /// The request body is not valid JSON for the expected shape.
    #[error("invalid request body")]
    InvalidBody,

    /// The requested customer does not exist for this owner.
    #[error("customer not found")]
    CustomerNotFound,

    /// A mutation targeted a record that does not exist or belongs to
    /// another owner. One variant for both cases so the response does not
    /// reveal which it was.
    #[error("{} not found or not owned", .0.noun())]
    NotOwned(Resource),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(ref err) = self {
            tracing::error!(error = %err, "request failed");
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingIdentity | Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::CustomerNotFound => StatusCode::NOT_FOUND,
            Self::NotOwned(_) => StatusCode::FORBIDDEN,
        };

        // Fixed messages only; internal detail stays in the logs.
        let message = match self {
            Self::Database(_) => "Internal server error".to_owned(),
            Self::MissingIdentity => "Missing userId parameter".to_owned(),
            Self::InvalidBody => "Invalid request body".to_owned(),
            Self::CustomerNotFound => "Customer not found".to_owned(),
            Self::NotOwned(resource) => {
                format!("{} not found or you do not have permission", resource.noun())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
