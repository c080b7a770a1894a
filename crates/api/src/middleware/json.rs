//! JSON body extractor with the API's error envelope.
//!
//! Axum's own `Json` rejection responds with plain text; this wrapper maps
//! any body failure (wrong content type, malformed JSON, missing required
//! fields) to [`ApiError::InvalidBody`] so clients always see the same
//! `{"error": ...}` shape.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::ApiError;

/// JSON body extractor that rejects with the API error envelope.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                Err(ApiError::InvalidBody)
            }
        }
    }
}
