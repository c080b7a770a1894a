//! Caller identity extractor.
//!
//! Authentication happens outside this service; requests arrive with the
//! caller's identity as a `userId` query parameter, and every handler
//! scopes its reads and writes to that owner. This extractor is the single
//! place the parameter is read.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use clientele_core::OwnerId;

use crate::error::ApiError;

/// Extractor for the owner identity on every `/api` request.
///
/// Rejects the request with 400 when `userId` is missing or blank. The
/// value is otherwise opaque and stored verbatim.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Principal(owner): Principal) -> impl IntoResponse {
///     format!("scoped to {owner}")
/// }
/// ```
#[derive(Debug)]
pub struct Principal(pub OwnerId);

#[derive(Debug, Deserialize)]
struct IdentityQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<IdentityQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingIdentity)?;

        let owner = query
            .user_id
            .filter(|user_id| !user_id.trim().is_empty())
            .ok_or(ApiError::MissingIdentity)?;

        Ok(Self(OwnerId::new(owner)))
    }
}
