//! Schedule routes.
//!
//! Schedules have no update endpoint: the client edits an entry by deleting
//! it and creating a replacement.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use tracing::instrument;

use clientele_core::ScheduleId;

use crate::db::ScheduleRepository;
use crate::error::{ApiError, Resource, Result};
use crate::middleware::{ApiJson, Principal};
use crate::models::{Schedule, ScheduleDraft};
use crate::state::AppState;

use super::DeleteResponse;

/// Build the schedule routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route("/{id}", delete(delete_schedule))
}

/// List the caller's schedules in calendar order, with customer names
/// resolved.
#[instrument(skip_all, fields(owner = %owner))]
async fn list_schedules(
    Principal(owner): Principal,
    State(state): State<AppState>,
) -> Result<Json<Vec<Schedule>>> {
    let schedules = ScheduleRepository::new(state.pool()).list(&owner).await?;

    Ok(Json(schedules))
}

/// Create a schedule entry from the submitted draft.
#[instrument(skip_all, fields(owner = %owner))]
async fn create_schedule(
    Principal(owner): Principal,
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ScheduleDraft>,
) -> Result<(StatusCode, Json<Schedule>)> {
    let schedule = Schedule::from_draft(ScheduleId::generate(), owner, draft);
    ScheduleRepository::new(state.pool())
        .create(&schedule)
        .await?;

    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Delete a schedule entry.
#[instrument(skip_all, fields(owner = %owner, id = %id))]
async fn delete_schedule(
    Principal(owner): Principal,
    State(state): State<AppState>,
    Path(id): Path<ScheduleId>,
) -> Result<Json<DeleteResponse>> {
    let deleted = ScheduleRepository::new(state.pool())
        .delete(&owner, &id)
        .await?;
    if !deleted {
        return Err(ApiError::NotOwned(Resource::Schedule));
    }

    Ok(Json(DeleteResponse { success: true }))
}
