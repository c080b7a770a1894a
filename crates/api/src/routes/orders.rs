//! Order routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use tracing::instrument;

use clientele_core::OrderId;

use crate::db::OrderRepository;
use crate::error::{ApiError, Resource, Result};
use crate::middleware::{ApiJson, Principal};
use crate::models::{Order, OrderDraft};
use crate::state::AppState;

use super::DeleteResponse;

/// Build the order routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", put(update_order).delete(delete_order))
}

/// List the caller's orders, newest date first, with customer names resolved.
#[instrument(skip_all, fields(owner = %owner))]
async fn list_orders(
    Principal(owner): Principal,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list(&owner).await?;

    Ok(Json(orders))
}

/// Create an order from the submitted draft.
#[instrument(skip_all, fields(owner = %owner))]
async fn create_order(
    Principal(owner): Principal,
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<OrderDraft>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = Order::from_draft(OrderId::generate(), owner, draft);
    OrderRepository::new(state.pool()).create(&order).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Replace an order's editable fields with the submitted draft.
#[instrument(skip_all, fields(owner = %owner, id = %id))]
async fn update_order(
    Principal(owner): Principal,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    ApiJson(draft): ApiJson<OrderDraft>,
) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .update(&owner, &id, draft)
        .await?
        .ok_or(ApiError::NotOwned(Resource::Order))?;

    Ok(Json(order))
}

/// Delete an order.
#[instrument(skip_all, fields(owner = %owner, id = %id))]
async fn delete_order(
    Principal(owner): Principal,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<DeleteResponse>> {
    let deleted = OrderRepository::new(state.pool()).delete(&owner, &id).await?;
    if !deleted {
        return Err(ApiError::NotOwned(Resource::Order));
    }

    Ok(Json(DeleteResponse { success: true }))
}
