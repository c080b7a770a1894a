//! Customer routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use clientele_core::CustomerId;

use crate::db::CustomerRepository;
use crate::error::{ApiError, Resource, Result};
use crate::middleware::{ApiJson, Principal};
use crate::models::{Customer, CustomerDraft};
use crate::state::AppState;

use super::DeleteResponse;

/// Build the customer routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
}

/// List the caller's customers, newest first.
#[instrument(skip_all, fields(owner = %owner))]
async fn list_customers(
    Principal(owner): Principal,
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(state.pool()).list(&owner).await?;

    Ok(Json(customers))
}

/// Fetch one customer.
#[instrument(skip_all, fields(owner = %owner, id = %id))]
async fn get_customer(
    Principal(owner): Principal,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool())
        .get(&owner, &id)
        .await?
        .ok_or(ApiError::CustomerNotFound)?;

    Ok(Json(customer))
}

/// Create a customer from the submitted draft.
#[instrument(skip_all, fields(owner = %owner))]
async fn create_customer(
    Principal(owner): Principal,
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<CustomerDraft>,
) -> Result<(StatusCode, Json<Customer>)> {
    let customer = Customer::from_draft(CustomerId::generate(), owner, draft);
    CustomerRepository::new(state.pool())
        .create(&customer)
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replace a customer's editable fields with the submitted draft.
#[instrument(skip_all, fields(owner = %owner, id = %id))]
async fn update_customer(
    Principal(owner): Principal,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    ApiJson(draft): ApiJson<CustomerDraft>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool())
        .update(&owner, &id, draft)
        .await?
        .ok_or(ApiError::NotOwned(Resource::Customer))?;

    Ok(Json(customer))
}

/// Delete a customer.
///
/// Orders and schedules that reference the customer are left in place; the
/// list queries simply stop resolving its name.
#[instrument(skip_all, fields(owner = %owner, id = %id))]
async fn delete_customer(
    Principal(owner): Principal,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<DeleteResponse>> {
    let deleted = CustomerRepository::new(state.pool())
        .delete(&owner, &id)
        .await?;
    if !deleted {
        return Err(ApiError::NotOwned(Resource::Customer));
    }

    Ok(Json(DeleteResponse { success: true }))
}
