// ABOUTME: HTTP request handlers for laundry item operations
// ABOUTME: Validates payloads, calls the item store and maps outcomes to status codes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use laundry_core::{LaundryItem, LaundryItemCreateInput, LaundryItemUpdateRequest};
use tracing::info;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// List all items
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<LaundryItem>>, ApiError> {
    info!("Listing laundry items");

    let items = state.laundry_storage.list().await?;
    Ok(Json(items))
}

/// Create a new item
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LaundryItemCreateInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Creating laundry item: {}", input.label);

    input.validate()?;
    let item = state.laundry_storage.create(input).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a single item by ID
pub async fn get_item(
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<i64>,
) -> Result<Json<LaundryItem>, ApiError> {
    info!("Getting laundry item: {}", item_id);

    let item = state.laundry_storage.get(item_id).await?;
    Ok(Json(item))
}

/// Partially update an item; only fields present in the body change
pub async fn update_item(
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<i64>,
    ApiJson(request): ApiJson<LaundryItemUpdateRequest>,
) -> Result<Json<LaundryItem>, ApiError> {
    info!("Updating laundry item: {}", item_id);

    let input = request.into_input()?;
    let item = state.laundry_storage.update(item_id, input).await?;

    Ok(Json(item))
}

/// Delete an item
pub async fn delete_item(
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting laundry item: {}", item_id);

    state.laundry_storage.delete(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
