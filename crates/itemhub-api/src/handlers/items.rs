//! Item handlers
//!
//! Every endpoint acts on the authenticated user's own items.

use axum::{extract::State, Json};
use itemhub_core::ItemResponse;
use itemhub_service::{CreateItemRequest, ItemListResponse, ItemService, UpdateItemRequest};

use crate::extractors::{AuthUser, ItemIdPath, JsonBody, Pagination};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create an item
///
/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<CreateItemRequest>,
) -> ApiResult<Created<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let item = service.create(auth.user_id, request).await?;
    Ok(Created(item))
}

/// List the caller's items, newest first
///
/// GET /items?page=&limit=
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<ItemListResponse>> {
    let service = ItemService::new(state.service_context());
    let page = service
        .list(auth.user_id, pagination.page, pagination.limit)
        .await?;
    Ok(Json(page))
}

/// GET /items/:item_id
pub async fn get_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(item_id): ItemIdPath,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let item = service.get(auth.user_id, item_id).await?;
    Ok(Json(item))
}

/// Change name and/or description
///
/// PATCH /items/:item_id
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(item_id): ItemIdPath,
    JsonBody(request): JsonBody<UpdateItemRequest>,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let item = service.update(auth.user_id, item_id, request).await?;
    Ok(Json(item))
}

/// POST /items/:item_id/activate
pub async fn activate_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(item_id): ItemIdPath,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let item = service.activate(auth.user_id, item_id).await?;
    Ok(Json(item))
}

/// POST /items/:item_id/deactivate
pub async fn deactivate_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(item_id): ItemIdPath,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let item = service.deactivate(auth.user_id, item_id).await?;
    Ok(Json(item))
}

/// DELETE /items/:item_id
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ItemIdPath(item_id): ItemIdPath,
) -> ApiResult<NoContent> {
    let service = ItemService::new(state.service_context());
    service.delete(auth.user_id, item_id).await?;
    Ok(NoContent)
}
