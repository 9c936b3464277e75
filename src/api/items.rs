//! Item (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::JsonBody;
use crate::{
    error::AppResult,
    models::{
        item::{Item, ItemPayload},
        Confirmation,
    },
};

/// Create a new item
#[utoipa::path(
    post,
    path = "/newitems",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = Confirmation),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> AppResult<(StatusCode, Json<Confirmation>)> {
    let item = state.services.catalog.create_item(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new("Item created successfully", item.id)),
    ))
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>)
    )
)]
pub async fn list_items(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.services.catalog.list_items().await?;
    Ok(Json(items))
}

/// Get item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Item>> {
    let item = state.services.catalog.get_item(id).await?;
    Ok(Json(item))
}

/// Replace an item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = Confirmation),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> AppResult<Json<Confirmation>> {
    state.services.catalog.replace_item(id, payload).await?;
    Ok(Json(Confirmation::new("Item updated successfully", id)))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted", body = Confirmation),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 409, description = "Item is referenced by loans", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Confirmation>> {
    state.services.catalog.delete_item(id).await?;
    Ok(Json(Confirmation::new("Item deleted successfully", id)))
}
