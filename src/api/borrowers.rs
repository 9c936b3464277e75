//! Borrower endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::JsonBody;
use crate::{
    error::AppResult,
    models::{
        borrower::{Borrower, BorrowerPayload},
        Confirmation,
    },
};

/// Create a new borrower
#[utoipa::path(
    post,
    path = "/newborrowers",
    tag = "borrowers",
    request_body = BorrowerPayload,
    responses(
        (status = 201, description = "Borrower created", body = Confirmation),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse)
    )
)]
pub async fn create_borrower(
    State(state): State<crate::AppState>,
    JsonBody(payload): JsonBody<BorrowerPayload>,
) -> AppResult<(StatusCode, Json<Confirmation>)> {
    let borrower = state.services.borrowers.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new("Borrower created successfully", borrower.id)),
    ))
}

/// List all borrowers
#[utoipa::path(
    get,
    path = "/borrowers",
    tag = "borrowers",
    responses(
        (status = 200, description = "All borrowers", body = Vec<Borrower>)
    )
)]
pub async fn list_borrowers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Borrower>>> {
    let borrowers = state.services.borrowers.list().await?;
    Ok(Json(borrowers))
}

/// Get borrower by ID
#[utoipa::path(
    get,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    responses(
        (status = 200, description = "Borrower details", body = Borrower),
        (status = 404, description = "Borrower not found", body = ErrorResponse)
    )
)]
pub async fn get_borrower(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.borrowers.get_by_id(id).await?;
    Ok(Json(borrower))
}

/// Replace a borrower
#[utoipa::path(
    put,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    request_body = BorrowerPayload,
    responses(
        (status = 200, description = "Borrower replaced", body = Confirmation),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Borrower not found", body = ErrorResponse)
    )
)]
pub async fn update_borrower(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<BorrowerPayload>,
) -> AppResult<Json<Confirmation>> {
    state.services.borrowers.replace(id, payload).await?;
    Ok(Json(Confirmation::new("Borrower updated successfully", id)))
}

/// Delete a borrower
#[utoipa::path(
    delete,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    responses(
        (status = 200, description = "Borrower deleted", body = Confirmation),
        (status = 404, description = "Borrower not found", body = ErrorResponse),
        (status = 409, description = "Borrower is referenced by loans", body = ErrorResponse)
    )
)]
pub async fn delete_borrower(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Confirmation>> {
    state.services.borrowers.delete(id).await?;
    Ok(Json(Confirmation::new("Borrower deleted successfully", id)))
}
