//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::JsonBody;
use crate::{
    error::AppResult,
    models::{
        loan::{Loan, LoanPayload},
        Confirmation,
    },
};

/// Record a new loan
#[utoipa::path(
    post,
    path = "/newloans",
    tag = "loans",
    request_body = LoanPayload,
    responses(
        (status = 201, description = "Loan created", body = Confirmation),
        (status = 400, description = "Missing field, bad date or unknown borrower/item", body = ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    JsonBody(payload): JsonBody<LoanPayload>,
) -> AppResult<(StatusCode, Json<Confirmation>)> {
    let loan = state.services.loans.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new("Loan created successfully", loan.id)),
    ))
}

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.loans.list().await?;
    Ok(Json(loans))
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found", body = ErrorResponse)
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get_by_id(id).await?;
    Ok(Json(loan))
}

/// Replace a loan
#[utoipa::path(
    put,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    request_body = LoanPayload,
    responses(
        (status = 200, description = "Loan replaced", body = Confirmation),
        (status = 400, description = "Missing field, bad date or unknown borrower/item", body = ErrorResponse),
        (status = 404, description = "Loan not found", body = ErrorResponse)
    )
)]
pub async fn update_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<LoanPayload>,
) -> AppResult<Json<Confirmation>> {
    state.services.loans.replace(id, payload).await?;
    Ok(Json(Confirmation::new("Loan updated successfully", id)))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan deleted", body = Confirmation),
        (status = 404, description = "Loan not found", body = ErrorResponse)
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Confirmation>> {
    state.services.loans.delete(id).await?;
    Ok(Json(Confirmation::new("Loan deleted successfully", id)))
}
