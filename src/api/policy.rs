//! Loan policy endpoints

use axum::{extract::Path, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::category::Category;

#[derive(Serialize, ToSchema)]
pub struct MaxLoanDaysResponse {
    /// Category code as given
    pub category: String,
    /// `null` when no policy is defined for the category
    pub max_loan_days: Option<u32>,
}

/// Maximum loan duration for an item category
#[utoipa::path(
    get,
    path = "/categories/{category}/max-loan-days",
    tag = "policy",
    params(("category" = String, Path, description = "Category code")),
    responses(
        (status = 200, description = "Loan duration policy", body = MaxLoanDaysResponse)
    )
)]
pub async fn max_loan_days(Path(code): Path<String>) -> Json<MaxLoanDaysResponse> {
    let category = Category::from(code);
    Json(MaxLoanDaysResponse {
        max_loan_days: category.max_loan_days(),
        category: category.into(),
    })
}
