//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{borrowers, health, items, loans, policy};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lending Catalog API",
        version = "0.1.0",
        description = "Items, borrowers and loans of a lending catalog"
    ),
    paths(
        // Health
        health::home,
        health::health_check,
        health::readiness_check,
        // Items
        items::create_item,
        items::list_items,
        items::get_item,
        items::update_item,
        items::delete_item,
        // Borrowers
        borrowers::create_borrower,
        borrowers::list_borrowers,
        borrowers::get_borrower,
        borrowers::update_borrower,
        borrowers::delete_borrower,
        // Loans
        loans::create_loan,
        loans::list_loans,
        loans::get_loan,
        loans::update_loan,
        loans::delete_loan,
        // Policy
        policy::max_loan_days,
    ),
    components(
        schemas(
            crate::models::item::Item,
            crate::models::item::ItemPayload,
            crate::models::borrower::Borrower,
            crate::models::borrower::BorrowerPayload,
            crate::models::loan::Loan,
            crate::models::loan::LoanPayload,
            crate::models::Confirmation,
            policy::MaxLoanDaysResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and health check endpoints"),
        (name = "items", description = "Catalog item management"),
        (name = "borrowers", description = "Borrower management"),
        (name = "loans", description = "Loan management"),
        (name = "policy", description = "Loan duration policy")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
