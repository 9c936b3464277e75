//! Data models for the lending catalog

pub mod borrower;
pub mod category;
pub mod item;
pub mod loan;

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationError;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use borrower::{Borrower, BorrowerFields, BorrowerPayload};
pub use category::{max_loan_days, Category};
pub use item::{Item, ItemFields, ItemPayload};
pub use loan::{Loan, LoanFields, LoanPayload};

/// Confirmation returned by write operations
#[derive(Debug, Serialize, ToSchema)]
pub struct Confirmation {
    pub message: String,
    /// Identifier of the affected record
    pub id: i64,
}

impl Confirmation {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

/// Unwrap a required payload field, failing with a validation error when absent
pub(crate) fn require<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("{}: is required", field)))
}

/// Reject empty and whitespace-only text
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
