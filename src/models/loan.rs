//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::require;
use crate::error::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loan record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i64,
    pub borrower_id: i64,
    pub item_id: i64,
    pub loan_date: NaiveDate,
    /// `None` while the item is still out
    pub return_date: Option<NaiveDate>,
}

/// Create / replace loan request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoanPayload {
    #[validate(required(message = "is required"))]
    pub borrower_id: Option<i64>,
    #[validate(required(message = "is required"))]
    pub item_id: Option<i64>,
    /// Start of the loan (YYYY-MM-DD)
    #[validate(
        required(message = "is required"),
        custom(function = "iso_date")
    )]
    pub loan_date: Option<String>,
    /// Date the item came back (YYYY-MM-DD)
    #[validate(custom(function = "iso_date"))]
    pub return_date: Option<String>,
}

/// Validated loan fields
#[derive(Debug, Clone, PartialEq)]
pub struct LoanFields {
    pub borrower_id: i64,
    pub item_id: i64,
    pub loan_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl LoanPayload {
    pub fn into_fields(self) -> AppResult<LoanFields> {
        self.validate()?;

        let loan_date = parse_date(&require(self.loan_date, "loan_date")?, "loan_date")?;
        let return_date = self
            .return_date
            .as_deref()
            .map(|d| parse_date(d, "return_date"))
            .transpose()?;

        if let Some(returned) = return_date {
            if returned < loan_date {
                return Err(AppError::Validation(
                    "return_date: must not precede loan_date".to_string(),
                ));
            }
        }

        Ok(LoanFields {
            borrower_id: require(self.borrower_id, "borrower_id")?,
            item_id: require(self.item_id, "item_id")?,
            loan_date,
            return_date,
        })
    }
}

fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("{}: expected a YYYY-MM-DD date", field)))
}

fn iso_date(value: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_err() {
        let mut err = ValidationError::new("date");
        err.message = Some("expected a YYYY-MM-DD date".into());
        return Err(err);
    }
    Ok(())
}
