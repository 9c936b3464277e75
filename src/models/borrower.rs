//! Borrower model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{not_blank, require};
use crate::error::AppResult;

/// Borrower record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrower {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub age: Option<i32>,
}

/// Create / replace borrower request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BorrowerPayload {
    #[validate(
        required(message = "is required"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "is required"),
        custom(function = "not_blank")
    )]
    pub city: Option<String>,
    #[validate(range(min = 0, max = 150, message = "must be between 0 and 150"))]
    pub age: Option<i32>,
}

/// Validated borrower fields
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowerFields {
    pub name: String,
    pub city: String,
    pub age: Option<i32>,
}

impl BorrowerPayload {
    pub fn into_fields(self) -> AppResult<BorrowerFields> {
        self.validate()?;
        Ok(BorrowerFields {
            name: require(self.name, "name")?,
            city: require(self.city, "city")?,
            age: self.age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn missing_city_is_rejected() {
        let payload = BorrowerPayload {
            name: Some("Ada".into()),
            ..Default::default()
        };
        match payload.into_fields() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("city")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn negative_age_is_rejected() {
        let payload = BorrowerPayload {
            name: Some("Ada".into()),
            city: Some("London".into()),
            age: Some(-3),
        };
        assert!(matches!(payload.into_fields(), Err(AppError::Validation(_))));
    }

    #[test]
    fn age_defaults_to_absent() {
        let fields = BorrowerPayload {
            name: Some("Ada".into()),
            city: Some("London".into()),
            age: None,
        }
        .into_fields()
        .unwrap();
        assert_eq!(fields.age, None);
    }
}
