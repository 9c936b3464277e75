//! Item (lendable catalog unit) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{category::Category, not_blank, require};
use crate::error::AppResult;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: i64,
    pub title: String,
    /// Author, director, composer...
    pub creator: String,
    pub publication_year: Option<i32>,
    /// Category code driving the maximum loan duration ("1", "2", "3")
    #[sqlx(try_from = "String")]
    #[schema(value_type = String, example = "1")]
    pub category: Category,
}

/// Create / replace item request.
///
/// Required fields are optional here so that a missing field is reported as
/// a validation failure rather than a body decoding error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ItemPayload {
    #[validate(
        required(message = "is required"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "is required"),
        custom(function = "not_blank")
    )]
    pub creator: Option<String>,
    pub publication_year: Option<i32>,
    #[validate(
        required(message = "is required"),
        custom(function = "not_blank")
    )]
    pub category: Option<String>,
}

/// Validated item fields, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub title: String,
    pub creator: String,
    pub publication_year: Option<i32>,
    pub category: Category,
}

impl ItemPayload {
    pub fn into_fields(self) -> AppResult<ItemFields> {
        self.validate()?;
        Ok(ItemFields {
            title: require(self.title, "title")?,
            creator: require(self.creator, "creator")?,
            publication_year: self.publication_year,
            category: Category::from(require(self.category, "category")?),
        })
    }
}

impl Item {
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            title: self.title.clone(),
            creator: self.creator.clone(),
            publication_year: self.publication_year,
            category: self.category.clone(),
        }
    }
}
