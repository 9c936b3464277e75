//! Item category and the loan-duration policy attached to it

use serde::{Deserialize, Serialize};

/// Item category.
///
/// Externally a category is a short code string (`"1"`, `"2"`, `"3"`).
/// Codes outside the known set are kept verbatim in [`Category::Unknown`]
/// so they round-trip through storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Code `"1"`
    Standard,
    /// Code `"2"`
    Short,
    /// Code `"3"`
    Express,
    Unknown(String),
}

impl Category {
    /// External code for this category
    pub fn as_str(&self) -> &str {
        match self {
            Category::Standard => "1",
            Category::Short => "2",
            Category::Express => "3",
            Category::Unknown(code) => code,
        }
    }

    /// Maximum number of days an item of this category may be kept on loan.
    ///
    /// `None` means no policy is defined for the category.
    pub fn max_loan_days(&self) -> Option<u32> {
        match self {
            Category::Standard => Some(10),
            Category::Short => Some(5),
            Category::Express => Some(2),
            Category::Unknown(_) => None,
        }
    }
}

impl From<&str> for Category {
    fn from(code: &str) -> Self {
        match code {
            "1" => Category::Standard,
            "2" => Category::Short,
            "3" => Category::Express,
            other => Category::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(code: String) -> Self {
        match code.as_str() {
            "1" | "2" | "3" => Category::from(code.as_str()),
            _ => Category::Unknown(code),
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        match c {
            Category::Unknown(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum loan duration in days for a category code
pub fn max_loan_days(code: &str) -> Option<u32> {
    Category::from(code).max_loan_days()
}
