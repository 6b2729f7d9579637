//! Resources for the favorite sources endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::entities::SOURCE_REGEX;

/// Drops surrounding whitespace so the value is validated as it will be stored.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Request body for creating a favorite source.
///
/// ```json
/// { "source": "bbc.com" }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFavoriteSourceResource {
    #[validate(length(min = 1, max = 255, message = "source must be 1-255 characters"))]
    #[validate(regex(path = "*SOURCE_REGEX", message = "source contains invalid characters"))]
    #[serde(deserialize_with = "trimmed")]
    pub source: String,
}

/// A favorite source as returned by the API.
///
/// ```json
/// { "id": 1, "source": "bbc.com" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSourceResource {
    pub id: i64,
    pub source: String,
}

/// One page of favorite sources.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteSourceListResource {
    pub items: Vec<FavoriteSourceResource>,
    pub page: u32,
    pub page_size: u32,
}
