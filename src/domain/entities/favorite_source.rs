//! Domain entity representing a favorite news source.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Shape of a source value: letters, digits, dots, underscores and hyphens,
/// starting alphanumeric.
pub static SOURCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// Returns true when `source` has the shape of a source value.
pub fn is_valid_source(source: &str) -> bool {
    SOURCE_REGEX.is_match(source)
}

/// A news source a user has marked for prioritized retrieval.
///
/// Identity is the store-assigned `id`. The `source` value is the natural key:
/// no two favorite sources share it (compared case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSource {
    pub id: i64,
    pub source: String,
}

impl FavoriteSource {
    pub fn new(id: i64, source: String) -> Self {
        Self { id, source }
    }

    /// Returns true when `other` names the same source as this entity.
    pub fn has_source(&self, other: &str) -> bool {
        self.source.eq_ignore_ascii_case(other.trim())
    }
}

/// Input data for inserting a favorite source.
///
/// The id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavoriteSource {
    pub source: String,
}
