//! Wire-level resources for API requests and responses.
//!
//! All resources use Serde for JSON serialization/deserialization and
//! validator for input validation.

pub mod favorite_source;
pub mod health;
pub mod pagination;
