//! Commands carry the parameters of state-mutating operations.
//!
//! A command is built per request by the API transform layer, handed to a
//! command service, and dropped once the service returns.

/// Request to register a new favorite source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFavoriteSourceCommand {
    pub source: String,
}

impl CreateFavoriteSourceCommand {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}
