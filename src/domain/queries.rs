//! Queries carry the parameters of read-only lookups.

/// Looks up a single favorite source by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFavoriteSourceByIdQuery {
    pub id: i64,
}

impl GetFavoriteSourceByIdQuery {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Lists favorite sources ordered by id, one page at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetAllFavoriteSourcesQuery {
    pub offset: i64,
    pub limit: i64,
}

impl GetAllFavoriteSourcesQuery {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }
}
