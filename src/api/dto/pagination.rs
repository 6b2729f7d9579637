//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub page_size: u32,
    pub offset: i64,
    pub limit: i64,
}

impl PaginationParams {
    /// Validates pagination parameters and converts them to an offset/limit window.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 100
    pub fn validate(&self) -> Result<Page, String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(format!("Page size must be between 1 and {MAX_PAGE_SIZE}"));
        }

        Ok(Page {
            page,
            page_size,
            offset: (i64::from(page) - 1) * i64::from(page_size),
            limit: i64::from(page_size),
        })
    }
}
