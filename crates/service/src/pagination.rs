//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

/// Hard ceiling on rows returned by a single list call.
pub const MAX_PAGE_SIZE: u32 = 25;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Build from optional hints; absent values fall back to the defaults.
    pub fn from_hints(page: Option<u32>, per_page: Option<u32>) -> Self {
        let d = Self::default();
        Self { page: page.unwrap_or(d.page), per_page: per_page.unwrap_or(d.per_page) }
    }

    /// Clamp to sane defaults and convert to `(offset, limit)`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, MAX_PAGE_SIZE);
        ((page as u64 - 1) * per_page as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: MAX_PAGE_SIZE } }
}
