//! Pagination types for list operations.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping both values into range.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Reject a zero page size, the one request that describes no window
    /// at all. Page 0 and oversized pages are served as they come.
    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::validation("Page size must be at least 1"));
        }
        Ok(())
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// The `[offset, offset + limit)` window clipped to `len` items.
    ///
    /// Past the end, and for page 0, the window is empty.
    pub fn window(&self, len: usize) -> Range<usize> {
        if self.page == 0 {
            return 0..0;
        }
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start
            .saturating_add(usize::try_from(self.limit()).unwrap_or(usize::MAX))
            .min(len);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 || page_size == 0 {
            1
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Cut one page out of an already filtered, ordered sequence.
    pub fn paginate(mut all: Vec<T>, request: &PageRequest) -> Self {
        let total = all.len() as u64;
        let window = request.window(all.len());
        let items: Vec<T> = all.drain(window).collect();
        Self::new(items, request.page, request.page_size, total)
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_half_open() {
        let page = PageRequest::new(2, 10);
        assert_eq!(page.window(35), 10..20);
        assert_eq!(PageRequest::new(4, 10).window(35), 30..35);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let window = PageRequest::new(5, 10).window(12);
        assert!(window.is_empty());
    }

    #[test]
    fn test_paginate_keeps_order() {
        let all: Vec<u32> = (0..25).collect();
        let page = PageResponse::paginate(all, &PageRequest::new(3, 10));
        assert_eq!(page.items, (20..25).collect::<Vec<_>>());
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_validate_only_rejects_zero_page_size() {
        let zero = PageRequest {
            page: 1,
            page_size: 0,
        };
        assert!(zero.validate().is_err());

        let page_zero = PageRequest {
            page: 0,
            page_size: 10,
        };
        assert!(page_zero.validate().is_ok());

        let oversized = PageRequest {
            page: 1,
            page_size: 200,
        };
        assert!(oversized.validate().is_ok());
        assert!(PageRequest::default().validate().is_ok());
    }

    #[test]
    fn test_page_zero_is_an_empty_window() {
        let page_zero = PageRequest {
            page: 0,
            page_size: 10,
        };
        assert!(page_zero.window(35).is_empty());
        let page = PageResponse::paginate((0..35).collect::<Vec<u32>>(), &page_zero);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 35);
    }

    #[test]
    fn test_oversized_page_is_served_whole() {
        let oversized = PageRequest {
            page: 1,
            page_size: 200,
        };
        let page = PageResponse::paginate((0..150).collect::<Vec<u32>>(), &oversized);
        assert_eq!(page.items.len(), 150);
        assert!(!page.has_next);
    }
}
