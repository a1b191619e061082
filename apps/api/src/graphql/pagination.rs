//! Shared pagination utilities for GraphQL resolvers
//!
//! Every list query pages with the same fixed page size; these helpers
//! keep the page arithmetic consistent across resolvers.

/// Fixed number of items per page for list queries
pub const PAGE_SIZE: i64 = 25;

/// Clamp a page number to the 1-based range
#[inline]
pub fn clamp_page(page: i32) -> i64 {
    page.max(1) as i64
}

/// Offset of the first row on the given 1-based page
#[inline]
pub fn page_offset(page: i64) -> i64 {
    (page - 1) * PAGE_SIZE
}

/// Number of pages needed for `total` rows (ceiling division)
#[inline]
pub fn total_pages(total: i64) -> i64 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page_valid() {
        assert_eq!(clamp_page(1), 1);
        assert_eq!(clamp_page(7), 7);
    }

    #[test]
    fn test_clamp_page_too_low() {
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(-5), 1);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 25);
        assert_eq!(page_offset(5), 100);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(25), 1);
        assert_eq!(total_pages(26), 2);
        assert_eq!(total_pages(50), 2);
        assert_eq!(total_pages(51), 3);
    }
}
