//! Page-number pagination for catalog listings.
//!
//! Requests are validated here before any query is issued: a page or page
//! size below 1 is a validation error, never a silently clamped value.

use serde::Serialize;

use crate::error::CoreError;

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest accepted page size. Larger requests are rejected, not clamped.
pub const MAX_PAGE_SIZE: i64 = 200;

/// A validated page request. Construct through [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Validate raw paging input. `None` falls back to the defaults.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if page_size < 1 {
            return Err(CoreError::Validation(format!(
                "page_size must be at least 1, got {page_size}"
            )));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(CoreError::Validation(format!(
                "page_size must be at most {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        if (page - 1).checked_mul(page_size).is_none() {
            return Err(CoreError::Validation(format!(
                "page {page} is out of range"
            )));
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip. Overflow was ruled out in [`PageRequest::new`].
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Rows to take.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// One window of a filtered listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Filtered row count before windowing.
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            page_size: request.page_size(),
        }
    }
}

/// Normalise a free-text search term. Blank input means "no search".
pub fn normalize_search(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|s| !s.is_empty())
}

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// `%`, `_` and `\` in the term are escaped so they match literally
/// (PostgreSQL's default LIKE escape character is `\`).
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let req = PageRequest::new(None, None).unwrap();
        assert_eq!(req.page(), DEFAULT_PAGE);
        assert_eq!(req.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn page_below_one_is_rejected() {
        assert_matches!(PageRequest::new(Some(0), Some(10)), Err(CoreError::Validation(_)));
        assert_matches!(PageRequest::new(Some(-3), Some(10)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_size_below_one_is_rejected() {
        assert_matches!(PageRequest::new(Some(1), Some(0)), Err(CoreError::Validation(_)));
        assert_matches!(PageRequest::new(Some(1), Some(-1)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn oversized_page_size_is_rejected_not_clamped() {
        assert!(PageRequest::new(Some(1), Some(MAX_PAGE_SIZE)).is_ok());
        assert_matches!(
            PageRequest::new(Some(1), Some(MAX_PAGE_SIZE + 1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn offset_overflow_is_rejected() {
        assert_matches!(
            PageRequest::new(Some(i64::MAX), Some(MAX_PAGE_SIZE)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn offset_follows_page_number() {
        let req = PageRequest::new(Some(3), Some(25)).unwrap();
        assert_eq!(req.offset(), 50);
        assert_eq!(req.limit(), 25);
    }

    #[test]
    fn page_echoes_request() {
        let req = PageRequest::new(Some(2), Some(5)).unwrap();
        let page = Page::new(vec!["a"], 6, req);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 5);
        assert_eq!(page.total, 6);
    }

    #[test]
    fn blank_search_is_ignored() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some(" kg ")), Some("kg"));
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("cm"), "%cm%");
        assert_eq!(contains_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }
}
