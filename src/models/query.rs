use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 50;
/// Larger page sizes are clamped to this many rows.
pub const MAX_PAGE_SIZE: u64 = 10_000;

/// Pagination parameters. Absent or zero values fall back to the defaults.
/// The effective page size never exceeds [`MAX_PAGE_SIZE`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QueryContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl QueryContext {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    pub fn page(&self) -> u64 {
        match self.page {
            Some(page) if page > 0 => page,
            _ => DEFAULT_PAGE,
        }
    }

    pub fn page_size(&self) -> u64 {
        match self.page_size {
            Some(size) if size > 0 => size.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// Whether the requested page size was cut down to [`MAX_PAGE_SIZE`].
    pub fn is_clamped(&self) -> bool {
        self.page_size.is_some_and(|size| size > MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_query() {
        let query: QueryContext = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 50);
    }

    #[test]
    fn test_zero_is_treated_as_absent() {
        let query = QueryContext::new(0, 0);
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 50);
    }

    #[test]
    fn test_oversized_page_is_clamped() {
        let query = QueryContext::new(1, u64::MAX);
        assert_eq!(query.page_size(), MAX_PAGE_SIZE);
        assert!(query.is_clamped());

        let query = QueryContext::new(1, MAX_PAGE_SIZE);
        assert_eq!(query.page_size(), MAX_PAGE_SIZE);
        assert!(!query.is_clamped());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let query: QueryContext = serde_json::from_str(r#"{"page": 4, "pageSize": 10}"#).unwrap();
        assert_eq!(query, QueryContext::new(4, 10));
    }
}
