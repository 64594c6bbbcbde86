//! Common types for listing views
//!
//! The browsing screens page and filter collections already held in memory,
//! so pagination here slices a local snapshot rather than describing a
//! database query.

use serde::{Deserialize, Serialize};

/// Pagination parameters (1-based page index)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Slice one page out of an in-memory collection.
///
/// A zero `per_page` yields an empty page, and a page past the end yields an
/// empty data set; the metadata always reflects the full collection.
pub fn paginate<T: Clone>(items: &[T], params: &Pagination) -> PaginatedResponse<T> {
    let per_page = params.per_page as usize;
    let page = params.page.max(1) as usize;
    let total_items = items.len() as u64;
    let total_pages = if per_page == 0 {
        0
    } else {
        items.len().div_ceil(per_page) as u32
    };

    let start = (page - 1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());

    PaginatedResponse {
        data: items[start..end].to_vec(),
        pagination: PaginationMeta {
            page: page as u32,
            per_page: params.per_page,
            total_items,
            total_pages,
        },
    }
}

/// Case-insensitive substring match over a record's searchable fields, as
/// used by the inventory browser's filter box. An empty query matches
/// everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_first_page() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, &Pagination::default());
        assert_eq!(page.data.len(), 20);
        assert_eq!(page.data[0], 1);
        assert_eq!(page.pagination.total_items, 45);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(
            &items,
            &Pagination {
                page: 3,
                per_page: 20,
            },
        );
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.data[0], 41);
    }

    #[test]
    fn test_paginate_past_end() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(
            &items,
            &Pagination {
                page: 9,
                per_page: 20,
            },
        );
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_paginate_zero_per_page() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(
            &items,
            &Pagination {
                page: 1,
                per_page: 0,
            },
        );
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query(&["COPPER TUBE", "1/4 x 15m"], "copper"));
        assert!(matches_query(&["COPPER TUBE", "1/4 x 15m"], "  1/4 "));
        assert!(matches_query(&["COPPER TUBE"], ""));
        assert!(!matches_query(&["COPPER TUBE"], "bracket"));
    }
}
