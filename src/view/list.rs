//! Paged list presentation rules.

use crate::api::types::{ListMetadata, Pagination};

/// One page of a listing plus whatever paging the backend reported.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, pagination: Option<Pagination>) -> Self {
        Self { items, pagination }
    }

    #[must_use]
    pub fn from_metadata(items: Vec<T>, metadata: Option<ListMetadata>) -> Self {
        Self {
            items,
            pagination: metadata.and_then(|m| m.pagination),
        }
    }

    /// Paging controls render only when there is more than one page.
    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.total_pages > 1)
    }

    /// Footer label, e.g. `Showing 21 to 40 of 97`.
    #[must_use]
    pub fn range_label(&self) -> Option<String> {
        let p = self.pagination.as_ref()?;
        let start = u64::from(p.current_page.saturating_sub(1)) * u64::from(p.records_per_page) + 1;
        let end = (u64::from(p.current_page) * u64::from(p.records_per_page)).min(p.total_records);
        Some(format!("Showing {start} to {end} of {}", p.total_records))
    }

    /// Total record count, falling back to the visible items when the
    /// backend sent no paging block.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.pagination
            .as_ref()
            .map_or(self.items.len() as u64, |p| p.total_records)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(current_page: u32, total_pages: u32, total_records: u64) -> Pagination {
        Pagination {
            current_page,
            total_pages,
            total_records,
            records_per_page: 20,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }

    #[test]
    fn test_single_page_hides_paging_controls() {
        let page = Page::new(vec![1, 2, 3], Some(pagination(1, 1, 3)));
        assert!(!page.show_pagination());
    }

    #[test]
    fn test_multiple_pages_show_paging_controls() {
        let page = Page::new(vec![0; 20], Some(pagination(1, 5, 97)));
        assert!(page.show_pagination());
    }

    #[test]
    fn test_missing_pagination_hides_controls_and_counts_items() {
        let page = Page::new(vec!["a", "b"], None);
        assert!(!page.show_pagination());
        assert!(page.range_label().is_none());
        assert_eq!(page.total(), 2);
    }

    #[test]
    fn test_range_label_for_middle_page() {
        let page = Page::new(vec![0; 20], Some(pagination(2, 5, 97)));
        assert_eq!(page.range_label().as_deref(), Some("Showing 21 to 40 of 97"));
    }

    #[test]
    fn test_range_label_clamps_final_page() {
        let page = Page::new(vec![0; 17], Some(pagination(5, 5, 97)));
        assert_eq!(page.range_label().as_deref(), Some("Showing 81 to 97 of 97"));
    }

    #[test]
    fn test_total_prefers_backend_count() {
        let page = Page::new(vec![0; 20], Some(pagination(1, 5, 97)));
        assert_eq!(page.total(), 97);
    }
}
