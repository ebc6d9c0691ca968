//! Page Window Helpers
//!
//! Pure functions over page number, page size and total count.

/// One fetched page of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page_size: u32,
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn last_page(&self) -> u32 {
        last_page(self.total, self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based row number shown next to `index` on this page
    pub fn row_number(&self, index: usize) -> u64 {
        row_number(self.current_page, self.page_size, index)
    }
}

/// `ceil(total / page_size)`; 0 when the collection is empty.
pub fn last_page(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// `(current_page - 1) * page_size + index + 1`
pub fn row_number(current_page: u32, page_size: u32, index: usize) -> u64 {
    u64::from(current_page.saturating_sub(1)) * u64::from(page_size) + index as u64 + 1
}

/// Whether `page` can be requested for this total
pub fn is_valid_page(page: u32, total: u64, page_size: u32) -> bool {
    page >= 1 && page <= last_page(total, page_size)
}

/// Item count a server should return for `page`
pub fn expected_len(page: u32, total: u64, page_size: u32) -> u64 {
    let size = u64::from(page_size);
    let skipped = u64::from(page.saturating_sub(1)) * size;
    total.saturating_sub(skipped).min(size)
}

/// Pagination bar state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub pages: Vec<u32>,
    pub active: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    /// `None` when there is nothing to paginate.
    pub fn for_page<T>(page: &Page<T>) -> Option<Self> {
        if page.is_empty() {
            return None;
        }
        let last = page.last_page().max(page.current_page);
        Some(Self {
            pages: (1..=last).collect(),
            active: page.current_page,
            previous_enabled: page.current_page > 1,
            next_enabled: page.current_page < last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current_page: u32, len: usize, total: u64) -> Page<u32> {
        Page {
            items: (0..len as u32).collect(),
            total,
            page_size: 10,
            current_page,
        }
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 10), 0);
        assert_eq!(last_page(1, 10), 1);
        assert_eq!(last_page(10, 10), 1);
        assert_eq!(last_page(15, 10), 2);
        assert_eq!(last_page(5, 0), 0);
    }

    #[test]
    fn test_row_number() {
        assert_eq!(row_number(1, 10, 0), 1);
        assert_eq!(row_number(2, 10, 4), 15);
        assert_eq!(page(3, 1, 21).row_number(0), 21);
    }

    #[test]
    fn test_valid_pages() {
        assert!(is_valid_page(2, 15, 10));
        assert!(!is_valid_page(3, 15, 10));
        assert!(!is_valid_page(0, 15, 10));
        assert!(!is_valid_page(1, 0, 10));
    }

    #[test]
    fn test_expected_len() {
        assert_eq!(expected_len(1, 15, 10), 10);
        assert_eq!(expected_len(2, 15, 10), 5);
        assert_eq!(expected_len(3, 15, 10), 0);
    }

    #[test]
    fn test_controls_on_last_page() {
        let controls = PageControls::for_page(&page(2, 5, 15)).unwrap();
        assert_eq!(controls.pages, vec![1, 2]);
        assert_eq!(controls.active, 2);
        assert!(controls.previous_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn test_controls_on_first_page() {
        let controls = PageControls::for_page(&page(1, 10, 15)).unwrap();
        assert!(!controls.previous_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn test_no_controls_for_empty_page() {
        assert_eq!(PageControls::for_page(&page(1, 0, 0)), None);
    }
}
