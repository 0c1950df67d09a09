//! Page windows and boundary arithmetic
//!
//! A page window is the `(startIndex, maxResults)` pair forwarded verbatim to
//! the catalog. The catalog's `totalItems` is taken as exact when deciding
//! whether another page exists, even though it is an estimate for large
//! result sets.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Largest page the catalog will serve
pub const MAX_RESULTS_LIMIT: u32 = 40;

/// Page size used when a caller does not choose one
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// A slice of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    start_index: u32,
    max_results: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::unchecked(0, DEFAULT_MAX_RESULTS)
    }
}

impl PageWindow {
    /// Create a window, rejecting page sizes outside `1..=40`
    pub fn new(start_index: u32, max_results: u32) -> Result<Self> {
        validate_max_results(max_results)?;
        Ok(Self::unchecked(start_index, max_results))
    }

    /// Window for a zero-based page number
    pub fn for_page(page: u32, page_size: u32) -> Result<Self> {
        validate_max_results(page_size)?;
        let start_index = page.checked_mul(page_size).ok_or_else(|| {
            CatalogError::InvalidRequest(format!("page {} is out of range", page))
        })?;
        Ok(Self::unchecked(start_index, page_size))
    }

    pub(crate) fn unchecked(start_index: u32, max_results: u32) -> Self {
        Self {
            start_index,
            max_results,
        }
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Zero-based page number
    pub fn page_number(&self) -> u32 {
        if self.max_results == 0 {
            return 0;
        }
        self.start_index / self.max_results
    }

    /// Whether results exist past this window
    pub fn has_next(&self, total_items: u64) -> bool {
        u64::from(self.start_index) + u64::from(self.max_results) < total_items
    }

    pub fn has_prev(&self) -> bool {
        self.start_index > 0
    }

    /// The window immediately after this one
    pub fn next(&self) -> Self {
        Self::unchecked(
            self.start_index.saturating_add(self.max_results),
            self.max_results,
        )
    }

    /// The window immediately before this one, clamped at the first result
    pub fn prev(&self) -> Self {
        Self::unchecked(
            self.start_index.saturating_sub(self.max_results),
            self.max_results,
        )
    }
}

fn validate_max_results(max_results: u32) -> Result<()> {
    if (1..=MAX_RESULTS_LIMIT).contains(&max_results) {
        Ok(())
    } else {
        Err(CatalogError::InvalidRequest(format!(
            "maxResults must be between 1 and {}, got {}",
            MAX_RESULTS_LIMIT, max_results
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_has_no_next_page() {
        let window = PageWindow::new(0, 10).unwrap();
        assert!(!window.has_next(10));
        assert!(window.has_next(11));
    }

    #[test]
    fn test_first_page_has_no_prev() {
        let window = PageWindow::for_page(0, 10).unwrap();
        assert!(!window.has_prev());
        assert!(window.next().has_prev());
    }

    #[test]
    fn test_for_page_offsets() {
        let window = PageWindow::for_page(3, 10).unwrap();
        assert_eq!(window.start_index(), 30);
        assert_eq!(window.page_number(), 3);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let window = PageWindow::new(5, 10).unwrap();
        assert_eq!(window.prev().start_index(), 0);
    }

    #[test]
    fn test_max_results_bounds() {
        assert!(PageWindow::new(0, 0).is_err());
        assert!(PageWindow::new(0, 1).is_ok());
        assert!(PageWindow::new(0, 40).is_ok());
        assert!(matches!(
            PageWindow::new(0, 41),
            Err(CatalogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_for_page_overflow_rejected() {
        assert!(PageWindow::for_page(u32::MAX, 40).is_err());
    }

    #[test]
    fn test_zero_total_never_has_next() {
        assert!(!PageWindow::default().has_next(0));
    }
}
