//! Search result pages

use super::{DisplayRecord, RawCatalogRecord};
use crate::pagination::PageWindow;
use serde::{Deserialize, Serialize};

/// One page of raw search results
///
/// Built fresh for every query and discarded once mapped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPage {
    /// Catalog's total match count; an estimate for large result sets
    pub total_items: u64,

    /// Records in this window, at most `maxResults` long
    pub items: Vec<RawCatalogRecord>,
}

/// A search page after normalization, with its boundary flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPage {
    pub total_items: u64,
    pub start_index: u32,
    pub max_results: u32,
    pub items: Vec<DisplayRecord>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl DisplayPage {
    /// The window this page was requested with
    pub fn window(&self) -> PageWindow {
        PageWindow::unchecked(self.start_index, self.max_results)
    }

    /// Zero-based page number
    pub fn page_number(&self) -> u32 {
        self.window().page_number()
    }
}
