//! Normalize command implementation

use super::output::{print_page, print_record};
use anyhow::{Context, Result};
use booklens_core::{normalize_page, PageWindow, RawCatalogRecord, SearchPage};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Normalize a saved volume or search page
pub fn normalize(input: &str, json: bool) -> Result<()> {
    let input_path = Path::new(input);

    let file =
        File::open(input_path).with_context(|| format!("Failed to open input file: {}", input))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {} as JSON", input))?;

    if is_search_page(&value) {
        let page: SearchPage = serde_json::from_value(value)
            .with_context(|| format!("{} is not a catalog search page", input))?;
        // A saved page carries no window; report it as the first page of its own size
        let size = page
            .items
            .len()
            .clamp(1, booklens_core::pagination::MAX_RESULTS_LIMIT as usize) as u32;
        let window = PageWindow::new(0, size)?;
        print_page(&normalize_page(&page, window), json)
    } else {
        let raw: RawCatalogRecord = serde_json::from_value(value)
            .with_context(|| format!("{} is not a catalog volume", input))?;
        print_record(&booklens_core::normalize(&raw), json)
    }
}

fn is_search_page(value: &Value) -> bool {
    value.get("items").is_some() || value.get("totalItems").is_some()
}
