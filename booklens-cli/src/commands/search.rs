//! Search, category and author commands

use super::output::print_page;
use anyhow::{Context, Result};
use booklens_core::{normalize_page, Catalog, PageWindow, QueryClient};

/// Search the catalog and print one page of results
pub async fn search(
    client: &QueryClient,
    query: &str,
    page: u32,
    per_page: u32,
    json: bool,
) -> Result<()> {
    let window = PageWindow::for_page(page, per_page)?;
    let results = client
        .search(query, window)
        .await
        .with_context(|| format!("Failed to search for '{}'", query))?;

    print_page(&normalize_page(&results, window), json)
}

/// List the first page of a category
pub async fn category(
    client: &QueryClient,
    category: &str,
    max_results: u32,
    json: bool,
) -> Result<()> {
    let window = PageWindow::new(0, max_results)?;
    let results = client
        .search_by_category(category, max_results)
        .await
        .with_context(|| format!("Failed to load category '{}'", category))?;

    print_page(&normalize_page(&results, window), json)
}

/// List the first page of books by an author
pub async fn author(client: &QueryClient, author: &str, max_results: u32, json: bool) -> Result<()> {
    let window = PageWindow::new(0, max_results)?;
    let results = client
        .search_by_author(author, max_results)
        .await
        .with_context(|| format!("Failed to load books by '{}'", author))?;

    print_page(&normalize_page(&results, window), json)
}
