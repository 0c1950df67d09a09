//! Catalog query client
//!
//! [`Catalog`] is the seam front ends depend on; [`QueryClient`] implements it
//! over HTTP against the catalog's `volumes` endpoints. Calls are stateless
//! and independent: no caching, no retry, no timeout imposed here.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::pagination::PageWindow;
use crate::types::{RawCatalogRecord, SearchPage};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Read-only access to a book catalog
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search volumes matching `query` within the given window
    async fn search(&self, query: &str, window: PageWindow) -> Result<SearchPage>;

    /// Fetch a single volume by its catalog identifier
    async fn get_by_id(&self, id: &str) -> Result<RawCatalogRecord>;

    /// First page of volumes filed under a subject
    async fn search_by_category(&self, category: &str, max_results: u32) -> Result<SearchPage> {
        let window = PageWindow::new(0, max_results)?;
        self.search(&format!("subject:{}", category), window).await
    }

    /// First page of volumes by an author
    async fn search_by_author(&self, author: &str, max_results: u32) -> Result<SearchPage> {
        let window = PageWindow::new(0, max_results)?;
        self.search(&format!("inauthor:{}", author), window).await
    }
}

/// HTTP client for the catalog
///
/// Cheap to clone; clones share one connection pool and may be used
/// concurrently.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl QueryClient {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let http = builder.build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// URL of the volumes listing for a query and window
    pub fn search_url(&self, query: &str, window: PageWindow) -> String {
        let url = format!(
            "{}/volumes?q={}&startIndex={}&maxResults={}",
            self.config.base_url,
            urlencoding::encode(query),
            window.start_index(),
            window.max_results()
        );
        self.with_key(url, '&')
    }

    /// URL of a single volume
    pub fn volume_url(&self, id: &str) -> String {
        let url = format!("{}/volumes/{}", self.config.base_url, urlencoding::encode(id));
        self.with_key(url, '?')
    }

    fn with_key(&self, url: String, separator: char) -> String {
        match &self.config.api_key {
            Some(key) => format!("{}{}key={}", url, separator, urlencoding::encode(key)),
            None => url,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("Catalog request failed: {}", e);
            CatalogError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog responded with status {}", status);
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            warn!("Failed to decode catalog response: {}", e);
            CatalogError::Transport(e.to_string())
        })
    }
}

#[async_trait]
impl Catalog for QueryClient {
    async fn search(&self, query: &str, window: PageWindow) -> Result<SearchPage> {
        if query.trim().is_empty() {
            return Err(CatalogError::InvalidRequest(
                "search query must not be empty".to_string(),
            ));
        }

        debug!(
            query,
            start_index = window.start_index(),
            max_results = window.max_results(),
            "Searching catalog"
        );
        let page: SearchPage = self.get_json(&self.search_url(query, window)).await?;
        debug!(
            total_items = page.total_items,
            returned = page.items.len(),
            "Catalog search complete"
        );
        Ok(page)
    }

    async fn get_by_id(&self, id: &str) -> Result<RawCatalogRecord> {
        if id.trim().is_empty() {
            return Err(CatalogError::InvalidRequest(
                "volume id must not be empty".to_string(),
            ));
        }

        debug!(id, "Fetching volume");
        self.get_json(&self.volume_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> QueryClient {
        QueryClient::new(CatalogConfig::new("https://catalog.test/books/v1").unwrap()).unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let window = PageWindow::new(20, 10).unwrap();
        let url = client().search_url("harry potter & friends", window);

        assert_eq!(
            url,
            "https://catalog.test/books/v1/volumes?q=harry%20potter%20%26%20friends&startIndex=20&maxResults=10"
        );
    }

    #[test]
    fn test_search_url_with_prefix_query() {
        let window = PageWindow::new(0, 8).unwrap();
        let url = client().search_url("subject:fiction", window);
        assert!(url.ends_with("/volumes?q=subject%3Afiction&startIndex=0&maxResults=8"));
    }

    #[test]
    fn test_api_key_appended() {
        let config = CatalogConfig::new("https://catalog.test").unwrap().with_api_key("k 1");
        let client = QueryClient::new(config).unwrap();

        assert_eq!(
            client.volume_url("abc"),
            "https://catalog.test/volumes/abc?key=k%201"
        );
        assert!(client
            .search_url("q", PageWindow::default())
            .ends_with("&maxResults=10&key=k%201"));
    }

    #[test]
    fn test_volume_url_encodes_id() {
        assert_eq!(
            client().volume_url("a/b"),
            "https://catalog.test/books/v1/volumes/a%2Fb"
        );
    }

    #[tokio::test]
    async fn test_blank_query_rejected_without_request() {
        let err = client()
            .search("   ", PageWindow::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_category_window_validated() {
        let err = client().search_by_category("fiction", 0).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRequest(_)));
    }
}
