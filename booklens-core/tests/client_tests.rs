//! Client tests for booklens-core
//!
//! These tests run the query client against a local mock catalog and verify
//! request shapes, failure mapping, and the search-then-normalize flow.

use booklens_core::types::PLACEHOLDER_COVER_URL;
use booklens_core::{
    normalize, normalize_page, Catalog, CatalogConfig, CatalogError, PageWindow, QueryClient,
};
use mockito::{Matcher, Server};
use serde_json::{json, Value};

fn client_for(server: &Server) -> QueryClient {
    let config = CatalogConfig::new(server.url()).expect("mock server URL should be valid");
    QueryClient::new(config).expect("client should build")
}

fn fiction_record(n: usize) -> Value {
    json!({
        "kind": "books#volume",
        "id": format!("fic-{}", n),
        "volumeInfo": {
            "title": format!("Novel {}", n),
            "authors": ["A. Writer"],
            "imageLinks": {
                "smallThumbnail": format!("http://books.test/{}/small", n)
            }
        }
    })
}

fn window_query(query: &str, start: u32, max: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), query.into()),
        Matcher::UrlEncoded("startIndex".into(), start.to_string()),
        Matcher::UrlEncoded("maxResults".into(), max.to_string()),
    ])
}

#[tokio::test]
async fn test_category_search_end_to_end() {
    let mut server = Server::new_async().await;
    let items: Vec<Value> = (0..8).map(fiction_record).collect();
    let mock = server
        .mock("GET", "/volumes")
        .match_query(window_query("subject:fiction", 0, 8))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "totalItems": 500, "items": items }).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.search_by_category("fiction", 8).await.unwrap();
    mock.assert_async().await;

    assert_eq!(page.total_items, 500);
    let records: Vec<_> = page.items.iter().map(normalize).collect();
    assert_eq!(records.len(), 8);
    for record in &records {
        assert!(!record.title.is_empty());
        assert!(!record.thumbnail.is_empty());
        assert_ne!(record.thumbnail, PLACEHOLDER_COVER_URL);
    }
    assert_eq!(records[3].thumbnail, "http://books.test/3/small");
}

#[tokio::test]
async fn test_author_search_prefix() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/volumes")
        .match_query(window_query("inauthor:Ursula K. Le Guin", 0, 10))
        .with_status(200)
        .with_body(r#"{"totalItems": 0}"#)
        .create_async()
        .await;

    let page = client_for(&server)
        .search_by_author("Ursula K. Le Guin", 10)
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(page.total_items, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_last_page_has_no_next() {
    let mut server = Server::new_async().await;
    let items: Vec<Value> = (0..10).map(fiction_record).collect();
    server
        .mock("GET", "/volumes")
        .match_query(window_query("dune", 0, 10))
        .with_status(200)
        .with_body(json!({ "totalItems": 10, "items": items }).to_string())
        .create_async()
        .await;

    let window = PageWindow::new(0, 10).unwrap();
    let page = client_for(&server).search("dune", window).await.unwrap();
    let display = normalize_page(&page, window);

    assert_eq!(display.items.len(), 10);
    assert!(!display.has_next);
    assert!(!display.has_prev);
}

#[tokio::test]
async fn test_get_by_id() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/volumes/fic-7")
        .with_status(200)
        .with_body(fiction_record(7).to_string())
        .create_async()
        .await;

    let raw = client_for(&server).get_by_id("fic-7").await.unwrap();
    let record = normalize(&raw);

    assert_eq!(record.id, "fic-7");
    assert_eq!(record.title, "Novel 7");
    assert_eq!(record.publisher, "Unknown Publisher");
}

#[tokio::test]
async fn test_non_success_status_is_upstream_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/volumes/missing")
        .with_status(404)
        .with_body(r#"{"error": {"code": 404}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/volumes")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server);

    let err = client.get_by_id("missing").await.unwrap_err();
    assert_eq!(err, CatalogError::Upstream { status: 404 });
    assert!(err.is_not_found());

    let err = client
        .search("anything", PageWindow::default())
        .await
        .unwrap_err();
    assert_eq!(err, CatalogError::Upstream { status: 503 });
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/volumes/broken")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client_for(&server).get_by_id("broken").await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
}

#[tokio::test]
async fn test_wrong_typed_field_keeps_rest_of_page() {
    let mut server = Server::new_async().await;
    let body = json!({
        "totalItems": 2,
        "items": [
            { "id": "a", "volumeInfo": { "title": "Dune", "pageCount": "300" } },
            fiction_record(1)
        ]
    });
    server
        .mock("GET", "/volumes")
        .match_query(window_query("dune", 0, 10))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let page = client_for(&server)
        .search("dune", PageWindow::default())
        .await
        .unwrap();
    let display = normalize_page(&page, PageWindow::default());

    assert_eq!(display.items.len(), 2);
    assert_eq!(display.items[0].title, "Dune");
    assert_eq!(display.items[0].page_count, 0);
    assert_eq!(display.items[1].title, "Novel 1");
}

#[tokio::test]
async fn test_unreachable_catalog_is_transport_error() {
    let config = CatalogConfig::new("http://127.0.0.1:1").unwrap();
    let client = QueryClient::new(config).unwrap();

    let err = client.get_by_id("anything").await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
}

#[tokio::test]
async fn test_api_key_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/volumes/abc")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_body(r#"{"id": "abc"}"#)
        .create_async()
        .await;

    let config = CatalogConfig::new(server.url())
        .unwrap()
        .with_api_key("test-key");
    let client = QueryClient::new(config).unwrap();

    client.get_by_id("abc").await.unwrap();
    mock.assert_async().await;
}
