//! Catalog discovery handlers

use super::ApiError;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use booklens_core::{normalize, normalize_page, CatalogError, DisplayPage, DisplayRecord, PageWindow};
use serde::Deserialize;

/// Featured shelf on the home page
const FEATURED_CATEGORY: &str = "fiction";
const FEATURED_COUNT: u32 = 8;

/// Sessions view: fixed page size, broad default query
const SESSIONS_PAGE_SIZE: u32 = 10;
const SESSIONS_DEFAULT_QUERY: &str = "subject:fiction";

/// Query parameters for free-text search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,

    /// Page number (0-indexed)
    #[serde(default)]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    20
}

/// Query parameters for the paginated sessions view
#[derive(Debug, Deserialize)]
pub struct SessionsParams {
    pub q: Option<String>,

    #[serde(default)]
    pub page: u32,
}

/// Query parameters for category and author shelves
#[derive(Debug, Deserialize)]
pub struct ShelfParams {
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    10
}

/// Featured books for the home page
pub async fn featured_books(State(state): State<AppState>) -> Result<Json<DisplayPage>, ApiError> {
    let window = PageWindow::new(0, FEATURED_COUNT)?;
    let page = state
        .catalog
        .search_by_category(FEATURED_CATEGORY, FEATURED_COUNT)
        .await?;
    Ok(Json(normalize_page(&page, window)))
}

/// Free-text search
pub async fn search_books(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<DisplayPage>, ApiError> {
    let Query(params) = params?;
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| CatalogError::InvalidRequest("missing search query 'q'".to_string()))?;

    let window = PageWindow::for_page(params.page, params.per_page)?;
    let page = state.catalog.search(query, window).await?;
    Ok(Json(normalize_page(&page, window)))
}

/// Paginated browse with a default query
pub async fn browse_sessions(
    State(state): State<AppState>,
    params: Result<Query<SessionsParams>, QueryRejection>,
) -> Result<Json<DisplayPage>, ApiError> {
    let Query(params) = params?;
    let query = params
        .q
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .unwrap_or(SESSIONS_DEFAULT_QUERY);

    let window = PageWindow::for_page(params.page, SESSIONS_PAGE_SIZE)?;
    let page = state.catalog.search(query, window).await?;
    Ok(Json(normalize_page(&page, window)))
}

/// Details for a single volume
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DisplayRecord>, ApiError> {
    let Path(id) = id?;
    let raw = state.catalog.get_by_id(&id).await?;
    Ok(Json(normalize(&raw)))
}

/// First page of a category shelf
pub async fn books_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
    params: Result<Query<ShelfParams>, QueryRejection>,
) -> Result<Json<DisplayPage>, ApiError> {
    let (Path(category), Query(params)) = (category?, params?);
    let window = PageWindow::new(0, params.max_results)?;
    let page = state
        .catalog
        .search_by_category(&category, params.max_results)
        .await?;
    Ok(Json(normalize_page(&page, window)))
}

/// First page of an author shelf
pub async fn books_by_author(
    State(state): State<AppState>,
    author: Result<Path<String>, PathRejection>,
    params: Result<Query<ShelfParams>, QueryRejection>,
) -> Result<Json<DisplayPage>, ApiError> {
    let (Path(author), Query(params)) = (author?, params?);
    let window = PageWindow::new(0, params.max_results)?;
    let page = state
        .catalog
        .search_by_author(&author, params.max_results)
        .await?;
    Ok(Json(normalize_page(&page, window)))
}
