//! Reading preferences handlers

use super::ApiError;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use booklens_core::{canonical_genre, ReadingPreferences};
use serde::Serialize;

pub async fn get_preferences(State(state): State<AppState>) -> Json<ReadingPreferences> {
    Json(state.preferences.read().await.clone())
}

/// Replace all preferences at once
pub async fn replace_preferences(
    State(state): State<AppState>,
    update: Result<Json<ReadingPreferences>, JsonRejection>,
) -> Result<Json<ReadingPreferences>, ApiError> {
    let Json(update) = update?;
    let update = update.validated()?;

    let mut prefs = state.preferences.write().await;
    *prefs = update;
    tracing::debug!("Preferences replaced: {:?}", *prefs);

    Ok(Json(prefs.clone()))
}

#[derive(Debug, Serialize)]
pub struct ToggleGenreResponse {
    pub genre: String,
    pub selected: bool,
    pub preferences: ReadingPreferences,
}

/// Select or deselect one favorite genre
pub async fn toggle_genre(
    State(state): State<AppState>,
    genre: Result<Path<String>, PathRejection>,
) -> Result<Json<ToggleGenreResponse>, ApiError> {
    let Path(genre) = genre?;
    let mut prefs = state.preferences.write().await;
    let selected = prefs.toggle_genre(&genre)?;

    let genre = canonical_genre(&genre).map(String::from).unwrap_or(genre);

    Ok(Json(ToggleGenreResponse {
        genre,
        selected,
        preferences: prefs.clone(),
    }))
}
