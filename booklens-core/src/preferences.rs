//! Reading preferences
//!
//! Preferences are cosmetic and held in memory only; nothing here is
//! persisted.

use crate::error::PreferencesError;
use serde::{Deserialize, Serialize};

/// Genres a user can mark as favorites
pub const GENRES: [&str; 12] = [
    "Fiction",
    "Science Fiction",
    "Mystery",
    "Biography",
    "History",
    "Romance",
    "Fantasy",
    "Business",
    "Self-Help",
    "Thriller",
    "Cooking",
    "Art",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReadingLevel {
    Casual,
    #[default]
    Intermediate,
    Advanced,
    Academic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPreferences {
    /// Favorite genres in the order they were chosen
    pub genres: Vec<String>,

    pub reading_level: ReadingLevel,

    pub notifications: bool,

    pub personalized_ads: bool,
}

impl Default for ReadingPreferences {
    fn default() -> Self {
        Self {
            genres: vec!["Fiction".to_string(), "Science Fiction".to_string()],
            reading_level: ReadingLevel::default(),
            notifications: true,
            personalized_ads: false,
        }
    }
}

/// Canonical spelling of a known genre, matched case-insensitively
pub fn canonical_genre(name: &str) -> Option<&'static str> {
    let name = name.trim();
    GENRES.iter().copied().find(|g| g.eq_ignore_ascii_case(name))
}

impl ReadingPreferences {
    /// Select the genre if absent, deselect it if present
    ///
    /// Returns whether the genre is selected afterwards.
    pub fn toggle_genre(&mut self, genre: &str) -> Result<bool, PreferencesError> {
        let canonical = canonical_genre(genre)
            .ok_or_else(|| PreferencesError::UnknownGenre(genre.to_string()))?;

        if let Some(pos) = self.genres.iter().position(|g| g == canonical) {
            self.genres.remove(pos);
            Ok(false)
        } else {
            self.genres.push(canonical.to_string());
            Ok(true)
        }
    }

    /// Check a full replacement and rewrite genres to their canonical spelling
    pub fn validated(mut self) -> Result<Self, PreferencesError> {
        let mut genres: Vec<String> = Vec::with_capacity(self.genres.len());
        for genre in &self.genres {
            let canonical = canonical_genre(genre)
                .ok_or_else(|| PreferencesError::UnknownGenre(genre.clone()))?;
            if genres.iter().any(|g| g == canonical) {
                return Err(PreferencesError::DuplicateGenre(canonical.to_string()));
            }
            genres.push(canonical.to_string());
        }
        self.genres = genres;
        Ok(self)
    }
}
