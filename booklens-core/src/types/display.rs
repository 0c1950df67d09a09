//! Canonical display record produced by the normalizer

use serde::{Deserialize, Serialize};

/// Cover shown when a volume carries no image links
pub const PLACEHOLDER_COVER_URL: &str =
    "https://via.placeholder.com/300x400/f3f4f6/9ca3af?text=No+Cover+Available";

/// Flattened, default-filled view of one catalog volume
///
/// Every field holds a deterministic value. `price` is the only nullable
/// field and is `None` exactly when the source has no list price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub published_date: String,
    pub description: String,
    pub page_count: u32,
    pub categories: Vec<String>,
    pub average_rating: f64,
    pub ratings_count: u32,
    pub language: String,
    pub preview_link: String,
    pub info_link: String,
    pub canonical_volume_link: String,
    pub thumbnail: String,
    pub small_thumbnail: String,
    pub is_ebook: bool,
    pub saleability: String,
    pub buy_link: String,
    pub price: Option<String>,
    pub isbn10: String,
    pub isbn13: String,
}

impl DisplayRecord {
    /// Authors joined for single-line display
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// Whether the volume can currently be bought
    pub fn is_for_sale(&self) -> bool {
        self.saleability == "FOR_SALE"
    }
}
