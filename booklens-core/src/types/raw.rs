//! Raw catalog record shapes, as returned by the volumes endpoint

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode an optional field, treating a value of the wrong type as absent
///
/// The catalog occasionally sends a string where a number is expected (or the
/// reverse); one such field must not fail the whole page.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Option::<T>::deserialize(value).ok().flatten())
}

/// One volume exactly as the catalog returns it
///
/// Every field apart from `id` may be absent; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogRecord {
    /// Catalog volume identifier
    #[serde(default)]
    pub id: String,

    /// Bibliographic block
    #[serde(default, deserialize_with = "lenient")]
    pub volume_info: Option<VolumeInfo>,

    /// Commercial availability block
    #[serde(default, deserialize_with = "lenient")]
    pub sale_info: Option<SaleInfo>,
}

impl RawCatalogRecord {
    /// Create a record carrying only an identifier
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Attach a volume-info block
    pub fn with_volume_info(mut self, info: VolumeInfo) -> Self {
        self.volume_info = Some(info);
        self
    }

    /// Attach a sale-info block
    pub fn with_sale_info(mut self, info: SaleInfo) -> Self {
        self.sale_info = Some(info);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub authors: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub publisher: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub published_date: Option<String>,
    /// May contain HTML markup
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub page_count: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub categories: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub average_rating: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub ratings_count: Option<u32>,
    /// ISO 639-1 language code
    #[serde(deserialize_with = "lenient")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub preview_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub info_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub canonical_volume_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_links: Option<ImageLinks>,
    #[serde(deserialize_with = "lenient")]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

/// Cover image URLs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLinks {
    #[serde(deserialize_with = "lenient")]
    pub small_thumbnail: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
}

/// A typed identifier such as `ISBN_10`, `ISBN_13` or `OTHER`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndustryIdentifier {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub identifier: Option<String>,
}

impl IndustryIdentifier {
    pub fn new(kind: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            identifier: Some(identifier.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleInfo {
    #[serde(deserialize_with = "lenient")]
    pub is_ebook: Option<bool>,
    /// `FOR_SALE`, `NOT_FOR_SALE`, `FREE`, ...
    #[serde(deserialize_with = "lenient")]
    pub saleability: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub buy_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub list_price: Option<ListPrice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPrice {
    #[serde(deserialize_with = "lenient")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub currency_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_json() {
        let json = serde_json::json!({
            "kind": "books#volume",
            "id": "zyTCAlFPjgYC",
            "volumeInfo": {
                "title": "The Google Story",
                "authors": ["David A. Vise", "Mark Malseed"],
                "pageCount": 207,
                "imageLinks": { "thumbnail": "http://books.google.com/thumb" },
                "industryIdentifiers": [
                    { "type": "ISBN_10", "identifier": "055380457X" }
                ]
            },
            "saleInfo": {
                "isEbook": false,
                "listPrice": { "amount": 11.99, "currencyCode": "USD" }
            }
        });

        let record: RawCatalogRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, "zyTCAlFPjgYC");

        let info = record.volume_info.unwrap();
        assert_eq!(info.title.as_deref(), Some("The Google Story"));
        assert_eq!(info.page_count, Some(207));
        assert_eq!(
            info.industry_identifiers.unwrap()[0].kind.as_deref(),
            Some("ISBN_10")
        );
        assert_eq!(
            record.sale_info.unwrap().list_price.unwrap().currency_code.as_deref(),
            Some("USD")
        );
    }

    #[test]
    fn test_deserialize_nulls_and_missing_id() {
        let json = serde_json::json!({
            "volumeInfo": { "title": null, "imageLinks": null },
            "saleInfo": null
        });

        let record: RawCatalogRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.volume_info.unwrap().title, None);
        assert!(record.sale_info.is_none());
    }

    #[test]
    fn test_wrong_typed_fields_are_dropped() {
        let json = serde_json::json!({
            "id": "a",
            "volumeInfo": {
                "title": "Dune",
                "pageCount": "300",
                "averageRating": "high",
                "authors": "Frank Herbert",
                "imageLinks": { "thumbnail": 42 }
            },
            "saleInfo": { "isEbook": "yes", "listPrice": { "amount": "9.99", "currencyCode": "USD" } }
        });

        let record: RawCatalogRecord = serde_json::from_value(json).unwrap();
        let info = record.volume_info.unwrap();
        assert_eq!(info.title.as_deref(), Some("Dune"));
        assert_eq!(info.page_count, None);
        assert_eq!(info.average_rating, None);
        assert_eq!(info.authors, None);
        assert_eq!(info.image_links.unwrap().thumbnail, None);

        let sale = record.sale_info.unwrap();
        assert_eq!(sale.is_ebook, None);
        let price = sale.list_price.unwrap();
        assert_eq!(price.amount, None);
        assert_eq!(price.currency_code.as_deref(), Some("USD"));
    }

    #[test]
    fn test_wrong_typed_block_is_dropped() {
        let json = serde_json::json!({ "id": "a", "volumeInfo": "n/a", "saleInfo": [] });

        let record: RawCatalogRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, "a");
        assert!(record.volume_info.is_none());
        assert!(record.sale_info.is_none());
    }
}
