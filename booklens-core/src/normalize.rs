//! Raw record normalization
//!
//! [`normalize`] is total: a missing, null or empty source value yields the
//! documented default, never an error. Fallback chains are ordered accessor
//! lists evaluated first-present-wins so their order stays auditable.

use crate::pagination::PageWindow;
use crate::types::{
    DisplayPage, DisplayRecord, ImageLinks, RawCatalogRecord, SaleInfo, SearchPage, VolumeInfo,
    PLACEHOLDER_COVER_URL,
};

const DEFAULT_TITLE: &str = "Unknown Title";
const DEFAULT_AUTHOR: &str = "Unknown Author";
const DEFAULT_PUBLISHER: &str = "Unknown Publisher";
const DEFAULT_PUBLISHED_DATE: &str = "Unknown Date";
const DEFAULT_DESCRIPTION: &str = "No description available";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_SALEABILITY: &str = "NOT_FOR_SALE";

const ISBN_10: &str = "ISBN_10";
const ISBN_13: &str = "ISBN_13";

type TextAccessor = fn(&RawCatalogRecord) -> Option<&str>;

/// Cover for full-size display
const THUMBNAIL_CHAIN: &[TextAccessor] = &[image_thumbnail, image_small_thumbnail];

/// Cover for compact display
const SMALL_THUMBNAIL_CHAIN: &[TextAccessor] = &[image_small_thumbnail, image_thumbnail];

/// Map one raw catalog record to its display form
pub fn normalize(raw: &RawCatalogRecord) -> DisplayRecord {
    let info = raw.volume_info.as_ref();
    let sale = raw.sale_info.as_ref();

    DisplayRecord {
        id: raw.id.clone(),
        title: text_or(info.and_then(|i| i.title.as_deref()), DEFAULT_TITLE),
        subtitle: text_or(info.and_then(|i| i.subtitle.as_deref()), ""),
        authors: info
            .and_then(|i| i.authors.clone())
            .unwrap_or_else(|| vec![DEFAULT_AUTHOR.to_string()]),
        publisher: text_or(info.and_then(|i| i.publisher.as_deref()), DEFAULT_PUBLISHER),
        published_date: text_or(
            info.and_then(|i| i.published_date.as_deref()),
            DEFAULT_PUBLISHED_DATE,
        ),
        description: text_or(
            info.and_then(|i| i.description.as_deref()),
            DEFAULT_DESCRIPTION,
        ),
        page_count: info.and_then(|i| i.page_count).unwrap_or(0),
        categories: info.and_then(|i| i.categories.clone()).unwrap_or_default(),
        average_rating: info.and_then(|i| i.average_rating).unwrap_or(0.0),
        ratings_count: info.and_then(|i| i.ratings_count).unwrap_or(0),
        language: text_or(info.and_then(|i| i.language.as_deref()), DEFAULT_LANGUAGE),
        preview_link: text_or(info.and_then(|i| i.preview_link.as_deref()), ""),
        info_link: text_or(info.and_then(|i| i.info_link.as_deref()), ""),
        canonical_volume_link: text_or(
            info.and_then(|i| i.canonical_volume_link.as_deref()),
            "",
        ),
        thumbnail: first_present(raw, THUMBNAIL_CHAIN, PLACEHOLDER_COVER_URL),
        small_thumbnail: first_present(raw, SMALL_THUMBNAIL_CHAIN, PLACEHOLDER_COVER_URL),
        is_ebook: sale.and_then(|s| s.is_ebook).unwrap_or(false),
        saleability: text_or(sale.and_then(|s| s.saleability.as_deref()), DEFAULT_SALEABILITY),
        buy_link: text_or(sale.and_then(|s| s.buy_link.as_deref()), ""),
        price: sale.and_then(format_price),
        isbn10: first_identifier(info, ISBN_10),
        isbn13: first_identifier(info, ISBN_13),
    }
}

/// Map every record of a search page and attach boundary flags
pub fn normalize_page(page: &SearchPage, window: PageWindow) -> DisplayPage {
    DisplayPage {
        total_items: page.total_items,
        start_index: window.start_index(),
        max_results: window.max_results(),
        items: page.items.iter().map(normalize).collect(),
        has_next: window.has_next(page.total_items),
        has_prev: window.has_prev(),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn text_or(value: Option<&str>, default: &str) -> String {
    present(value).unwrap_or(default).to_string()
}

fn first_present(raw: &RawCatalogRecord, chain: &[TextAccessor], default: &str) -> String {
    chain
        .iter()
        .find_map(|accessor| present(accessor(raw)))
        .unwrap_or(default)
        .to_string()
}

fn image_links(raw: &RawCatalogRecord) -> Option<&ImageLinks> {
    raw.volume_info.as_ref()?.image_links.as_ref()
}

fn image_thumbnail(raw: &RawCatalogRecord) -> Option<&str> {
    image_links(raw)?.thumbnail.as_deref()
}

fn image_small_thumbnail(raw: &RawCatalogRecord) -> Option<&str> {
    image_links(raw)?.small_thumbnail.as_deref()
}

// Later entries of the same type are ignored, even when the first one has
// an empty identifier.
fn first_identifier(info: Option<&VolumeInfo>, kind: &str) -> String {
    info.and_then(|i| i.industry_identifiers.as_ref())
        .and_then(|ids| ids.iter().find(|id| id.kind.as_deref() == Some(kind)))
        .and_then(|id| present(id.identifier.as_deref()))
        .unwrap_or_default()
        .to_string()
}

fn format_price(sale: &SaleInfo) -> Option<String> {
    let price = sale.list_price.as_ref()?;
    let amount = price.amount?;
    let currency = present(price.currency_code.as_deref())?;
    Some(format!("{} {}", format_amount(amount), currency))
}

/// Shortest round-trip decimal, switching to exponent form outside
/// `[1e-6, 1e21)` with an explicit sign on the exponent (`1e+21`)
fn format_amount(amount: f64) -> String {
    let magnitude = amount.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", amount);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        amount.to_string()
    }
}
