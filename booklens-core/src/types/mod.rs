//! Core types for catalog records and result pages

mod display;
mod page;
mod raw;

pub use display::{DisplayRecord, PLACEHOLDER_COVER_URL};
pub use page::{DisplayPage, SearchPage};
pub use raw::{ImageLinks, IndustryIdentifier, ListPrice, RawCatalogRecord, SaleInfo, VolumeInfo};
