//! Booklens Core Library
//!
//! This crate provides the catalog query client and the record normalization
//! contract for the Booklens book-discovery service. Raw catalog records are
//! fetched through a [`Catalog`] and mapped to [`DisplayRecord`]s before any
//! front end renders or paginates them.

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod preferences;
pub mod session;
pub mod types;

pub use client::{Catalog, QueryClient};
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError, PreferencesError, Result};
pub use normalize::{normalize, normalize_page};
pub use pagination::PageWindow;
pub use preferences::{canonical_genre, ReadingLevel, ReadingPreferences};
pub use session::{BrowseSession, QueryKey, ResponseGuard, Ticket};
pub use types::{DisplayPage, DisplayRecord, RawCatalogRecord, SearchPage};
