//! Last-request-wins coordination for paginated views
//!
//! Overlapping page loads are neither coalesced nor cancelled. Instead each
//! load takes a [`Ticket`] from a [`ResponseGuard`] when it starts, and its
//! result is only delivered if no newer load has started since.

use crate::client::Catalog;
use crate::error::Result;
use crate::normalize::normalize_page;
use crate::pagination::PageWindow;
use crate::types::DisplayPage;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// The parameters a request originated from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: String,
    pub window: PageWindow,
}

impl QueryKey {
    pub fn new(query: impl Into<String>, window: PageWindow) -> Self {
        Self {
            query: query.into(),
            window,
        }
    }
}

/// Proof that a request was started, used to check whether it is still current
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    key: QueryKey,
}

impl Ticket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

#[derive(Debug, Default)]
struct GuardState {
    generation: u64,
    latest: Option<QueryKey>,
}

/// Tracks the most recently initiated request
#[derive(Debug, Default)]
pub struct ResponseGuard {
    state: Mutex<GuardState>,
}

impl ResponseGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, GuardState> {
        // The state is two plain fields; a panic mid-update cannot leave it torn.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a new request, superseding every earlier one
    pub fn begin(&self, key: QueryKey) -> Ticket {
        let mut state = self.lock();
        state.generation += 1;
        state.latest = Some(key.clone());
        Ticket {
            generation: state.generation,
            key,
        }
    }

    /// Whether no request has started since this ticket was issued
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        let state = self.lock();
        state.generation == ticket.generation && state.latest.as_ref() == Some(&ticket.key)
    }

    /// Pass `value` through only if `ticket` is still current
    pub fn accept<T>(&self, ticket: &Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!(
                query = %ticket.key.query,
                start_index = ticket.key.window.start_index(),
                "Discarding stale response"
            );
            None
        }
    }
}

/// A paginated view over a catalog
///
/// `load` returns `Ok(None)` when a newer load started before this one
/// finished; the superseded result (or error) is dropped.
pub struct BrowseSession {
    catalog: Arc<dyn Catalog>,
    guard: ResponseGuard,
}

impl BrowseSession {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            guard: ResponseGuard::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<dyn Catalog> {
        &self.catalog
    }

    /// Load and normalize one window of results
    pub async fn load(&self, query: &str, window: PageWindow) -> Result<Option<DisplayPage>> {
        let ticket = self.guard.begin(QueryKey::new(query, window));
        let result = self.catalog.search(query, window).await;

        match self.guard.accept(&ticket, result) {
            Some(page) => Ok(Some(normalize_page(&page?, window))),
            None => Ok(None),
        }
    }

    /// Load a zero-based page of `page_size` results
    pub async fn load_page(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Option<DisplayPage>> {
        let window = PageWindow::for_page(page, page_size)?;
        self.load(query, window).await
    }
}
