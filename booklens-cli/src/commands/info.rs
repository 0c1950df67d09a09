//! Info command implementation

use super::output::print_record;
use anyhow::{Context, Result};
use booklens_core::{normalize, Catalog, QueryClient};

/// Display details for one catalog volume
pub async fn info(client: &QueryClient, id: &str, json: bool) -> Result<()> {
    let raw = client
        .get_by_id(id)
        .await
        .with_context(|| format!("Failed to load book {}", id))?;

    print_record(&normalize(&raw), json)
}
