//! Batch lookup command implementation

use anyhow::{bail, Context, Result};
use booklens_core::{normalize, Catalog, DisplayRecord, QueryClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Fetch every id listed in `ids_file` and emit display records as JSON lines
pub async fn batch(
    client: &QueryClient,
    ids_file: &str,
    output: Option<&str>,
    jobs: usize,
) -> Result<()> {
    let contents = tokio::fs::read_to_string(ids_file)
        .await
        .with_context(|| format!("Failed to read id list: {}", ids_file))?;

    let ids = parse_ids(&contents);
    if ids.is_empty() {
        println!("No ids found in {}", ids_file);
        return Ok(());
    }

    eprintln!("Fetching {} books", ids.len());

    let progress = ProgressBar::new(ids.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let permits = Arc::new(Semaphore::new(jobs));
    let mut tasks = JoinSet::new();
    for (index, id) in ids.iter().cloned().enumerate() {
        let client = client.clone();
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            let result = client.get_by_id(&id).await;
            (index, id, result)
        });
    }

    let mut records: Vec<Option<DisplayRecord>> = vec![None; ids.len()];
    let mut errors = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (index, id, result) = joined?;
        match result {
            Ok(raw) => records[index] = Some(normalize(&raw)),
            Err(e) => {
                errors += 1;
                tracing::error!("Failed to fetch {}: {}", id, e);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    // Input order, not completion order
    let mut lines = String::new();
    for record in records.iter().flatten() {
        lines.push_str(&serde_json::to_string(record)?);
        lines.push('\n');
    }

    match output {
        Some(path) => tokio::fs::write(path, lines)
            .await
            .with_context(|| format!("Failed to write output file: {}", path))?,
        None => std::io::stdout().write_all(lines.as_bytes())?,
    }

    let fetched = ids.len() - errors;
    eprintln!("\nBatch lookup complete:");
    eprintln!("  Fetched: {}", fetched);
    eprintln!("  Errors:  {}", errors);

    if errors > 0 {
        bail!("Batch lookup completed with {} errors", errors);
    }

    Ok(())
}

/// One id per line; blank lines and `#` comments are skipped
fn parse_ids(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
