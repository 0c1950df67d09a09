//! Interactive paginated browse

use super::output::print_page;
use anyhow::Result;
use booklens_core::{BrowseSession, DisplayPage, PageWindow, QueryClient};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

enum Action {
    Next,
    Prev,
    Retry,
    Quit,
}

/// What the prompt may offer after the last load
struct Position {
    has_next: bool,
    has_prev: bool,
    failed: bool,
}

/// Page through results, reading navigation commands from stdin
///
/// A failed load is reported and the session keeps the last page that did
/// load, so the user can retry or move elsewhere.
pub async fn browse(
    client: QueryClient,
    query: &str,
    page: u32,
    per_page: u32,
    json: bool,
) -> Result<()> {
    let session = BrowseSession::new(Arc::new(client));
    let mut window = PageWindow::for_page(page, per_page)?;
    let mut shown: Option<DisplayPage> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let failed = match session.load(query, window).await {
            Ok(Some(current)) => {
                print_page(&current, json)?;
                shown = Some(current);
                false
            }
            Ok(None) => {
                tracing::debug!("Discarded superseded page load");
                false
            }
            Err(e) => {
                eprintln!("Failed to load page {} of '{}': {}", window.page_number() + 1, query, e);
                true
            }
        };

        let position = Position {
            has_next: shown.as_ref().is_some_and(|p| p.has_next),
            has_prev: shown.as_ref().is_some_and(|p| p.has_prev),
            failed,
        };
        // Navigation is relative to what is on screen, not the failed window
        let base = shown.as_ref().map_or(window, DisplayPage::window);

        match next_action(&mut lines, &position).await? {
            Action::Next => window = base.next(),
            Action::Prev => window = base.prev(),
            Action::Retry => {}
            Action::Quit => break,
        }
    }

    Ok(())
}

async fn next_action(lines: &mut Lines<BufReader<Stdin>>, position: &Position) -> Result<Action> {
    loop {
        let mut options = Vec::new();
        if position.has_next {
            options.push("[n]ext");
        }
        if position.has_prev {
            options.push("[p]rev");
        }
        if position.failed {
            options.push("[r]etry");
        }
        options.push("[q]uit");
        eprint!("{} > ", options.join("  "));
        std::io::stderr().flush()?;

        // End of input ends the session
        let Some(line) = lines.next_line().await? else {
            return Ok(Action::Quit);
        };

        match line.trim().to_lowercase().as_str() {
            "n" | "next" if position.has_next => return Ok(Action::Next),
            "p" | "prev" if position.has_prev => return Ok(Action::Prev),
            "r" | "retry" if position.failed => return Ok(Action::Retry),
            "q" | "quit" => return Ok(Action::Quit),
            "n" | "next" => eprintln!("Already on the last page."),
            "p" | "prev" => eprintln!("Already on the first page."),
            other => eprintln!("Unknown command: {}", other),
        }
    }
}
