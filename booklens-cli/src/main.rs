//! Booklens CLI - Command-line interface for book discovery

mod commands;

use anyhow::Result;
use booklens_core::{CatalogConfig, QueryClient};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// Parse a page size accepted by the catalog (1 to 40)
fn parse_page_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if (1..=booklens_core::pagination::MAX_RESULTS_LIMIT).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "page size must be between 1 and {}",
            booklens_core::pagination::MAX_RESULTS_LIMIT
        ))
    }
}

#[derive(Parser)]
#[command(name = "booklens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Search query (supports prefixes such as intitle:, inauthor:, isbn:)
        query: String,

        /// Page number (0-indexed)
        #[arg(short, long, default_value = "0")]
        page: u32,

        /// Results per page (1-40)
        #[arg(long, default_value = "10", value_parser = parse_page_size)]
        per_page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display details for a single book
    Info {
        /// Catalog volume id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List books in a category
    Category {
        /// Category name (e.g. fiction, history)
        category: String,

        /// Number of results (1-40)
        #[arg(short, long, default_value = "10", value_parser = parse_page_size)]
        max_results: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List books by an author
    Author {
        /// Author name
        author: String,

        /// Number of results (1-40)
        #[arg(short, long, default_value = "10", value_parser = parse_page_size)]
        max_results: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Page through search results interactively
    Browse {
        /// Search query
        #[arg(default_value = "subject:fiction")]
        query: String,

        /// Starting page (0-indexed)
        #[arg(short, long, default_value = "0")]
        page: u32,

        /// Results per page (1-40)
        #[arg(long, default_value = "10", value_parser = parse_page_size)]
        per_page: u32,

        /// Output pages as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize saved catalog JSON (a volume or a search page) without network access
    Normalize {
        /// Input file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch many books by id
    Batch {
        /// File with one volume id per line
        ids_file: String,

        /// Write JSON lines here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Number of concurrent requests (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,
    },
}

fn catalog_client() -> Result<QueryClient> {
    let config = CatalogConfig::from_env()?;
    tracing::debug!("Using catalog at {}", config.base_url);
    Ok(QueryClient::new(config)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "booklens_cli=debug,booklens_core=debug"
    } else {
        "booklens_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Search {
            query,
            page,
            per_page,
            json,
        } => commands::search(&catalog_client()?, &query, page, per_page, json).await,

        Commands::Info { id, json } => commands::info(&catalog_client()?, &id, json).await,

        Commands::Category {
            category,
            max_results,
            json,
        } => commands::category(&catalog_client()?, &category, max_results, json).await,

        Commands::Author {
            author,
            max_results,
            json,
        } => commands::author(&catalog_client()?, &author, max_results, json).await,

        Commands::Browse {
            query,
            page,
            per_page,
            json,
        } => commands::browse(catalog_client()?, &query, page, per_page, json).await,

        Commands::Normalize { input, json } => commands::normalize(&input, json),

        Commands::Batch {
            ids_file,
            output,
            jobs,
        } => commands::batch(&catalog_client()?, &ids_file, output.as_deref(), jobs).await,
    }
}
