//! # Guardian Headlines
//!
//! Fetches the latest articles from the Guardian content API search endpoint
//! and lists them in the terminal, optionally exporting them as JSON.
//!
//! ## Usage
//!
//! ```sh
//! guardian_headlines --section technology -j ./json
//! ```
//!
//! ## Architecture
//!
//! 1. **Request**: build the `/search` URL from CLI flags (or take `--url` as is)
//! 2. **Load**: fetch and parse on a background task, one GET per load
//! 3. **Output**: print the listing and write the optional JSON export
//!
//! Fetch failures never abort the program: they are logged and the listing
//! shows its empty state.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod client;
mod error;
mod loader;
mod models;
mod outputs;
mod request;
mod utils;

use cli::Cli;
use client::NewsClient;
use loader::NewsLoader;
use models::{Article, Headlines};
use outputs::{json, text};
use request::redact_api_key_str;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("guardian_headlines starting up");

    let args = Cli::parse();
    debug!(url = ?args.url, query = ?args.query, section = ?args.section, "Parsed CLI arguments");

    let request_url = match &args.url {
        Some(url) => url.clone(),
        None => args.guardian_query().to_url()?.to_string(),
    };
    let shown_url = redact_api_key_str(&request_url);
    info!(url = %shown_url, "Prepared request URL");

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let client = NewsClient::with_timeouts(
        Duration::from_millis(args.connect_timeout_ms),
        Duration::from_millis(args.read_timeout_ms),
    )?;
    let mut loader = NewsLoader::new(Arc::new(client), Some(request_url));

    loop {
        let articles = loader.load().await;
        print!("{}", text::render_articles(&articles));

        if let Some(dir) = &args.json_output_dir {
            export(&articles, &shown_url, dir).await;
        }

        let Some(secs) = args.refresh_secs else {
            break;
        };
        info!(secs, "Waiting before next refresh");
        tokio::time::sleep(Duration::from_secs(secs)).await;
        loader.reset();
        println!();
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Write the JSON export; failures are logged and do not stop the listing.
#[instrument(level = "info", skip_all, fields(%dir))]
async fn export(articles: &[Article], shown_url: &str, dir: &str) {
    let now = Local::now();
    let headlines = Headlines {
        local_date: now.date_naive().to_string(),
        local_time: now.time().format("%H:%M:%S").to_string(),
        request_url: shown_url.to_string(),
        articles: articles.to_vec(),
    };

    if let Err(e) = json::write_headlines(&headlines, dir).await {
        error!(error = %e, "Failed to write JSON export");
    }
}
