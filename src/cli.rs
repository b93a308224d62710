//! Command-line interface definitions for Guardian Headlines.
//!
//! All options can be provided as flags; the API key also falls back to the
//! `GUARDIAN_API_KEY` environment variable.

use crate::client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use crate::request::{
    DEFAULT_API_KEY, DEFAULT_ENDPOINT, DEFAULT_ORDER_BY, DEFAULT_PAGE_SIZE, DEFAULT_SHOW_FIELDS,
    GuardianQuery,
};
use clap::Parser;

/// Command-line arguments for Guardian Headlines.
///
/// # Examples
///
/// ```sh
/// # Latest technology stories with the public test key
/// guardian_headlines --section technology
///
/// # Search, export JSON, and refresh every five minutes
/// GUARDIAN_API_KEY=... guardian_headlines -q "climate" -j ./json --refresh-secs 300
///
/// # Use a prepared request URL as is
/// guardian_headlines --url "https://content.guardianapis.com/search?api-key=test&show-fields=byline"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Full request URL; when set, the search options below are ignored
    #[arg(long)]
    pub url: Option<String>,

    /// Free-text search terms
    #[arg(short, long)]
    pub query: Option<String>,

    /// Section id filter (e.g. technology, sport, world)
    #[arg(long)]
    pub section: Option<String>,

    /// Number of results to request
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Result ordering: newest, oldest or relevance
    #[arg(long, default_value = DEFAULT_ORDER_BY)]
    pub order_by: String,

    /// Comma-separated extra fields to request
    #[arg(long, default_value = DEFAULT_SHOW_FIELDS)]
    pub show_fields: String,

    /// Guardian content API search endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Guardian content API key
    #[arg(long, env = "GUARDIAN_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Connect timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_millis() as u64)]
    pub connect_timeout_ms: u64,

    /// Read timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_READ_TIMEOUT.as_millis() as u64)]
    pub read_timeout_ms: u64,

    /// Output directory for a JSON export of the fetched articles
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Fetch again every N seconds (at least 1) instead of exiting after one listing
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: Option<u64>,
}

impl Cli {
    /// The search parameters described by the flags.
    pub fn guardian_query(&self) -> GuardianQuery {
        GuardianQuery {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            query: self.query.clone(),
            section: self.section.clone(),
            page_size: self.page_size,
            order_by: self.order_by.clone(),
            show_fields: self.show_fields.clone(),
        }
    }
}
