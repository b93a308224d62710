//! Guardian content API client.
//!
//! One GET per call, the whole body read as text, then mapped from the
//! `/search` JSON envelope into [`Article`] values.
//!
//! # Entry points
//!
//! - [`NewsClient::fetch`]: structured outcome, `Result<NewsPage, NewsError>`
//! - [`NewsClient::fetch_news`]: logs every failure and always returns a list
//!
//! # Item isolation
//!
//! A result missing `sectionName`, `webTitle` or `webUrl` is skipped and
//! recorded as an [`ItemIssue`]; its neighbours are still returned. A bad
//! `firstPublicationDate` only clears that article's date.

use crate::error::{ItemIssue, NewsError};
use crate::models::{Article, NewsPage};
use crate::request::redact_api_key;
use crate::utils::truncate_for_log;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Connect timeout for the single GET.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Read timeout for the single GET.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Input pattern for `firstPublicationDate`; anything after the date is ignored.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Bytes of an error body kept in [`NewsError::Status`].
const ERROR_BODY_PREVIEW: usize = 300;

#[derive(Deserialize)]
struct Envelope {
    response: Option<SearchResponse>,
}

#[derive(Deserialize)]
struct SearchResponse {
    status: Option<String>,
    message: Option<String>,
    total: Option<Value>,
    results: Option<Vec<Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    section_name: Option<String>,
    web_title: Option<String>,
    web_url: Option<String>,
    fields: Option<Value>,
}

/// Stateless HTTP client for Guardian searches.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
}

impl NewsClient {
    /// Create a client with the given connect and read timeouts.
    ///
    /// See [`DEFAULT_CONNECT_TIMEOUT`] and [`DEFAULT_READ_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Network`] if the TLS backend cannot be initialised.
    pub fn with_timeouts(connect: Duration, read: Duration) -> Result<Self, NewsError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect)
            .read_timeout(read)
            .build()?;
        Ok(Self { http })
    }

    /// Fetch and parse one page of search results.
    ///
    /// An empty body, a JSON `null`, or `total == 0` produce an empty page.
    ///
    /// # Errors
    ///
    /// - [`NewsError::InvalidUrl`] before any request is made
    /// - [`NewsError::Network`] on connect, timeout or read failure
    /// - [`NewsError::Status`] for any status other than 200
    /// - [`NewsError::Api`], [`NewsError::Parse`], [`NewsError::Schema`] from the body
    #[instrument(level = "info", skip_all)]
    pub async fn fetch(&self, request_url: &str) -> Result<NewsPage, NewsError> {
        let url = validate_url(request_url)?;
        let t0 = Instant::now();

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(NewsError::Status {
                status: status.as_u16(),
                body: read_body_preview(resp, ERROR_BODY_PREVIEW).await,
            });
        }
        let body = resp.text().await?;

        debug!(
            url = %redact_api_key(&url),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Received search response"
        );

        parse_news(&body)
    }

    /// Fetch articles, degrading every failure to a logged empty list.
    ///
    /// Item-level issues are logged as warnings and the surviving articles
    /// are returned.
    #[instrument(level = "info", skip_all)]
    pub async fn fetch_news(&self, request_url: &str) -> Vec<Article> {
        let shown_url = crate::request::redact_api_key_str(request_url);
        match self.fetch(request_url).await {
            Ok(page) => {
                for issue in &page.issues {
                    warn!(url = %shown_url, skipped = issue.skipped_item(), issue = %issue, "Problem in search result");
                }
                info!(
                    url = %shown_url,
                    total = page.total,
                    count = page.articles.len(),
                    issues = page.issues.len(),
                    "Fetched news"
                );
                page.articles
            }
            Err(e) => {
                error!(url = %shown_url, kind = e.kind(), error = %e, "News fetch failed; returning no results");
                Vec::new()
            }
        }
    }
}

/// Read at most about `limit` bytes of an error body; read failures yield what was read so far.
async fn read_body_preview(mut resp: reqwest::Response, limit: usize) -> String {
    let mut buf: Vec<u8> = Vec::with_capacity(limit);
    while buf.len() < limit {
        match resp.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            Ok(None) | Err(_) => break,
        }
    }
    truncate_for_log(&String::from_utf8_lossy(&buf), limit)
}

fn validate_url(request_url: &str) -> Result<Url, NewsError> {
    let url = Url::parse(request_url.trim()).map_err(|e| NewsError::InvalidUrl {
        url: request_url.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NewsError::InvalidUrl {
            url: request_url.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}

/// Map a `/search` response body to a [`NewsPage`].
///
/// # Errors
///
/// Returns [`NewsError::Parse`] for malformed JSON, [`NewsError::Api`] when the
/// API reports `status: "error"`, and [`NewsError::Schema`] when `response` or
/// (with a non-zero total) `results` is missing.
pub fn parse_news(body: &str) -> Result<NewsPage, NewsError> {
    if body.trim().is_empty() {
        return Ok(NewsPage::default());
    }

    let root: Value = serde_json::from_str(body)?;
    if root.is_null() {
        return Ok(NewsPage::default());
    }

    let envelope: Envelope = serde_json::from_value(root)?;
    let response = envelope
        .response
        .ok_or_else(|| NewsError::Schema("missing `response` object".to_string()))?;

    if response.status.as_deref() == Some("error") {
        return Err(NewsError::Api(
            response
                .message
                .unwrap_or_else(|| "unspecified error".to_string()),
        ));
    }

    let total = coerce_total(response.total.as_ref());
    if total == 0 {
        return Ok(NewsPage::default());
    }

    let results = response
        .results
        .ok_or_else(|| NewsError::Schema("missing `results` array".to_string()))?;

    let mut page = NewsPage {
        total: u64::try_from(total).unwrap_or(0),
        articles: Vec::with_capacity(results.len()),
        issues: Vec::new(),
    };

    for (index, item) in results.into_iter().enumerate() {
        match parse_result(index, item, &mut page.issues) {
            Ok(article) => page.articles.push(article),
            Err(issue) => page.issues.push(issue),
        }
    }

    Ok(page)
}

/// Read `total` leniently: integers, floats (truncated) and numeric strings
/// count; anything else is 0.
fn coerce_total(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    }
}

fn parse_result(
    index: usize,
    item: Value,
    issues: &mut Vec<ItemIssue>,
) -> Result<Article, ItemIssue> {
    let result: SearchResult =
        serde_json::from_value(item).map_err(|e| ItemIssue::Malformed {
            index,
            reason: e.to_string(),
        })?;

    let section_name = result
        .section_name
        .ok_or(ItemIssue::MissingField { index, field: "sectionName" })?;
    let title = result
        .web_title
        .ok_or(ItemIssue::MissingField { index, field: "webTitle" })?;
    let url = result
        .web_url
        .ok_or(ItemIssue::MissingField { index, field: "webUrl" })?;

    // a `fields` that is not an object counts as absent; non-string values read as absent
    let (author, date, thumbnail) = match result.fields.as_ref().filter(|f| f.is_object()) {
        Some(fields) => {
            let field = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);
            let raw_date = field("firstPublicationDate").unwrap_or_default();
            let date = normalize_publication_date(&raw_date);
            if date.is_none() {
                issues.push(ItemIssue::BadDate { index, value: raw_date });
            }
            (field("byline"), date, field("thumbnail"))
        }
        None => (None, None, None),
    };

    Ok(Article::new(
        thumbnail,
        Some(section_name),
        Some(title),
        author,
        date,
        Some(url),
    ))
}

/// Reduce a publication timestamp to `yyyy-MM-dd`.
///
/// Accepts a bare date or any string that starts with one
/// (`2017-10-19T10:00:00Z`). Returns `None` when no leading date parses.
pub fn normalize_publication_date(raw: &str) -> Option<String> {
    let (date, _rest) = NaiveDate::parse_and_remainder(raw.trim(), DATE_INPUT_FORMAT).ok()?;
    Some(date.format(DATE_OUTPUT_FORMAT).to_string())
}
