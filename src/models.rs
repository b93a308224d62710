//! Data models for Guardian articles and the records built around them.
//!
//! - [`Article`]: one news item as shown to the reader
//! - [`NewsPage`]: the outcome of one successful fetch, including isolated item issues
//! - [`Headlines`]: the envelope written by the JSON export

use crate::error::ItemIssue;
use serde::{Deserialize, Serialize};

/// A single news item parsed from a Guardian search result.
///
/// Every field is optional. Consumers render what is present and hide or
/// substitute a placeholder for the rest. Empty strings are normalised to
/// `None` at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    thumbnail: Option<String>,
    section_name: Option<String>,
    title: Option<String>,
    author: Option<String>,
    date: Option<String>,
    url: Option<String>,
}

impl Article {
    /// Build an article. `date` is expected to already be in `yyyy-MM-dd` form.
    pub fn new(
        thumbnail: Option<String>,
        section_name: Option<String>,
        title: Option<String>,
        author: Option<String>,
        date: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            thumbnail: non_empty(thumbnail),
            section_name: non_empty(section_name),
            title: non_empty(title),
            author: non_empty(author),
            date: non_empty(date),
            url: non_empty(url),
        }
    }

    /// URL of the preview image.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    /// Section label, unabbreviated.
    pub fn section_name(&self) -> Option<&str> {
        self.section_name.as_deref()
    }

    /// Headline.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Byline.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// First publication date as `yyyy-MM-dd`.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Canonical article link.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Result of one fetch that reached the API and produced readable JSON.
///
/// `issues` lists items that were skipped or degraded; it never contains
/// fetch-level failures, those are reported as [`crate::error::NewsError`].
#[derive(Debug, Default)]
pub struct NewsPage {
    /// `response.total` as reported by the API (0 when absent or negative).
    pub total: u64,
    /// Parsed articles in source order.
    pub articles: Vec<Article>,
    pub issues: Vec<ItemIssue>,
}

/// The JSON export of one run.
#[derive(Debug, Deserialize, Serialize)]
pub struct Headlines {
    /// Local date of the fetch in `YYYY-MM-DD` format.
    pub local_date: String,
    /// Local time of the fetch in `HH:MM:SS` format.
    pub local_time: String,
    /// The request URL with the API key redacted.
    pub request_url: String,
    pub articles: Vec<Article>,
}
