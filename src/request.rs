//! Guardian content API request URL assembly.
//!
//! The fetch client only ever sees a finished URL string. This module builds
//! that URL from the CLI options: endpoint, API key, search terms, paging and
//! the `show-fields` list the parser relies on.

use crate::error::NewsError;
use url::Url;

/// Search endpoint of the Guardian content API.
pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// The Guardian's rate-limited public developer key.
pub const DEFAULT_API_KEY: &str = "test";

/// Extra fields requested for every result; the parser reads exactly these.
pub const DEFAULT_SHOW_FIELDS: &str = "byline,firstPublicationDate,thumbnail";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const DEFAULT_ORDER_BY: &str = "newest";

const API_KEY_PARAM: &str = "api-key";

/// Parameters of one `/search` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianQuery {
    pub endpoint: String,
    pub api_key: String,
    /// Free-text search terms (`q`).
    pub query: Option<String>,
    /// Section id filter such as `technology` or `sport`.
    pub section: Option<String>,
    pub page_size: u32,
    /// One of `newest`, `oldest`, `relevance`.
    pub order_by: String,
    pub show_fields: String,
}

impl Default for GuardianQuery {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            query: None,
            section: None,
            page_size: DEFAULT_PAGE_SIZE,
            order_by: DEFAULT_ORDER_BY.to_string(),
            show_fields: DEFAULT_SHOW_FIELDS.to_string(),
        }
    }
}

impl GuardianQuery {
    /// Build the request URL.
    ///
    /// Empty optional parameters are left out of the query string.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::InvalidUrl`] when `endpoint` is not an absolute URL.
    pub fn to_url(&self) -> Result<Url, NewsError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| NewsError::InvalidUrl {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(q) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
                pairs.append_pair("q", q.trim());
            }
            if let Some(section) = self.section.as_deref().filter(|s| !s.trim().is_empty()) {
                pairs.append_pair("section", section.trim());
            }
            if !self.order_by.is_empty() {
                pairs.append_pair("order-by", &self.order_by);
            }
            pairs.append_pair("page-size", &self.page_size.to_string());
            if !self.show_fields.is_empty() {
                pairs.append_pair("show-fields", &self.show_fields);
            }
            pairs.append_pair(API_KEY_PARAM, &self.api_key);
        }

        Ok(url)
    }
}

/// Render a URL for logs and exports with the `api-key` value masked.
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == API_KEY_PARAM {
                (k.into_owned(), "***".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Same as [`redact_api_key`] for a raw string; unparsable input is returned as is.
pub fn redact_api_key_str(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => redact_api_key(&parsed),
        Err(_) => url.to_string(),
    }
}
