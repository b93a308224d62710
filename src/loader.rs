//! Background loading of search results.
//!
//! [`NewsLoader`] runs one [`NewsClient::fetch_news`] call on a spawned tokio
//! task and keeps the most recent result, so repeated loads for the same
//! consumer do not hit the API again.

use crate::client::NewsClient;
use crate::models::Article;
use std::sync::Arc;
use tracing::{debug, error, instrument};

#[derive(Debug)]
pub struct NewsLoader {
    client: Arc<NewsClient>,
    url: Option<String>,
    cached: Option<Vec<Article>>,
}

impl NewsLoader {
    /// A loader with no URL always yields an empty list without a request.
    pub fn new(client: Arc<NewsClient>, url: Option<String>) -> Self {
        Self {
            client,
            url,
            cached: None,
        }
    }

    /// Return the cached list, or fetch it on a background task.
    ///
    /// A task that panics or is cancelled is logged and yields an empty list.
    #[instrument(level = "info", skip_all)]
    pub async fn load(&mut self) -> Vec<Article> {
        if let Some(articles) = &self.cached {
            debug!(count = articles.len(), "Returning cached articles");
            return articles.clone();
        }

        let Some(url) = self.url.clone() else {
            debug!("No request URL; skipping fetch");
            return Vec::new();
        };

        let client = Arc::clone(&self.client);
        let handle = tokio::spawn(async move { client.fetch_news(&url).await });

        let articles = match handle.await {
            Ok(articles) => articles,
            Err(e) => {
                error!(error = %e, "Background fetch task failed");
                return Vec::new();
            }
        };

        self.cached = Some(articles.clone());
        articles
    }

    /// Drop the cached result so the next [`load`](Self::load) fetches again.
    pub fn reset(&mut self) {
        self.cached = None;
    }
}
