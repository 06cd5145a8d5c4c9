//! Page fetching - the injected capability web providers depend on.
//!
//! [`PageFetcher`] abstracts "fetch page text for a URL" so providers can be
//! tested against canned HTML. [`HttpFetcher`] is the reqwest implementation.
//!
//! [`FetchCache`] memoizes page text for the lifetime of one investigation
//! (or longer, when the caller shares it explicitly). Album and track pages
//! are often opened by several providers, so this avoids duplicate requests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::ProviderError;
use crate::config::HttpConfig;

/// Fetch the text body of a page.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, ProviderError>;
}

/// reqwest-backed page fetcher
pub struct HttpFetcher {
    http_client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured user agent and timeout.
    pub fn new(config: &HttpConfig) -> Result<Self, ProviderError> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ProviderError> {
        tracing::debug!("Fetching page {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(url.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))
    }
}

/// Scoped memo of fetched page text, keyed by URL.
#[derive(Debug)]
pub struct FetchCache {
    enabled: bool,
    pages: Mutex<HashMap<String, Arc<str>>>,
}

impl FetchCache {
    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            pages: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn get(&self, url: &str) -> Option<Arc<str>> {
        self.pages.lock().get(url).cloned()
    }

    pub fn insert(&self, url: &str, text: Arc<str>) {
        if self.enabled {
            self.pages.lock().insert(url.to_string(), text);
        }
    }

    /// Number of cached pages.
    pub fn len(&self) -> usize {
        self.pages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.lock().is_empty()
    }
}

impl Default for FetchCache {
    fn default() -> Self {
        Self {
            enabled: true,
            pages: Mutex::new(HashMap::new()),
        }
    }
}

/// Fetch `url` through `cache`. Failures are not cached.
pub async fn fetch_cached(
    fetcher: &dyn PageFetcher,
    cache: &FetchCache,
    url: &str,
) -> Result<Arc<str>, ProviderError> {
    if let Some(page) = cache.get(url) {
        tracing::debug!("Page cache hit for {}", url);
        return Ok(page);
    }

    let text: Arc<str> = fetcher.fetch_text(url).await?.into();
    cache.insert(url, Arc::clone(&text));
    Ok(text)
}
