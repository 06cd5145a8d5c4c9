//! Mock providers and fetchers for testing.
//!
//! Return configurable responses for testing different dispatch scenarios
//! without touching the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::*;

/// Fetcher that serves canned pages and 404s everything else.
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// How many times `fetch_text` was called.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ProviderError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(url.to_string()))
    }
}

type Answer = Box<dyn Fn(&Thing) -> Result<Provision, ProviderError> + Send + Sync>;

/// Provider whose results come from a closure.
pub struct MockProvider {
    name: String,
    capabilities: Vec<Capability>,
    opens: bool,
    answer: Answer,
    calls: AtomicUsize,
}

impl MockProvider {
    /// A provider that opens everything and answers with `answer`.
    pub fn new(
        name: &str,
        capabilities: &[(ThingKind, &str)],
        answer: impl Fn(&Thing) -> Provision + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            capabilities: capabilities
                .iter()
                .map(|(kind, path)| Capability::new(*kind, AttrPath::parse(path).unwrap()))
                .collect(),
            opens: true,
            answer: Box::new(move |thing| Ok(answer(thing))),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that always fails with `error`.
    pub fn failing(name: &str, capabilities: &[(ThingKind, &str)], error: ProviderError) -> Self {
        Self {
            answer: Box::new(move |_| Err(error.clone())),
            ..Self::new(name, capabilities, |_| Vec::new())
        }
    }

    /// Make `opens` return false for every Thing.
    pub fn closed(mut self) -> Self {
        self.opens = false;
        self
    }

    /// How many times `open` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn opens(&self, _thing: &Thing) -> bool {
        self.opens
    }

    fn capabilities(&self, _thing: &Thing) -> Vec<Capability> {
        self.capabilities.clone()
    }

    async fn open(&self, thing: &Thing, _cache: &FetchCache) -> Result<Provision, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.answer)(thing)
    }
}

/// Build a result from a dotted path.
pub fn result(path: &str, value: impl Into<Value>) -> ProviderResult {
    ProviderResult::new(AttrPath::parse(path).unwrap(), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Album;

    #[tokio::test]
    async fn test_mock_provider_counts_calls() {
        let mock = MockProvider::new("names", &[(ThingKind::Album, "name")], |_| {
            vec![result("name", "X")]
        });
        let album = Thing::from(Album::new());

        let results = mock.open(&album, &FetchCache::default()).await.unwrap();
        assert_eq!(results, vec![result("name", "X")]);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let mock = MockProvider::failing(
            "broken",
            &[(ThingKind::Album, "name")],
            ProviderError::Network("timeout".to_string()),
        );
        let result = mock.open(&Thing::from(Album::new()), &FetchCache::default()).await;
        assert!(matches!(result, Err(ProviderError::Network(_))));
    }

    #[test]
    fn test_closed_provider() {
        let mock = MockProvider::new("closed", &[], |_| Vec::new()).closed();
        assert!(!mock.opens(&Thing::from(Album::new())));
    }
}
