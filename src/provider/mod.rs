//! Data providers - pluggable external sources that fill attribute gaps.
//!
//! # Architecture
//!
//! - **Capabilities** (`Capability`) - declared `(kind, path)` pairs a provider can fill
//! - **Provider** (`Provider`) - the trait external fetch-and-extract adapters implement
//! - **Fetch** (`fetch.rs`) - the injected page-fetching capability and its scoped cache
//! - **Bandcamp** (`bandcamp.rs`) - concrete providers for Bandcamp pages
//!
//! Providers never mutate Things. They yield `(path, value)` results and the
//! Secretary decides what gets merged.
//!
//! # Example
//!
//! ```ignore
//! use art_secretary::provider::{BandcampProvider, HttpFetcher};
//!
//! let fetcher = Arc::new(HttpFetcher::new(&config.http)?);
//! let album_pages = BandcampProvider::album(fetcher);
//! if album_pages.opens(&thing) {
//!     let results = album_pages.open(&thing, &FetchCache::default()).await?;
//! }
//! ```

pub mod bandcamp;
pub mod fetch;
#[cfg(test)]
pub mod mocks;

use async_trait::async_trait;

use crate::model::{AttrPath, Thing, ThingKind, Value};

pub use bandcamp::{BandcampProvider, PageKind};
pub use fetch::{FetchCache, HttpFetcher, PageFetcher, fetch_cached};

/// A provider's claim that it can fill `path` on Things of type `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    pub kind: ThingKind,
    pub path: AttrPath,
}

impl Capability {
    pub fn new(kind: ThingKind, path: AttrPath) -> Self {
        Self { kind, path }
    }

    /// Exact structural match: same kind, same segments. No prefix matching.
    pub fn matches(&self, thing: &Thing, line: &AttrPath) -> bool {
        thing.kind() == self.kind && *line == self.path
    }
}

/// One value a provider obtained, addressed relative to the opened Thing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResult {
    pub path: AttrPath,
    pub value: Value,
}

impl ProviderResult {
    pub fn new(path: AttrPath, value: impl Into<Value>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }
}

/// Everything one `open` call produced.
pub type Provision = Vec<ProviderResult>;

/// Errors that can occur inside a provider.
///
/// These never escape an investigation: the Secretary turns them into
/// per-provider diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Expected {what} on {url}, found none")]
    MissingStructure { url: String, what: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// A pluggable data source.
///
/// `opens` is the cheap fast-reject check; `open` is authoritative and may
/// still return nothing.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Whether this provider has any usable source for `thing`.
    fn opens(&self, thing: &Thing) -> bool;

    /// What this provider can fill for this particular Thing.
    fn capabilities(&self, thing: &Thing) -> Vec<Capability>;

    /// Fetch and extract. Returns `Ok(vec![])` when there is nothing to open.
    async fn open(&self, thing: &Thing, cache: &FetchCache) -> Result<Provision, ProviderError>;
}
