//! The Secretary - owns the providers and the top-level query.
//!
//! This is the high-level API for enriching an entity graph:
//! 1. Select the query lines declared for the root's kind
//! 2. Start an [`Investigation`] over the root
//! 3. For each visited Thing, dispatch unsatisfied lines to matching providers
//! 4. Merge their results back into the graph
//!
//! # Usage
//!
//! ```ignore
//! use art_secretary::secretary::{QueryLine, Secretary};
//!
//! let query = vec![
//!     QueryLine::new(ThingKind::Album, "name")?,
//!     QueryLine::new(ThingKind::Album, "tracks.duration")?,
//! ];
//! let secretary = Secretary::bandcamp(query, fetcher);
//! let report = secretary.investigate(&mut album)?.run().await;
//! ```

pub mod investigation;

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::model::{AttrPath, ModelError, Thing, ThingKind, ThingLocation, Value, merge_result};
use crate::provider::{BandcampProvider, FetchCache, HttpFetcher, PageFetcher, Provider, ProviderError};

pub use investigation::{Diagnostic, Investigation, Report, ResolutionEvent};

/// Which result survives when two providers yield the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The provider registered later wins
    #[default]
    LastWriteWins,
    /// The provider registered earlier wins
    FirstWriteWins,
}

/// One line of the top-level query: a path required on Things of `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLine {
    pub kind: ThingKind,
    pub path: AttrPath,
}

impl QueryLine {
    /// Parse and validate `path` against the schema of `kind`.
    pub fn new(kind: ThingKind, path: &str) -> Result<Self, QueryError> {
        let path = AttrPath::parse(path)?;
        kind.check_path(&path)?;
        Ok(Self { kind, path })
    }
}

/// Malformed queries, rejected before any provider runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid query: {0}")]
    Invalid(#[from] ModelError),

    #[error("No query lines apply to a {0}")]
    NoQueryFor(ThingKind),
}

const DEFAULT_QUERY: &[(ThingKind, &str)] = &[
    (ThingKind::Artist, "name"),
    (ThingKind::Artist, "location"),
    (ThingKind::Artist, "albums.url"),
    (ThingKind::Artist, "albums.name"),
    (ThingKind::Artist, "albums.cover_url"),
    (ThingKind::Artist, "albums.tracks.url"),
    (ThingKind::Artist, "albums.tracks.name"),
    (ThingKind::Artist, "albums.tracks.duration"),
    (ThingKind::Artist, "singles.url"),
    (ThingKind::Artist, "singles.name"),
    (ThingKind::Artist, "singles.duration"),
    (ThingKind::Album, "name"),
    (ThingKind::Album, "artist"),
    (ThingKind::Album, "cover_url"),
    (ThingKind::Album, "tracks.url"),
    (ThingKind::Album, "tracks.name"),
    (ThingKind::Album, "tracks.track_number"),
    (ThingKind::Album, "tracks.duration"),
    (ThingKind::Track, "name"),
    (ThingKind::Track, "album"),
    (ThingKind::Track, "duration"),
    (ThingKind::Track, "cover_url"),
];

/// Query used by the command line: names, covers and track listings.
pub fn default_query() -> Result<Vec<QueryLine>, QueryError> {
    DEFAULT_QUERY
        .iter()
        .map(|(kind, path)| QueryLine::new(*kind, path))
        .collect()
}

/// Outcome of dispatching one Thing's unsatisfied lines.
#[derive(Debug, Default)]
pub(crate) struct Dispatch {
    /// Whether any merge changed the Thing
    pub obtained: bool,
    /// Providers that were opened, in registration order
    pub opened: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Coordinator holding the declarative query and the registered providers.
pub struct Secretary {
    query: Vec<QueryLine>,
    providers: Vec<Arc<dyn Provider>>,
    collision_policy: CollisionPolicy,
    cache_pages: bool,
}

impl Secretary {
    /// A Secretary with no providers yet.
    pub fn new(query: Vec<QueryLine>) -> Self {
        Self {
            query,
            providers: Vec::new(),
            collision_policy: CollisionPolicy::default(),
            cache_pages: true,
        }
    }

    /// A Secretary with the Bandcamp artist, album and track providers.
    pub fn bandcamp(query: Vec<QueryLine>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::new(query).with_providers(BandcampProvider::all(fetcher))
    }

    /// Bandcamp providers over a real HTTP fetcher, tuned by `config`.
    pub fn from_config(config: &Config, query: Vec<QueryLine>) -> Result<Self, ProviderError> {
        let fetcher = Arc::new(HttpFetcher::new(&config.http)?);
        Ok(Self::bandcamp(query, fetcher)
            .with_collision_policy(config.investigation.collision_policy)
            .with_page_cache(config.investigation.cache_pages))
    }

    pub fn with_provider(mut self, provider: impl Provider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    pub fn with_providers(mut self, providers: impl IntoIterator<Item = Arc<dyn Provider>>) -> Self {
        self.providers.extend(providers);
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn with_page_cache(mut self, enabled: bool) -> Self {
        self.cache_pages = enabled;
        self
    }

    pub fn query(&self) -> &[QueryLine] {
        &self.query
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn Provider> {
        self.providers.iter().map(|provider| provider.as_ref())
    }

    /// Query lines declared for `kind`, in declaration order.
    pub fn top_level_query(&self, kind: ThingKind) -> Vec<AttrPath> {
        self.query
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| line.path.clone())
            .collect()
    }

    /// A fresh page cache honouring the configured cache setting.
    pub fn new_cache(&self) -> Arc<FetchCache> {
        if self.cache_pages {
            Arc::new(FetchCache::default())
        } else {
            Arc::new(FetchCache::disabled())
        }
    }

    /// Start investigating `thing` with the lines declared for its kind.
    ///
    /// Performs no I/O; nothing happens until the returned investigation
    /// is driven.
    pub fn investigate<'a>(&'a self, thing: &'a mut Thing) -> Result<Investigation<'a>, QueryError> {
        let query = self.top_level_query(thing.kind());
        if query.is_empty() {
            return Err(QueryError::NoQueryFor(thing.kind()));
        }
        let cache = self.new_cache();
        self.investigate_with(thing, query, cache)
    }

    /// Start investigating `thing` with an explicit query and a caller-owned
    /// cache (share one cache across several roots to avoid refetching).
    pub fn investigate_with<'a>(
        &'a self,
        thing: &'a mut Thing,
        query: Vec<AttrPath>,
        cache: Arc<FetchCache>,
    ) -> Result<Investigation<'a>, QueryError> {
        let kind = thing.kind();
        for line in &query {
            kind.check_path(line)?;
        }

        tracing::debug!("Investigating {} with {} query lines", kind, query.len());
        Ok(Investigation::new(self, thing, query, cache))
    }

    /// Providers that open `thing` and declare a capability equal to a line.
    fn matching_providers(&self, thing: &Thing, query: &[AttrPath]) -> Vec<&dyn Provider> {
        self.providers()
            .filter(|provider| provider.opens(thing))
            .filter(|provider| {
                provider
                    .capabilities(thing)
                    .iter()
                    .any(|capability| query.iter().any(|line| capability.matches(thing, line)))
            })
            .collect()
    }

    /// Ask matching providers for `query` and merge what they return.
    ///
    /// Provider failures become diagnostics; nothing here is fatal.
    pub(crate) async fn request(
        &self,
        thing: &mut Thing,
        location: &ThingLocation,
        query: &[AttrPath],
        cache: &FetchCache,
    ) -> Dispatch {
        let kind = thing.kind();
        let view: &Thing = thing;
        let providers = self.matching_providers(view, query);
        let mut dispatch = Dispatch::default();

        if providers.is_empty() {
            tracing::debug!("No provider covers {:?} for {} at {}", query, kind, location);
            return dispatch;
        }

        let outcomes = join_all(providers.iter().map(|provider| provider.open(view, cache))).await;

        let mut collected: Vec<(AttrPath, Value, &str)> = Vec::new();
        for (provider, outcome) in providers.iter().zip(outcomes) {
            let name = provider.name();
            dispatch.opened.push(name.to_string());

            let results = match outcome {
                Ok(results) => results,
                Err(e) => {
                    tracing::warn!("Provider {} failed for {} at {}: {}", name, kind, location, e);
                    dispatch.diagnostics.push(Diagnostic::ProviderFailed {
                        provider: name.to_string(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            for result in results {
                if result.value.is_empty() {
                    continue;
                }
                if !query.contains(&result.path) {
                    tracing::debug!("Ignoring unrequested {} from {}", result.path, name);
                    continue;
                }

                let Some(entry) = collected.iter_mut().find(|(path, _, _)| *path == result.path) else {
                    collected.push((result.path, result.value, name));
                    continue;
                };

                let previous = entry.2;
                let (kept, discarded) = match self.collision_policy {
                    CollisionPolicy::LastWriteWins => {
                        entry.1 = result.value;
                        entry.2 = name;
                        (name, previous)
                    }
                    CollisionPolicy::FirstWriteWins => (previous, name),
                };

                tracing::warn!(
                    "Providers {} and {} both yielded {} for {} at {}; keeping {}",
                    previous,
                    name,
                    result.path,
                    kind,
                    location,
                    kept
                );
                dispatch.diagnostics.push(Diagnostic::Collision {
                    path: result.path,
                    kept: kept.to_string(),
                    discarded: discarded.to_string(),
                });
            }
        }

        for (path, value, provider) in collected {
            match merge_result(thing, &path, value) {
                Ok(changed) => dispatch.obtained |= changed,
                Err(e) => {
                    tracing::warn!("Rejected {} from {}: {}", path, provider, e);
                    dispatch.diagnostics.push(Diagnostic::MergeRejected {
                        provider: provider.to_string(),
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        dispatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Album, Track};
    use crate::provider::mocks::{MockProvider, result};
    use crate::test_utils::{album_with_tracks, path, paths};

    fn album_query() -> Vec<QueryLine> {
        vec![
            QueryLine::new(ThingKind::Album, "name").unwrap(),
            QueryLine::new(ThingKind::Track, "duration").unwrap(),
            QueryLine::new(ThingKind::Album, "tracks.name").unwrap(),
        ]
    }

    #[test]
    fn test_query_line_validation() {
        assert!(QueryLine::new(ThingKind::Artist, "albums.tracks.name").is_ok());
        assert!(matches!(
            QueryLine::new(ThingKind::Album, ""),
            Err(QueryError::Invalid(ModelError::EmptyPath))
        ));
        assert!(matches!(
            QueryLine::new(ThingKind::Track, "tracks.name"),
            Err(QueryError::Invalid(ModelError::UnknownAttribute { .. }))
        ));
    }

    #[test]
    fn test_default_query_is_valid() {
        let query = default_query().unwrap();
        assert_eq!(query.len(), DEFAULT_QUERY.len());
    }

    #[test]
    fn test_top_level_query_keeps_declaration_order() {
        let secretary = Secretary::new(album_query());
        assert_eq!(
            secretary.top_level_query(ThingKind::Album),
            paths(&["name", "tracks.name"])
        );
        assert_eq!(secretary.top_level_query(ThingKind::Track), paths(&["duration"]));
        assert!(secretary.top_level_query(ThingKind::Artist).is_empty());
    }

    #[test]
    fn test_investigate_rejects_kind_without_query() {
        let secretary = Secretary::new(album_query());
        let mut artist = ThingKind::Artist.new_thing();
        assert_eq!(
            secretary.investigate(&mut artist).err(),
            Some(QueryError::NoQueryFor(ThingKind::Artist))
        );
    }

    #[test]
    fn test_investigate_with_rejects_mismatched_query() {
        let secretary = Secretary::new(Vec::new());
        let mut track = Thing::from(Track::new());
        let result = secretary.investigate_with(
            &mut track,
            paths(&["tracks.name"]),
            Arc::new(FetchCache::default()),
        );
        assert!(matches!(result, Err(QueryError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_request_skips_closed_providers() {
        let closed = Arc::new(
            MockProvider::new("closed", &[(ThingKind::Album, "name")], |_| {
                vec![result("name", "Never")]
            })
            .closed(),
        );
        let secretary = Secretary::new(Vec::new()).with_providers([closed.clone() as Arc<dyn Provider>]);
        let mut album = Thing::from(Album::new());

        let dispatch = secretary
            .request(&mut album, &ThingLocation::root(), &paths(&["name"]), &FetchCache::default())
            .await;

        assert_eq!(closed.call_count(), 0);
        assert!(!dispatch.obtained);
        assert!(!album.is_known("name"));
    }

    #[tokio::test]
    async fn test_request_requires_exact_capability() {
        let prefix_only = Arc::new(MockProvider::new("tracks", &[(ThingKind::Album, "tracks")], |_| {
            vec![result("tracks.name", vec!["T1"])]
        }));
        let secretary =
            Secretary::new(Vec::new()).with_providers([prefix_only.clone() as Arc<dyn Provider>]);
        let mut album = album_with_tracks(1);

        secretary
            .request(&mut album, &ThingLocation::root(), &paths(&["tracks.name"]), &FetchCache::default())
            .await;

        assert_eq!(prefix_only.call_count(), 0);
    }

    #[tokio::test]
    async fn test_request_ignores_unrequested_results() {
        let secretary = Secretary::new(Vec::new()).with_provider(MockProvider::new(
            "generous",
            &[(ThingKind::Album, "name")],
            |_| vec![result("name", "X"), result("artist", "Extra")],
        ));
        let mut album = Thing::from(Album::new());

        let dispatch = secretary
            .request(&mut album, &ThingLocation::root(), &paths(&["name"]), &FetchCache::default())
            .await;

        assert!(dispatch.obtained);
        assert_eq!(album.value("name"), Some(Value::from("X")));
        assert!(!album.is_known("artist"));
    }

    #[tokio::test]
    async fn test_collision_last_write_wins_with_diagnostic() {
        let secretary = Secretary::new(Vec::new())
            .with_provider(MockProvider::new("first", &[(ThingKind::Album, "name")], |_| {
                vec![result("name", "From first")]
            }))
            .with_provider(MockProvider::new("second", &[(ThingKind::Album, "name")], |_| {
                vec![result("name", "From second")]
            }));
        let mut album = Thing::from(Album::new());

        let dispatch = secretary
            .request(&mut album, &ThingLocation::root(), &paths(&["name"]), &FetchCache::default())
            .await;

        assert_eq!(album.value("name"), Some(Value::from("From second")));
        assert_eq!(
            dispatch.diagnostics,
            vec![Diagnostic::Collision {
                path: path("name"),
                kept: "second".to_string(),
                discarded: "first".to_string(),
            }]
        );
        assert_eq!(dispatch.opened, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_collision_first_write_wins() {
        let secretary = Secretary::new(Vec::new())
            .with_collision_policy(CollisionPolicy::FirstWriteWins)
            .with_provider(MockProvider::new("first", &[(ThingKind::Album, "name")], |_| {
                vec![result("name", "From first")]
            }))
            .with_provider(MockProvider::new("second", &[(ThingKind::Album, "name")], |_| {
                vec![result("name", "From second")]
            }));
        let mut album = Thing::from(Album::new());

        secretary
            .request(&mut album, &ThingLocation::root(), &paths(&["name"]), &FetchCache::default())
            .await;

        assert_eq!(album.value("name"), Some(Value::from("From first")));
    }

    #[tokio::test]
    async fn test_merge_rejection_is_a_diagnostic() {
        let secretary = Secretary::new(Vec::new()).with_provider(MockProvider::new(
            "sloppy",
            &[(ThingKind::Track, "duration")],
            |_| vec![result("duration", "three minutes")],
        ));
        let mut track = Thing::from(Track::new());

        let dispatch = secretary
            .request(&mut track, &ThingLocation::root(), &paths(&["duration"]), &FetchCache::default())
            .await;

        assert!(!dispatch.obtained);
        assert!(matches!(
            dispatch.diagnostics.as_slice(),
            [Diagnostic::MergeRejected { provider, .. }] if provider == "sloppy"
        ));
    }

    #[test]
    fn test_cache_setting() {
        let secretary = Secretary::new(Vec::new()).with_page_cache(false);
        assert!(!secretary.new_cache().is_enabled());
        assert!(Secretary::new(Vec::new()).new_cache().is_enabled());
    }
}
