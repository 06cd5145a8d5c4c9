//! Lazy, depth-first resolution of a query over one entity graph.
//!
//! An [`Investigation`] keeps an explicit stack of `(location, query)` work
//! items. Each call to [`Investigation::next_event`] pops one item, asks the
//! providers for whatever is still missing on that Thing, then pushes one item
//! per child of every collection named by a multi-segment line. Children are
//! pushed in reverse so that popping visits them in document order, giving a
//! pre-order walk: a parent is always reported before its descendants.
//!
//! Every event is durable. Merges happen before the event is yielded, so
//! dropping the investigation part-way leaves all earlier progress in place.

use std::fmt;
use std::sync::Arc;

use futures::Stream;
use serde::Serialize;

use super::{Dispatch, Secretary};
use crate::model::{AttrPath, Thing, ThingKind, ThingLocation, filter_unsatisfied, group_by_head};
use crate::provider::FetchCache;

/// Something that went wrong while resolving one Thing. Never fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A provider's `open` returned an error
    ProviderFailed { provider: String, message: String },
    /// Two results targeted the same path in one dispatch
    Collision {
        path: AttrPath,
        kept: String,
        discarded: String,
    },
    /// A result could not be merged into the Thing's schema
    MergeRejected {
        provider: String,
        path: AttrPath,
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ProviderFailed { provider, message } => {
                write!(f, "{} failed: {}", provider, message)
            }
            Diagnostic::Collision {
                path,
                kept,
                discarded,
            } => write!(f, "{} and {} both yielded {}; kept {}", kept, discarded, path, kept),
            Diagnostic::MergeRejected {
                provider,
                path,
                message,
            } => write!(f, "{} from {} rejected: {}", path, provider, message),
        }
    }
}

/// The outcome of visiting one Thing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionEvent {
    /// Where the Thing sits relative to the investigation root
    pub location: ThingLocation,
    pub kind: ThingKind,
    /// The query this Thing was asked for
    pub requested: Vec<AttrPath>,
    /// Lines still unsatisfied after this visit's dispatch, excluding deep
    /// lines that were handed down to known children
    pub unsatisfied: Vec<AttrPath>,
    /// Whether any provider result changed the Thing
    pub obtained: bool,
    /// Providers that were opened, in registration order
    pub opened: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionEvent {
    pub fn is_satisfied(&self) -> bool {
        self.unsatisfied.is_empty()
    }
}

/// Every event of a finished investigation, in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub events: Vec<ResolutionEvent>,
}

impl Report {
    /// `(location, path)` for every line no provider could fill.
    pub fn unresolved(&self) -> Vec<(&ThingLocation, &AttrPath)> {
        self.events
            .iter()
            .flat_map(|event| event.unsatisfied.iter().map(move |path| (&event.location, path)))
            .collect()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (&ThingLocation, &Diagnostic)> {
        self.events
            .iter()
            .flat_map(|event| event.diagnostics.iter().map(move |d| (&event.location, d)))
    }

    /// True when every visited Thing ended up satisfied.
    pub fn is_complete(&self) -> bool {
        self.events.iter().all(ResolutionEvent::is_satisfied)
    }
}

struct Pending {
    location: ThingLocation,
    query: Vec<AttrPath>,
}

/// A running investigation over a borrowed root.
///
/// Holds the root mutably for its whole life, so the graph cannot be
/// touched from elsewhere until the investigation is finished or dropped.
pub struct Investigation<'a> {
    secretary: &'a Secretary,
    root: &'a mut Thing,
    cache: Arc<FetchCache>,
    pending: Vec<Pending>,
}

impl<'a> Investigation<'a> {
    pub(super) fn new(
        secretary: &'a Secretary,
        root: &'a mut Thing,
        query: Vec<AttrPath>,
        cache: Arc<FetchCache>,
    ) -> Self {
        Self {
            secretary,
            root,
            cache,
            pending: vec![Pending {
                location: ThingLocation::root(),
                query,
            }],
        }
    }

    pub fn root(&self) -> &Thing {
        &*self.root
    }

    pub fn cache(&self) -> &Arc<FetchCache> {
        &self.cache
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Visit the next Thing and report what happened to it.
    ///
    /// Returns `None` once the whole graph has been walked.
    pub async fn next_event(&mut self) -> Option<ResolutionEvent> {
        loop {
            let Pending { location, query } = self.pending.pop()?;

            let Some(thing) = location.resolve_mut(&mut *self.root) else {
                tracing::warn!("Nothing at {} any more, skipping", location);
                continue;
            };

            let unsatisfied = filter_unsatisfied(thing, &query);
            let dispatch = if unsatisfied.is_empty() {
                Dispatch::default()
            } else {
                self.secretary
                    .request(thing, &location, &unsatisfied, &self.cache)
                    .await
            };
            // Deep lines over a known collection are reported by the children.
            let remaining: Vec<AttrPath> = filter_unsatisfied(thing, &unsatisfied)
                .into_iter()
                .filter(|line| line.is_leaf() || thing.children(line.head()).is_none())
                .collect();

            for (head, tails) in group_by_head(&query).into_iter().rev() {
                let Some(children) = thing.children(&head) else {
                    tracing::debug!("{}.{} is still unknown, not descending", location, head);
                    continue;
                };
                for index in (0..children.len()).rev() {
                    self.pending.push(Pending {
                        location: location.child(&head, index),
                        query: tails.clone(),
                    });
                }
            }

            tracing::debug!(
                "Visited {} at {}: {} of {} lines unsatisfied",
                thing.kind(),
                location,
                remaining.len(),
                query.len()
            );

            return Some(ResolutionEvent {
                kind: thing.kind(),
                location,
                requested: query,
                unsatisfied: remaining,
                obtained: dispatch.obtained,
                opened: dispatch.opened,
                diagnostics: dispatch.diagnostics,
            });
        }
    }

    /// Adapt into a `Stream` of events.
    pub fn into_stream(self) -> impl Stream<Item = ResolutionEvent> + 'a {
        futures::stream::unfold(self, |mut investigation| async move {
            let event = investigation.next_event().await?;
            Some((event, investigation))
        })
    }

    /// Drive the investigation to completion.
    pub async fn run(mut self) -> Report {
        let mut report = Report::default();
        while let Some(event) = self.next_event().await {
            report.events.push(event);
        }

        tracing::info!(
            "Investigation finished: {} things visited, {} lines unresolved",
            report.events.len(),
            report.unresolved().len()
        );
        report
    }
}
