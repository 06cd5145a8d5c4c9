//! Attribute paths and the query operations built on them.
//!
//! An [`AttrPath`] such as `tracks.name` locates "the `name` of every child
//! in this Thing's `tracks` collection". A query is a plain ordered slice of
//! paths, resolved against one Thing and, transitively, its descendants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::{ModelError, Thing};

/// Immutable, non-empty sequence of attribute names.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttrPath {
    segments: SmallVec<[String; 3]>,
}

impl AttrPath {
    /// Build a path from segments. Empty paths and empty segments are rejected.
    pub fn new<I, S>(segments: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: SmallVec<[String; 3]> = segments
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .collect();

        if segments.is_empty() || segments.iter().any(String::is_empty) {
            return Err(ModelError::EmptyPath);
        }

        Ok(Self { segments })
    }

    /// Parse dot-separated text: `"tracks.name"`.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        Self::new(text.split('.'))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// A single-segment path addresses the current Thing directly.
    pub fn is_leaf(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    /// The attribute name the path finally lands on.
    pub fn last(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// The path with its first segment removed, or `None` for a leaf.
    pub fn tail(&self) -> Option<AttrPath> {
        if self.is_leaf() {
            return None;
        }
        Some(Self {
            segments: self.segments[1..].iter().cloned().collect(),
        })
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl fmt::Debug for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttrPath({})", self)
    }
}

impl FromStr for AttrPath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AttrPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AttrPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Query operations
// ============================================================================

/// Whether `path` is fully known on `thing`.
///
/// The head must be present. When more segments remain and the head is a
/// collection, every child must satisfy the remainder; a scalar head is
/// satisfied by presence alone.
pub fn satisfied(thing: &Thing, path: &AttrPath) -> bool {
    satisfied_segments(thing, path.segments())
}

fn satisfied_segments(thing: &Thing, segments: &[String]) -> bool {
    let Some((head, rest)) = segments.split_first() else {
        return true;
    };

    if !thing.is_known(head) {
        return false;
    }

    if rest.is_empty() {
        return true;
    }

    match thing.children(head) {
        Some(children) => children
            .iter()
            .all(|child| satisfied_segments(child, rest)),
        None => true,
    }
}

/// The lines of `query` not yet satisfied on `thing`, in input order.
pub fn filter_unsatisfied(thing: &Thing, query: &[AttrPath]) -> Vec<AttrPath> {
    query
        .iter()
        .filter(|line| !satisfied(thing, line))
        .cloned()
        .collect()
}

/// Partition multi-segment lines by their first segment.
///
/// Heads appear in order of first occurrence and each head maps to the tails
/// of its lines, in input order. A tail repeated under the same head is kept
/// once. Leaf lines are skipped: they terminate at the current Thing.
pub fn group_by_head(query: &[AttrPath]) -> Vec<(String, Vec<AttrPath>)> {
    let mut groups: Vec<(String, Vec<AttrPath>)> = Vec::new();

    for line in query {
        let Some(tail) = line.tail() else {
            continue;
        };

        match groups.iter_mut().find(|(head, _)| head == line.head()) {
            Some((_, tails)) => {
                if !tails.contains(&tail) {
                    tails.push(tail);
                }
            }
            None => groups.push((line.head().to_string(), vec![tail])),
        }
    }

    groups
}
