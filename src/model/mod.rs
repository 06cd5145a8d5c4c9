//! Domain entities ("Things") investigated by the engine.
//!
//! Defines the closed set of entity variants: [`Artist`], [`Album`] and
//! [`Track`], wrapped in the [`Thing`] enum. Every attribute is an `Option`,
//! so "is this known" is a plain field check and never triggers a fetch.
//!
//! # Schema
//!
//! Each [`ThingKind`] exposes a fixed attribute table:
//! - `artist`: `url`, `name`, `location`, `albums` (collection of albums),
//!   `singles` (collection of tracks released on their own)
//! - `album`: `url`, `name`, `artist`, `release_date`, `cover_url`, `tracks`
//! - `track`: `url`, `name`, `track_number`, `duration`, `album`, `cover_url`
//!
//! Queries are validated against this table before any provider runs.

pub mod location;
pub mod merge;
pub mod path;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use location::ThingLocation;
pub use merge::merge_result;
pub use path::{AttrPath, filter_unsatisfied, group_by_head, satisfied};

// ============================================================================
// Schema
// ============================================================================

/// Entity type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThingKind {
    Artist,
    Album,
    Track,
}

/// Shape of a single attribute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Free text (names, URLs, dates)
    Text,
    /// Whole number (track numbers, durations in seconds)
    Integer,
    /// Ordered children of the given kind
    Collection(ThingKind),
}

/// One entry of a kind's attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub shape: Shape,
}

const fn spec(name: &'static str, shape: Shape) -> AttributeSpec {
    AttributeSpec { name, shape }
}

const ARTIST_ATTRIBUTES: &[AttributeSpec] = &[
    spec("url", Shape::Text),
    spec("name", Shape::Text),
    spec("location", Shape::Text),
    spec("albums", Shape::Collection(ThingKind::Album)),
    spec("singles", Shape::Collection(ThingKind::Track)),
];

const ALBUM_ATTRIBUTES: &[AttributeSpec] = &[
    spec("url", Shape::Text),
    spec("name", Shape::Text),
    spec("artist", Shape::Text),
    spec("release_date", Shape::Text),
    spec("cover_url", Shape::Text),
    spec("tracks", Shape::Collection(ThingKind::Track)),
];

const TRACK_ATTRIBUTES: &[AttributeSpec] = &[
    spec("url", Shape::Text),
    spec("name", Shape::Text),
    spec("track_number", Shape::Integer),
    spec("duration", Shape::Integer),
    spec("album", Shape::Text),
    spec("cover_url", Shape::Text),
];

impl ThingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ThingKind::Artist => "artist",
            ThingKind::Album => "album",
            ThingKind::Track => "track",
        }
    }

    /// The fixed attribute table for this kind.
    pub fn attributes(self) -> &'static [AttributeSpec] {
        match self {
            ThingKind::Artist => ARTIST_ATTRIBUTES,
            ThingKind::Album => ALBUM_ATTRIBUTES,
            ThingKind::Track => TRACK_ATTRIBUTES,
        }
    }

    /// Look up one attribute by name.
    pub fn attribute(self, name: &str) -> Option<&'static AttributeSpec> {
        self.attributes().iter().find(|spec| spec.name == name)
    }

    /// A fresh Thing of this kind with every attribute unknown.
    pub fn new_thing(self) -> Thing {
        match self {
            ThingKind::Artist => Thing::Artist(Artist::default()),
            ThingKind::Album => Thing::Album(Album::default()),
            ThingKind::Track => Thing::Track(Track::default()),
        }
    }

    /// Check that `path` names a real location for Things of this kind.
    ///
    /// Every segment but the last must be a collection; the last segment may
    /// be any attribute of the kind reached at that point.
    pub fn check_path(self, path: &AttrPath) -> Result<(), ModelError> {
        let mut kind = self;
        let (last, leading) = path
            .segments()
            .split_last()
            .ok_or(ModelError::EmptyPath)?;

        for segment in leading {
            match kind.attribute(segment).map(|spec| spec.shape) {
                Some(Shape::Collection(child)) => kind = child,
                Some(_) => {
                    return Err(ModelError::NotACollection {
                        kind,
                        attr: segment.clone(),
                    });
                }
                None => {
                    return Err(ModelError::UnknownAttribute {
                        kind,
                        attr: segment.clone(),
                    });
                }
            }
        }

        match kind.attribute(last) {
            Some(_) => Ok(()),
            None => Err(ModelError::UnknownAttribute {
                kind,
                attr: last.clone(),
            }),
        }
    }
}

impl fmt::Display for ThingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThingKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artist" => Ok(ThingKind::Artist),
            "album" => Ok(ThingKind::Album),
            "track" => Ok(ThingKind::Track),
            other => Err(ModelError::UnknownKind(other.to_string())),
        }
    }
}

// ============================================================================
// Values
// ============================================================================

/// A scalar attribute value, or a per-child list of them.
///
/// `List` only appears in provider results for multi-segment paths, where
/// element `i` belongs to child `i` of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Blank text and empty lists carry no information and are never merged.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(text) => text.trim().is_empty(),
            Value::Integer(_) => false,
            Value::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Integer(n) => write!(f, "{}", n),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by schema checks and merges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Attribute path must have at least one non-empty segment")]
    EmptyPath,

    #[error("Unknown thing kind: {0}")]
    UnknownKind(String),

    #[error("{kind} has no attribute '{attr}'")]
    UnknownAttribute { kind: ThingKind, attr: String },

    #[error("{kind}.{attr} expects {expected}")]
    TypeMismatch {
        kind: ThingKind,
        attr: String,
        expected: &'static str,
    },

    #[error("{kind}.{attr} is not a collection")]
    NotACollection { kind: ThingKind, attr: String },

    #[error("{kind}.{attr} is a collection and cannot hold a scalar")]
    NotAScalar { kind: ThingKind, attr: String },
}

// ============================================================================
// Things
// ============================================================================

/// An artist (a Bandcamp discography page).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Artist {
    /// Extra URLs providers may open; not a queryable attribute
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<Thing>>,
    /// Tracks on the discography that link to a track page, not an album
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singles: Option<Vec<Thing>>,
}

/// An album; `tracks` holds [`Thing::Track`] children.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Album {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Thing>>,
}

/// A single track. `duration` is in whole seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Borrowed view of one attribute slot.
enum Slot<'a> {
    Text(&'a Option<String>),
    Integer(&'a Option<i64>),
    Things(&'a Option<Vec<Thing>>),
}

/// Mutable view of one attribute slot.
enum SlotMut<'a> {
    Text(&'a mut Option<String>),
    Integer(&'a mut Option<i64>),
    Things(&'a mut Option<Vec<Thing>>),
}

impl Artist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_albums(mut self, albums: impl IntoIterator<Item = Album>) -> Self {
        self.albums = Some(albums.into_iter().map(Thing::Album).collect());
        self
    }

    pub fn with_singles(mut self, singles: impl IntoIterator<Item = Track>) -> Self {
        self.singles = Some(singles.into_iter().map(Thing::Track).collect());
        self
    }

    fn slot(&self, attr: &str) -> Option<Slot<'_>> {
        Some(match attr {
            "url" => Slot::Text(&self.url),
            "name" => Slot::Text(&self.name),
            "location" => Slot::Text(&self.location),
            "albums" => Slot::Things(&self.albums),
            "singles" => Slot::Things(&self.singles),
            _ => return None,
        })
    }

    fn slot_mut(&mut self, attr: &str) -> Option<SlotMut<'_>> {
        Some(match attr {
            "url" => SlotMut::Text(&mut self.url),
            "name" => SlotMut::Text(&mut self.name),
            "location" => SlotMut::Text(&mut self.location),
            "albums" => SlotMut::Things(&mut self.albums),
            "singles" => SlotMut::Things(&mut self.singles),
            _ => return None,
        })
    }
}

impl Album {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tracks(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks = Some(tracks.into_iter().map(Thing::Track).collect());
        self
    }

    fn slot(&self, attr: &str) -> Option<Slot<'_>> {
        Some(match attr {
            "url" => Slot::Text(&self.url),
            "name" => Slot::Text(&self.name),
            "artist" => Slot::Text(&self.artist),
            "release_date" => Slot::Text(&self.release_date),
            "cover_url" => Slot::Text(&self.cover_url),
            "tracks" => Slot::Things(&self.tracks),
            _ => return None,
        })
    }

    fn slot_mut(&mut self, attr: &str) -> Option<SlotMut<'_>> {
        Some(match attr {
            "url" => SlotMut::Text(&mut self.url),
            "name" => SlotMut::Text(&mut self.name),
            "artist" => SlotMut::Text(&mut self.artist),
            "release_date" => SlotMut::Text(&mut self.release_date),
            "cover_url" => SlotMut::Text(&mut self.cover_url),
            "tracks" => SlotMut::Things(&mut self.tracks),
            _ => return None,
        })
    }
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn slot(&self, attr: &str) -> Option<Slot<'_>> {
        Some(match attr {
            "url" => Slot::Text(&self.url),
            "name" => Slot::Text(&self.name),
            "track_number" => Slot::Integer(&self.track_number),
            "duration" => Slot::Integer(&self.duration),
            "album" => Slot::Text(&self.album),
            "cover_url" => Slot::Text(&self.cover_url),
            _ => return None,
        })
    }

    fn slot_mut(&mut self, attr: &str) -> Option<SlotMut<'_>> {
        Some(match attr {
            "url" => SlotMut::Text(&mut self.url),
            "name" => SlotMut::Text(&mut self.name),
            "track_number" => SlotMut::Integer(&mut self.track_number),
            "duration" => SlotMut::Integer(&mut self.duration),
            "album" => SlotMut::Text(&mut self.album),
            "cover_url" => SlotMut::Text(&mut self.cover_url),
            _ => return None,
        })
    }
}

/// A node in the entity graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thing {
    Artist(Artist),
    Album(Album),
    Track(Track),
}

impl Thing {
    pub fn kind(&self) -> ThingKind {
        match self {
            Thing::Artist(_) => ThingKind::Artist,
            Thing::Album(_) => ThingKind::Album,
            Thing::Track(_) => ThingKind::Track,
        }
    }

    /// Extra source URLs attached by the caller.
    pub fn sources(&self) -> &[String] {
        match self {
            Thing::Artist(artist) => &artist.sources,
            Thing::Album(album) => &album.sources,
            Thing::Track(track) => &track.sources,
        }
    }

    /// The `url` attribute (when known) followed by [`Thing::sources`].
    pub fn source_urls(&self) -> impl Iterator<Item = &str> {
        let url = match self {
            Thing::Artist(artist) => artist.url.as_deref(),
            Thing::Album(album) => album.url.as_deref(),
            Thing::Track(track) => track.url.as_deref(),
        };
        url.into_iter()
            .chain(self.sources().iter().map(String::as_str))
    }

    pub fn add_source(&mut self, url: impl Into<String>) {
        let url = url.into();
        let sources = match self {
            Thing::Artist(artist) => &mut artist.sources,
            Thing::Album(album) => &mut album.sources,
            Thing::Track(track) => &mut track.sources,
        };
        if !sources.contains(&url) {
            sources.push(url);
        }
    }

    fn slot(&self, attr: &str) -> Option<Slot<'_>> {
        match self {
            Thing::Artist(artist) => artist.slot(attr),
            Thing::Album(album) => album.slot(attr),
            Thing::Track(track) => track.slot(attr),
        }
    }

    fn slot_mut(&mut self, attr: &str) -> Option<SlotMut<'_>> {
        match self {
            Thing::Artist(artist) => artist.slot_mut(attr),
            Thing::Album(album) => album.slot_mut(attr),
            Thing::Track(track) => track.slot_mut(attr),
        }
    }

    /// Whether `attr` is present. Unknown attribute names are never known.
    pub fn is_known(&self, attr: &str) -> bool {
        match self.slot(attr) {
            Some(Slot::Text(value)) => value.is_some(),
            Some(Slot::Integer(value)) => value.is_some(),
            Some(Slot::Things(children)) => children.is_some(),
            None => false,
        }
    }

    /// Read a scalar attribute. Collections and unknown names yield `None`.
    pub fn value(&self, attr: &str) -> Option<Value> {
        match self.slot(attr)? {
            Slot::Text(value) => value.clone().map(Value::Text),
            Slot::Integer(value) => value.map(Value::Integer),
            Slot::Things(_) => None,
        }
    }

    /// Children of a known collection attribute.
    pub fn children(&self, attr: &str) -> Option<&[Thing]> {
        match self.slot(attr)? {
            Slot::Things(children) => children.as_deref(),
            _ => None,
        }
    }

    pub fn children_mut(&mut self, attr: &str) -> Option<&mut Vec<Thing>> {
        match self.slot_mut(attr)? {
            SlotMut::Things(children) => children.as_mut(),
            _ => None,
        }
    }

    /// Set a scalar attribute if, and only if, it is currently unknown.
    ///
    /// Returns whether the Thing changed. Empty values are ignored.
    pub fn fill(&mut self, attr: &str, value: Value) -> Result<bool, ModelError> {
        let kind = self.kind();
        let slot = self
            .slot_mut(attr)
            .ok_or_else(|| ModelError::UnknownAttribute {
                kind,
                attr: attr.to_string(),
            })?;

        if let SlotMut::Things(_) = slot {
            return Err(ModelError::NotAScalar {
                kind,
                attr: attr.to_string(),
            });
        }

        if value.is_empty() {
            return Ok(false);
        }

        match (slot, value) {
            (SlotMut::Text(target), Value::Text(text)) => {
                Ok(fill_absent(target, text.trim().to_string()))
            }
            (SlotMut::Integer(target), Value::Integer(n)) => Ok(fill_absent(target, n)),
            (SlotMut::Integer(_), _) => Err(ModelError::TypeMismatch {
                kind,
                attr: attr.to_string(),
                expected: "an integer",
            }),
            _ => Err(ModelError::TypeMismatch {
                kind,
                attr: attr.to_string(),
                expected: "text",
            }),
        }
    }

    /// Make a collection attribute known with the given children, if it is
    /// currently unknown. Returns whether the Thing changed.
    pub fn adopt(&mut self, attr: &str, children: Vec<Thing>) -> Result<bool, ModelError> {
        let kind = self.kind();
        match self.slot_mut(attr) {
            Some(SlotMut::Things(target)) => Ok(fill_absent(target, children)),
            Some(_) => Err(ModelError::NotACollection {
                kind,
                attr: attr.to_string(),
            }),
            None => Err(ModelError::UnknownAttribute {
                kind,
                attr: attr.to_string(),
            }),
        }
    }

    /// Whether every segment of `path` is known here and below.
    pub fn satisfied(&self, path: &AttrPath) -> bool {
        satisfied(self, path)
    }
}

impl From<Artist> for Thing {
    fn from(artist: Artist) -> Self {
        Thing::Artist(artist)
    }
}

impl From<Album> for Thing {
    fn from(album: Album) -> Self {
        Thing::Album(album)
    }
}

impl From<Track> for Thing {
    fn from(track: Track) -> Self {
        Thing::Track(track)
    }
}

fn fill_absent<T>(target: &mut Option<T>, value: T) -> bool {
    if target.is_some() {
        return false;
    }
    *target = Some(value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_is_distinct_from_empty() {
        let mut thing = Thing::from(Album::new().with_tracks(vec![]));
        assert!(thing.is_known("tracks"));
        assert_eq!(thing.children("tracks").map(<[Thing]>::len), Some(0));
        assert!(!thing.is_known("name"));

        thing.fill("name", Value::from("")).unwrap();
        assert!(!thing.is_known("name"), "blank text is not a value");
    }

    #[test]
    fn test_fill_never_overwrites() {
        let mut thing = Thing::from(Track::new().with_name("Original"));
        let changed = thing.fill("name", Value::from("Replacement")).unwrap();
        assert!(!changed);
        assert_eq!(thing.value("name"), Some(Value::from("Original")));

        assert!(thing.fill("duration", Value::from(180i64)).unwrap());
        assert_eq!(thing.value("duration"), Some(Value::Integer(180)));
    }

    #[test]
    fn test_fill_rejects_wrong_shape() {
        let mut thing = ThingKind::Track.new_thing();
        let err = thing.fill("duration", Value::from("three minutes")).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));

        let mut album = ThingKind::Album.new_thing();
        let err = album.fill("tracks", Value::from("x")).unwrap_err();
        assert!(matches!(err, ModelError::NotAScalar { .. }));

        let err = album.fill("duration", Value::from(1i64)).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownAttribute {
                kind: ThingKind::Album,
                attr: "duration".to_string()
            }
        );
    }

    #[test]
    fn test_adopt_only_when_unknown() {
        let mut album = ThingKind::Album.new_thing();
        assert!(album.adopt("tracks", vec![ThingKind::Track.new_thing()]).unwrap());
        assert!(!album.adopt("tracks", vec![]).unwrap());
        assert_eq!(album.children("tracks").unwrap().len(), 1);
        assert!(album.adopt("name", vec![]).is_err());
    }

    #[test]
    fn test_source_urls_prefers_url_attribute() {
        let mut thing = Thing::from(Album::new().with_url("https://a.bandcamp.com/album/x"));
        thing.add_source("https://mirror.example/x");
        thing.add_source("https://mirror.example/x");

        let urls: Vec<_> = thing.source_urls().collect();
        assert_eq!(
            urls,
            vec!["https://a.bandcamp.com/album/x", "https://mirror.example/x"]
        );
    }

    #[test]
    fn test_check_path() {
        let ok = AttrPath::parse("albums.tracks.duration").unwrap();
        assert!(ThingKind::Artist.check_path(&ok).is_ok());
        let singles = AttrPath::parse("singles.duration").unwrap();
        assert!(ThingKind::Artist.check_path(&singles).is_ok());

        let through_scalar = AttrPath::parse("name.length").unwrap();
        assert!(matches!(
            ThingKind::Album.check_path(&through_scalar),
            Err(ModelError::NotACollection { .. })
        ));

        let wrong_child = AttrPath::parse("tracks.release_date").unwrap();
        assert_eq!(
            ThingKind::Album.check_path(&wrong_child),
            Err(ModelError::UnknownAttribute {
                kind: ThingKind::Track,
                attr: "release_date".to_string()
            })
        );
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Album".parse::<ThingKind>().unwrap(), ThingKind::Album);
        assert!("playlist".parse::<ThingKind>().is_err());
    }

    #[test]
    fn test_value_display() {
        let value = Value::from(vec!["T1", "T2"]);
        assert_eq!(value.to_string(), "[T1, T2]");
        assert!(Value::List(vec![]).is_empty());
        assert!(!Value::Integer(0).is_empty());
    }
}
