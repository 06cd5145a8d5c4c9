//! Art Secretary - fills gaps in artist, album and track records.
//!
//! A [`Secretary`] holds a declarative query ("albums need a name, their
//! tracks need a duration") and a set of registered providers. Investigating a
//! root entity walks its graph depth-first, asks providers only for what is
//! still missing, and merges their answers back into the graph.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod secretary;
#[cfg(test)]
pub mod test_utils;

pub use model::{AttrPath, Thing, ThingKind, ThingLocation, Value};
pub use provider::{Capability, Provider, ProviderError, ProviderResult};
pub use secretary::{
    CollisionPolicy, Diagnostic, Investigation, QueryError, QueryLine, Report, ResolutionEvent,
    Secretary,
};
