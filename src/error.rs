//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the application.
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`QueryError`]) for detailed handling
//! - All errors implement `std::error::Error` for compatibility
//!
//! Provider failures normally never reach this level: an investigation turns
//! them into diagnostics. They appear here only when a provider is built
//! (e.g. the HTTP client fails to initialise).
//!
//! # Example
//!
//! ```ignore
//! use art_secretary::error::{Error, Result};
//!
//! fn root_for(url: &str) -> Result<Thing> {
//!     let line = QueryLine::new(ThingKind::Album, "name")?; // QueryError converts
//!     let config = config::load_from(path)?;                // ConfigError converts
//!     Ok(thing)
//! }
//! ```

use crate::config::ConfigError;
use crate::model::ModelError;
use crate::provider::ProviderError;
use crate::secretary::QueryError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Entity or path error
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Malformed query
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Provider construction error
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A URL that no provider recognises
    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an unsupported URL error.
    pub fn unsupported_url(url: impl Into<String>) -> Self {
        Self::UnsupportedUrl(url.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, QueryError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Query(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}
