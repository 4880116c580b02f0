//! Typed error definitions for the Spine Directory lookup service.
//!
//! This module provides a structured error hierarchy with specific error
//! types for the two external fault domains. All errors are designed to be:
//!
//! - **Serializable** for API responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for caching/propagation policy via enum variants
//! - **Composable** via thiserror derive macros

mod directory;
mod record;

pub use directory::DirectoryError;
pub use record::RecordError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified outcome type for a lookup.
///
/// `NotFound` is a normal outcome rather than a system fault, but it travels
/// on the error side of `Result` so the cache and the HTTP boundary can treat
/// every non-success uniformly. The caching policy is variant-driven:
/// `NotFound` is negatively cached, all other variants are never cached.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum LookupError {
    /// Caller supplied a malformed key (empty organisation code or service id)
    #[error("Invalid lookup key: {message}")]
    InvalidKey { message: String },

    /// The directory holds no entry for this key. Valid absence, not a fault.
    #[error("No endpoint registered for organisation {organisation_code}, service {service_id}")]
    NotFound {
        organisation_code: String,
        service_id: String,
    },

    /// Wraps an infrastructure fault from the directory backend
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Wraps a data-quality fault found while normalizing an entry
    #[error("Directory data error: {0}")]
    Record(#[from] RecordError),

    /// Multiple directory entries exist for the key and they genuinely
    /// differ. Guessing would risk routing a message to the wrong recipient,
    /// so the differing field names are surfaced for diagnosis instead.
    #[error("Ambiguous directory result: {count} candidates differ in [{}]", differing.join(", "))]
    AmbiguousDirectoryResult {
        count: usize,
        differing: Vec<String>,
    },
}

impl LookupError {
    /// Whether the outcome may be cached by the lookup cache.
    ///
    /// Only valid absence is cacheable; faults must be re-tried on the next
    /// call.
    pub fn is_cacheable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get HTTP status code for this outcome.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidKey { .. } => 400,
            Self::NotFound { .. } => 404,
            // Infrastructure and data-quality faults are server-side, not
            // client errors.
            Self::Directory(_) | Self::Record(_) | Self::AmbiguousDirectoryResult { .. } => 500,
        }
    }
}

/// Standard Result type using LookupError.
pub type Result<T> = std::result::Result<T, LookupError>;
