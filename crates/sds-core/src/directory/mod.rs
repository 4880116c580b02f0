//! Directory client boundary.
//!
//! The lookup engine depends only on the [`DirectoryClient`] trait; the
//! backing store (an LDAP-compatible directory behind an HTTP gateway in the
//! reference deployment) is reached through whichever adapter the
//! configuration selects.

mod memory;
mod rest;

pub use memory::StaticDirectoryClient;
pub use rest::RestDirectoryClient;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use sds_types::error::DirectoryError;
use sds_types::models::{DirectoryConfig, DirectoryMode, LookupKey, RawDirectoryEntry};

/// Read-only query capability against the backing directory.
///
/// `query` returns every raw attribute-set entry registered for the key, in
/// directory order, and an empty vec when the key is simply absent — absence
/// is not an error. Infrastructure faults surface as [`DirectoryError`].
/// A query, once issued, completes or times out on its own schedule; there is
/// no cancellation propagation from callers.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn query(&self, key: &LookupKey) -> Result<Vec<RawDirectoryEntry>, DirectoryError>;
}

/// Build the directory client selected by config.
pub fn build_directory_client(
    config: &DirectoryConfig,
) -> Result<Arc<dyn DirectoryClient>, DirectoryError> {
    match config.mode {
        DirectoryMode::Rest => Ok(Arc::new(RestDirectoryClient::new(config)?)),
        DirectoryMode::Static => {
            let path = config.fixture_path.as_deref().ok_or_else(|| {
                DirectoryError::Unavailable {
                    message: "static directory mode requires directory.fixture_path".to_string(),
                }
            })?;
            Ok(Arc::new(StaticDirectoryClient::from_fixture(path.as_ref())?))
        }
    }
}

/// Raw attribute value as carried on the wire: the directory serializes
/// single-valued attributes as a bare string and multi-valued ones as an
/// array. Canonicalized to the ordered-sequence form here, at the boundary,
/// so the normalizer never special-cases the two shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AttrValue {
    One(String),
    Many(Vec<String>),
}

impl AttrValue {
    fn into_values(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

pub(crate) fn canonicalize_entry(attributes: HashMap<String, AttrValue>) -> RawDirectoryEntry {
    RawDirectoryEntry::new(
        attributes
            .into_iter()
            .map(|(name, value)| (name, value.into_values()))
            .collect(),
    )
}
