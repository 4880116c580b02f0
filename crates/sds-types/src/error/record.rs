//! Directory data-quality errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Faults in the directory data itself.
///
/// These are not transient: they require operator intervention on the
/// directory side. The offending attribute name and raw value are carried so
/// the fault can be diagnosed from logs without re-querying the directory.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RecordError {
    /// An attribute is present but its value is not parseable.
    ///
    /// Reliability-affecting attributes (ack, duplicate elimination, retry
    /// settings) are never coerced to a default when unparseable — a wrong
    /// default risks duplicate or lost messages downstream.
    #[error("Malformed attribute {attribute}: {value:?}")]
    MalformedAttribute { attribute: String, value: String },

    /// A required attribute is missing from the directory entry.
    #[error("Incomplete directory entry: missing {attribute}")]
    IncompleteDirectoryEntry { attribute: String },
}

impl RecordError {
    /// The attribute the fault was detected on.
    pub fn attribute(&self) -> &str {
        match self {
            Self::MalformedAttribute { attribute, .. }
            | Self::IncompleteDirectoryEntry { attribute } => attribute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_accessor() {
        let err = RecordError::MalformedAttribute {
            attribute: "nhsMHSAckRequested".to_string(),
            value: "sometimes".to_string(),
        };
        assert_eq!(err.attribute(), "nhsMHSAckRequested");
    }
}
