//! Raw directory entries as returned by the backing directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directory attribute names used by the lookup engine.
///
/// These are the names the backing directory actually stores, passed through
/// verbatim from the LDAP-style schema.
pub mod attr {
    pub const END_POINT: &str = "nhsMHSEndPoint";
    pub const ACK_REQUESTED: &str = "nhsMHSAckRequested";
    pub const DUPLICATE_ELIMINATION: &str = "nhsMHSDuplicateElimination";
    pub const SYNC_REPLY_MODE: &str = "nhsMHSSyncReplyMode";
    pub const PERSIST_DURATION: &str = "nhsMHSPersistDuration";
    pub const RETRIES: &str = "nhsMHSRetries";
    pub const RETRY_INTERVAL: &str = "nhsMHSRetryInterval";
    pub const PARTY_KEY: &str = "nhsMHSPartyKey";
    pub const CPA_ID: &str = "nhsMhsCPAId";
    pub const FQDN: &str = "nhsMhsFQDN";
    pub const UNIQUE_IDENTIFIER: &str = "uniqueIdentifier";
}

/// One raw attribute-set entry, exactly as returned by the directory.
///
/// Every attribute value is an ordered sequence: the directory client
/// canonicalizes scalar-vs-list raw values at its boundary, so nothing
/// downstream special-cases the two shapes. Value order within an attribute
/// is the directory-returned order and is preserved verbatim — the normalizer
/// relies on it for endpoint selection. Entries are never mutated after
/// retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RawDirectoryEntry {
    attributes: HashMap<String, Vec<String>>,
}

impl RawDirectoryEntry {
    pub fn new(attributes: HashMap<String, Vec<String>>) -> Self {
        Self { attributes }
    }

    /// First value of an attribute in directory order, if present and
    /// non-empty.
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .get(attribute)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of an attribute in directory order.
    pub fn values(&self, attribute: &str) -> &[String] {
        self.attributes
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes
            .get(attribute)
            .is_some_and(|values| !values.is_empty())
    }
}
