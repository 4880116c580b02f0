//! The normalized routing + reliability record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Whether the counterparty requests message acknowledgements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AckRequested {
    Always,
    #[default]
    Never,
    ErrorOnly,
}

impl AckRequested {
    /// Case-insensitive match against the known literal set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "error-only" => Some(Self::ErrorOnly),
            _ => None,
        }
    }
}

impl fmt::Display for AckRequested {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
            Self::ErrorOnly => write!(f, "error-only"),
        }
    }
}

/// Whether the counterparty eliminates duplicate messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateElimination {
    Always,
    #[default]
    Never,
}

impl DuplicateElimination {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

impl fmt::Display for DuplicateElimination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Synchronous-reply behaviour of the counterparty MSH.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SyncReplyMode {
    #[default]
    None,
    SignalsOnly,
    Response,
}

impl SyncReplyMode {
    /// Case-insensitive match. The live directory stores the `MSH*`
    /// spellings (`MSHSignalsOnly`), so those are accepted alongside the
    /// plain literals.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "signals-only" | "signalsonly" | "mshsignalsonly" => Some(Self::SignalsOnly),
            "response" | "mshresponse" => Some(Self::Response),
            _ => None,
        }
    }
}

impl fmt::Display for SyncReplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::None => write!(f, "none"),
            Self::SignalsOnly => write!(f, "signals-only"),
            Self::Response => write!(f, "response"),
        }
    }
}

/// The normalized output of a lookup: one endpoint plus the reliability
/// profile governing message delivery to it.
///
/// Invariants, established by the normalizer:
/// - `end_point` is a syntactically valid URL
/// - `retries > 0` implies `retry_interval` is present
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutingReliabilityRecord {
    pub end_point: String,
    pub ack_requested: AckRequested,
    pub duplicate_elimination: DuplicateElimination,
    pub sync_reply_mode: SyncReplyMode,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::duration::option_iso8601"
    )]
    pub persist_duration: Option<Duration>,
    pub retries: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::duration::option_iso8601"
    )]
    pub retry_interval: Option<Duration>,
    pub party_key: String,
    pub cpa_id: String,
    pub fqdn: String,
    /// The directory entry's own identity token. Diagnostics only — excluded
    /// from the equivalence the candidate resolver uses.
    pub unique_identifier: String,
}

impl RoutingReliabilityRecord {
    /// Names of fields on which `self` and `other` disagree, ignoring
    /// `unique_identifier`.
    ///
    /// Used by the candidate resolver both to decide whether two entries are
    /// duplicates and to report what made them irreconcilable.
    pub fn differing_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.end_point != other.end_point {
            fields.push("end_point");
        }
        if self.ack_requested != other.ack_requested {
            fields.push("ack_requested");
        }
        if self.duplicate_elimination != other.duplicate_elimination {
            fields.push("duplicate_elimination");
        }
        if self.sync_reply_mode != other.sync_reply_mode {
            fields.push("sync_reply_mode");
        }
        if self.persist_duration != other.persist_duration {
            fields.push("persist_duration");
        }
        if self.retries != other.retries {
            fields.push("retries");
        }
        if self.retry_interval != other.retry_interval {
            fields.push("retry_interval");
        }
        if self.party_key != other.party_key {
            fields.push("party_key");
        }
        if self.cpa_id != other.cpa_id {
            fields.push("cpa_id");
        }
        if self.fqdn != other.fqdn {
            fields.push("fqdn");
        }
        fields
    }

    /// Attribute-identical apart from `unique_identifier`.
    pub fn equivalent(&self, other: &Self) -> bool {
        self.differing_fields(other).is_empty()
    }
}
