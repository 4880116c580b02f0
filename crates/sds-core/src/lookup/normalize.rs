//! Attribute normalization: raw directory entry → typed record.

use std::time::Duration;

use url::Url;

use sds_types::error::RecordError;
use sds_types::models::duration::parse_iso8601;
use sds_types::models::{
    attr, AckRequested, DuplicateElimination, RawDirectoryEntry, RoutingReliabilityRecord,
    SyncReplyMode,
};

/// Convert one raw directory entry into a [`RoutingReliabilityRecord`].
///
/// Pure: same entry in, same record out. Absent enum attributes default
/// deterministically; present-but-unparseable values fail instead of being
/// coerced, and required identity attributes must be present. The endpoint is
/// the first value of `nhsMHSEndPoint` in directory-returned order — that
/// ordering is directory-defined and is never re-sorted here.
pub fn normalize(entry: &RawDirectoryEntry) -> Result<RoutingReliabilityRecord, RecordError> {
    let end_point = required(entry, attr::END_POINT)?;
    if Url::parse(&end_point).is_err() {
        return Err(malformed(attr::END_POINT, &end_point));
    }

    let ack_requested = enum_attr(entry, attr::ACK_REQUESTED, AckRequested::parse)?;
    let duplicate_elimination =
        enum_attr(entry, attr::DUPLICATE_ELIMINATION, DuplicateElimination::parse)?;
    let sync_reply_mode = enum_attr(entry, attr::SYNC_REPLY_MODE, SyncReplyMode::parse)?;

    let persist_duration = duration_attr(entry, attr::PERSIST_DURATION)?;
    let retry_interval = duration_attr(entry, attr::RETRY_INTERVAL)?;

    let retries = match entry.first(attr::RETRIES) {
        None => 0,
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| malformed(attr::RETRIES, raw))?,
    };
    // Retries without an interval would silently disable retry pacing
    // downstream; reject the entry instead.
    if retries > 0 && retry_interval.is_none() {
        return Err(RecordError::IncompleteDirectoryEntry {
            attribute: attr::RETRY_INTERVAL.to_string(),
        });
    }

    let party_key = required(entry, attr::PARTY_KEY)?;
    let cpa_id = required(entry, attr::CPA_ID)?;
    let fqdn = required(entry, attr::FQDN)?;

    let unique_identifier = entry
        .first(attr::UNIQUE_IDENTIFIER)
        .unwrap_or_default()
        .to_string();

    Ok(RoutingReliabilityRecord {
        end_point,
        ack_requested,
        duplicate_elimination,
        sync_reply_mode,
        persist_duration,
        retries,
        retry_interval,
        party_key,
        cpa_id,
        fqdn,
        unique_identifier,
    })
}

fn malformed(attribute: &str, value: &str) -> RecordError {
    RecordError::MalformedAttribute {
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}

fn required(entry: &RawDirectoryEntry, attribute: &str) -> Result<String, RecordError> {
    entry
        .first(attribute)
        .map(str::to_string)
        .ok_or_else(|| RecordError::IncompleteDirectoryEntry {
            attribute: attribute.to_string(),
        })
}

fn enum_attr<T: Default>(
    entry: &RawDirectoryEntry,
    attribute: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, RecordError> {
    match entry.first(attribute) {
        None => Ok(T::default()),
        Some(raw) => parse(raw).ok_or_else(|| malformed(attribute, raw)),
    }
}

fn duration_attr(
    entry: &RawDirectoryEntry,
    attribute: &str,
) -> Result<Option<Duration>, RecordError> {
    match entry.first(attribute) {
        None => Ok(None),
        Some(raw) => parse_iso8601(raw)
            .map(Some)
            .ok_or_else(|| malformed(attribute, raw)),
    }
}
