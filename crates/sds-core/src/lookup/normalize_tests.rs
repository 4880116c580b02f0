//! Tests for attribute normalization

use std::collections::HashMap;
use std::time::Duration;

use sds_types::error::RecordError;
use sds_types::models::{attr, AckRequested, DuplicateElimination, RawDirectoryEntry, SyncReplyMode};

use super::normalize;

fn entry(pairs: &[(&str, &[&str])]) -> RawDirectoryEntry {
    let mut attributes: HashMap<String, Vec<String>> = HashMap::new();
    for (name, values) in pairs {
        attributes.insert(
            name.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        );
    }
    RawDirectoryEntry::new(attributes)
}

fn full_entry() -> RawDirectoryEntry {
    entry(&[
        (attr::END_POINT, &["https://192.168.128.11/reliablemessaging/reliablerequest"]),
        (attr::ACK_REQUESTED, &["always"]),
        (attr::DUPLICATE_ELIMINATION, &["always"]),
        (attr::SYNC_REPLY_MODE, &["MSHSignalsOnly"]),
        (attr::PERSIST_DURATION, &["PT5M"]),
        (attr::RETRIES, &["2"]),
        (attr::RETRY_INTERVAL, &["PT1M"]),
        (attr::PARTY_KEY, &["R8008-0000806"]),
        (attr::CPA_ID, &["S20001A000182"]),
        (attr::FQDN, &["192.168.128.11"]),
        (attr::UNIQUE_IDENTIFIER, &["227319907548"]),
    ])
}

#[test]
fn test_full_entry_normalizes() {
    let record = normalize(&full_entry()).unwrap();
    assert_eq!(record.end_point, "https://192.168.128.11/reliablemessaging/reliablerequest");
    assert_eq!(record.ack_requested, AckRequested::Always);
    assert_eq!(record.duplicate_elimination, DuplicateElimination::Always);
    assert_eq!(record.sync_reply_mode, SyncReplyMode::SignalsOnly);
    assert_eq!(record.persist_duration, Some(Duration::from_secs(300)));
    assert_eq!(record.retries, 2);
    assert_eq!(record.retry_interval, Some(Duration::from_secs(60)));
    assert_eq!(record.party_key, "R8008-0000806");
    assert_eq!(record.cpa_id, "S20001A000182");
    assert_eq!(record.fqdn, "192.168.128.11");
    assert_eq!(record.unique_identifier, "227319907548");
}

#[test]
fn test_normalization_is_deterministic() {
    assert_eq!(normalize(&full_entry()).unwrap(), normalize(&full_entry()).unwrap());
}

#[test]
fn test_first_endpoint_in_directory_order_wins() {
    let e = entry(&[
        (attr::END_POINT, &["https://zzz.example/msg", "https://aaa.example/msg"]),
        (attr::PARTY_KEY, &["P"]),
        (attr::CPA_ID, &["C"]),
        (attr::FQDN, &["f.example"]),
    ]);
    // Directory order, not lexicographic order
    assert_eq!(normalize(&e).unwrap().end_point, "https://zzz.example/msg");
}

#[test]
fn test_absent_reliability_attributes_default() {
    let e = entry(&[
        (attr::END_POINT, &["https://a.example/msg"]),
        (attr::PARTY_KEY, &["P"]),
        (attr::CPA_ID, &["C"]),
        (attr::FQDN, &["f.example"]),
    ]);
    let record = normalize(&e).unwrap();
    assert_eq!(record.ack_requested, AckRequested::Never);
    assert_eq!(record.duplicate_elimination, DuplicateElimination::Never);
    assert_eq!(record.sync_reply_mode, SyncReplyMode::None);
    assert_eq!(record.persist_duration, None);
    assert_eq!(record.retries, 0);
    assert_eq!(record.retry_interval, None);
    assert_eq!(record.unique_identifier, "");
}

#[test]
fn test_unknown_enum_literal_fails() {
    let mut pairs = full_entry_pairs();
    pairs.insert(attr::ACK_REQUESTED, vec!["sometimes"]);
    let err = normalize(&rebuild(&pairs)).unwrap_err();
    assert_eq!(
        err,
        RecordError::MalformedAttribute {
            attribute: attr::ACK_REQUESTED.to_string(),
            value: "sometimes".to_string(),
        }
    );
}

#[test]
fn test_malformed_duration_fails() {
    let mut pairs = full_entry_pairs();
    pairs.insert(attr::PERSIST_DURATION, vec!["5 minutes"]);
    let err = normalize(&rebuild(&pairs)).unwrap_err();
    assert!(matches!(err, RecordError::MalformedAttribute { attribute, .. }
        if attribute == attr::PERSIST_DURATION));
}

#[test]
fn test_malformed_retries_fails() {
    let mut pairs = full_entry_pairs();
    pairs.insert(attr::RETRIES, vec!["-1"]);
    let err = normalize(&rebuild(&pairs)).unwrap_err();
    assert!(matches!(err, RecordError::MalformedAttribute { attribute, .. }
        if attribute == attr::RETRIES));
}

#[test]
fn test_retries_without_interval_fails() {
    let mut pairs = full_entry_pairs();
    pairs.remove(attr::RETRY_INTERVAL);
    let err = normalize(&rebuild(&pairs)).unwrap_err();
    assert_eq!(
        err,
        RecordError::IncompleteDirectoryEntry {
            attribute: attr::RETRY_INTERVAL.to_string(),
        }
    );
}

#[test]
fn test_zero_retries_without_interval_is_fine() {
    let mut pairs = full_entry_pairs();
    pairs.insert(attr::RETRIES, vec!["0"]);
    pairs.remove(attr::RETRY_INTERVAL);
    assert_eq!(normalize(&rebuild(&pairs)).unwrap().retries, 0);
}

#[test]
fn test_missing_identity_attributes_fail() {
    for missing in [attr::PARTY_KEY, attr::CPA_ID, attr::FQDN] {
        let mut pairs = full_entry_pairs();
        pairs.remove(missing);
        let err = normalize(&rebuild(&pairs)).unwrap_err();
        assert_eq!(
            err,
            RecordError::IncompleteDirectoryEntry {
                attribute: missing.to_string(),
            }
        );
    }
}

#[test]
fn test_invalid_endpoint_url_fails() {
    let mut pairs = full_entry_pairs();
    pairs.insert(attr::END_POINT, vec!["not a url"]);
    let err = normalize(&rebuild(&pairs)).unwrap_err();
    assert!(matches!(err, RecordError::MalformedAttribute { attribute, .. }
        if attribute == attr::END_POINT));
}

#[test]
fn test_missing_endpoint_fails() {
    let mut pairs = full_entry_pairs();
    pairs.remove(attr::END_POINT);
    let err = normalize(&rebuild(&pairs)).unwrap_err();
    assert_eq!(
        err,
        RecordError::IncompleteDirectoryEntry {
            attribute: attr::END_POINT.to_string(),
        }
    );
}

// Mutable pair map for the negative tests above.

fn full_entry_pairs() -> HashMap<&'static str, Vec<&'static str>> {
    let mut pairs = HashMap::new();
    pairs.insert(attr::END_POINT, vec!["https://192.168.128.11/reliablemessaging/reliablerequest"]);
    pairs.insert(attr::ACK_REQUESTED, vec!["always"]);
    pairs.insert(attr::DUPLICATE_ELIMINATION, vec!["always"]);
    pairs.insert(attr::SYNC_REPLY_MODE, vec!["MSHSignalsOnly"]);
    pairs.insert(attr::PERSIST_DURATION, vec!["PT5M"]);
    pairs.insert(attr::RETRIES, vec!["2"]);
    pairs.insert(attr::RETRY_INTERVAL, vec!["PT1M"]);
    pairs.insert(attr::PARTY_KEY, vec!["R8008-0000806"]);
    pairs.insert(attr::CPA_ID, vec!["S20001A000182"]);
    pairs.insert(attr::FQDN, vec!["192.168.128.11"]);
    pairs.insert(attr::UNIQUE_IDENTIFIER, vec!["227319907548"]);
    pairs
}

fn rebuild(pairs: &HashMap<&str, Vec<&str>>) -> RawDirectoryEntry {
    RawDirectoryEntry::new(
        pairs
            .iter()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect(),
    )
}
