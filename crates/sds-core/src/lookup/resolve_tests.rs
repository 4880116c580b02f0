//! Tests for candidate resolution

use std::time::Duration;

use sds_types::error::LookupError;
use sds_types::models::{
    AckRequested, DuplicateElimination, LookupKey, RoutingReliabilityRecord, SyncReplyMode,
};

use super::resolve_candidates;

fn key() -> LookupKey {
    LookupKey::new("R8008", "urn:nhs:names:services:psis").unwrap()
}

fn record(unique_identifier: &str) -> RoutingReliabilityRecord {
    RoutingReliabilityRecord {
        end_point: "https://a.example/msg".to_string(),
        ack_requested: AckRequested::Always,
        duplicate_elimination: DuplicateElimination::Never,
        sync_reply_mode: SyncReplyMode::SignalsOnly,
        persist_duration: Some(Duration::from_secs(300)),
        retries: 2,
        retry_interval: Some(Duration::from_secs(60)),
        party_key: "R8008-0000806".to_string(),
        cpa_id: "S20001A000182".to_string(),
        fqdn: "a.example".to_string(),
        unique_identifier: unique_identifier.to_string(),
    }
}

#[test]
fn test_zero_candidates_is_not_found() {
    let err = resolve_candidates(&key(), vec![]).unwrap_err();
    assert!(matches!(err, LookupError::NotFound { organisation_code, .. }
        if organisation_code == "R8008"));
}

#[test]
fn test_single_candidate_passes_through() {
    let record = record("227319907548");
    let resolved = resolve_candidates(&key(), vec![record.clone()]).unwrap();
    assert_eq!(resolved, record);
}

#[test]
fn test_duplicates_pick_smallest_unique_identifier() {
    let candidates = vec![record("500"), record("123"), record("321")];
    // Deterministic across repeated calls
    for _ in 0..3 {
        let resolved = resolve_candidates(&key(), candidates.clone()).unwrap();
        assert_eq!(resolved.unique_identifier, "123");
    }
}

#[test]
fn test_differing_endpoints_are_ambiguous() {
    let a = record("111");
    let mut b = record("222");
    b.end_point = "https://b.example/msg".to_string();

    let err = resolve_candidates(&key(), vec![a, b]).unwrap_err();
    assert_eq!(
        err,
        LookupError::AmbiguousDirectoryResult {
            count: 2,
            differing: vec!["end_point".to_string()],
        }
    );
}

#[test]
fn test_ambiguity_reports_every_differing_field_once() {
    let a = record("111");
    let mut b = record("222");
    b.cpa_id = "OTHER".to_string();
    let mut c = record("333");
    c.cpa_id = "THIRD".to_string();
    c.retries = 5;

    let err = resolve_candidates(&key(), vec![a, b, c]).unwrap_err();
    assert_eq!(
        err,
        LookupError::AmbiguousDirectoryResult {
            count: 3,
            differing: vec!["cpa_id".to_string(), "retries".to_string()],
        }
    );
}
