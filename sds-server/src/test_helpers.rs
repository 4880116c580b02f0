//! Shared fixtures for server tests.

use std::collections::HashMap;
use std::sync::Arc;

use sds_core::{LookupService, StaticDirectoryClient};
use sds_types::models::{attr, AppConfig, LookupKey, RawDirectoryEntry};

use crate::state::AppState;

pub const ORG_CODE: &str = "R8008";
pub const SERVICE_ID: &str = "urn:nhs:names:services:psis:REPC_IN150016UK05";
pub const AMBIGUOUS_ORG_CODE: &str = "R9999";

pub fn raw_entry(end_point: &str, unique_identifier: &str) -> RawDirectoryEntry {
    let pairs: &[(&str, &str)] = &[
        (attr::END_POINT, end_point),
        (attr::ACK_REQUESTED, "always"),
        (attr::DUPLICATE_ELIMINATION, "always"),
        (attr::SYNC_REPLY_MODE, "MSHSignalsOnly"),
        (attr::PERSIST_DURATION, "PT5M"),
        (attr::RETRIES, "2"),
        (attr::RETRY_INTERVAL, "PT1M"),
        (attr::PARTY_KEY, "R8008-0000806"),
        (attr::CPA_ID, "S20001A000182"),
        (attr::FQDN, "192.168.128.11"),
        (attr::UNIQUE_IDENTIFIER, unique_identifier),
    ];
    let attributes: HashMap<String, Vec<String>> = pairs
        .iter()
        .map(|(name, value)| (name.to_string(), vec![value.to_string()]))
        .collect();
    RawDirectoryEntry::new(attributes)
}

/// State over a static directory holding one resolvable key and one
/// ambiguous key.
pub fn test_state() -> AppState {
    let mut directory = StaticDirectoryClient::new();
    directory.insert(
        LookupKey::new(ORG_CODE, SERVICE_ID).unwrap(),
        raw_entry("https://192.168.128.11/reliablemessaging/reliablerequest", "227319907548"),
    );
    let ambiguous = LookupKey::new(AMBIGUOUS_ORG_CODE, SERVICE_ID).unwrap();
    directory.insert(ambiguous.clone(), raw_entry("https://a.example/msg", "111"));
    directory.insert(ambiguous, raw_entry("https://b.example/msg", "222"));

    let config = AppConfig::default();
    let lookup = LookupService::new(Arc::new(directory), &config.cache);
    AppState::new(lookup, config)
}
