//! Candidate resolution: many normalized records → one authoritative record.

use sds_types::error::LookupError;
use sds_types::models::{LookupKey, RoutingReliabilityRecord};

/// Select the authoritative record among the candidates a key resolved to.
///
/// Zero candidates is valid absence. Multiple candidates that agree on every
/// field except `unique_identifier` are directory duplicates: the one with
/// the lexicographically smallest identifier is returned so repeated lookups
/// stay reproducible. Candidates that genuinely differ are never guessed
/// between — guessing wrong routes a message to the wrong recipient — so the
/// lookup fails with the differing field names for diagnosis.
pub fn resolve_candidates(
    key: &LookupKey,
    mut candidates: Vec<RoutingReliabilityRecord>,
) -> Result<RoutingReliabilityRecord, LookupError> {
    if candidates.is_empty() {
        return Err(key.not_found());
    }
    if candidates.len() == 1 {
        return Ok(candidates.remove(0));
    }

    let mut differing: Vec<String> = Vec::new();
    let (first, rest) = match candidates.split_first() {
        Some(split) => split,
        None => return Err(key.not_found()),
    };
    for other in rest {
        for field in first.differing_fields(other) {
            if !differing.iter().any(|f| f == field) {
                differing.push(field.to_string());
            }
        }
    }

    if !differing.is_empty() {
        tracing::warn!(
            key = %key,
            count = candidates.len(),
            differing = ?differing,
            "irreconcilable directory entries for key"
        );
        return Err(LookupError::AmbiguousDirectoryResult {
            count: candidates.len(),
            differing,
        });
    }

    tracing::debug!(
        key = %key,
        count = candidates.len(),
        "duplicate directory entries, picking smallest uniqueIdentifier"
    );
    candidates.sort_by(|a, b| a.unique_identifier.cmp(&b.unique_identifier));
    Ok(candidates.remove(0))
}
