//! Lookup key: the (organisation code, service id) pair.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LookupError;

/// Compound key identifying a messaging counterparty and the service it
/// supports.
///
/// Comparison is case-sensitive exact match on both fields. Construction
/// validates that both fields are non-empty; the fields are private so a
/// validated key cannot be bypassed with a struct literal. Used as the cache
/// key and the directory query key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LookupKey {
    organisation_code: String,
    service_id: String,
}

impl LookupKey {
    /// Build a key, rejecting empty or whitespace-only fields with
    /// `InvalidKey`.
    pub fn new(organisation_code: &str, service_id: &str) -> Result<Self, LookupError> {
        if organisation_code.trim().is_empty() {
            return Err(LookupError::InvalidKey {
                message: "organisation code must not be empty".to_string(),
            });
        }
        if service_id.trim().is_empty() {
            return Err(LookupError::InvalidKey {
                message: "service id must not be empty".to_string(),
            });
        }
        Ok(Self {
            organisation_code: organisation_code.to_string(),
            service_id: service_id.to_string(),
        })
    }

    pub fn organisation_code(&self) -> &str {
        &self.organisation_code
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// `NotFound` outcome for this key.
    pub fn not_found(&self) -> LookupError {
        LookupError::NotFound {
            organisation_code: self.organisation_code.clone(),
            service_id: self.service_id.clone(),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organisation_code, self.service_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_key() {
        let key = LookupKey::new("R8008", "urn:nhs:names:services:psis").unwrap();
        assert_eq!(key.organisation_code(), "R8008");
        assert_eq!(key.service_id(), "urn:nhs:names:services:psis");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            LookupKey::new("", "svc"),
            Err(LookupError::InvalidKey { .. })
        ));
        assert!(matches!(
            LookupKey::new("R8008", "   "),
            Err(LookupError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let lower = LookupKey::new("r8008", "svc").unwrap();
        let upper = LookupKey::new("R8008", "svc").unwrap();
        assert_ne!(lower, upper);
    }
}
