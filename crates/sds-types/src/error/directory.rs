//! Directory backend errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised at the directory client boundary.
///
/// Both variants are infrastructure faults: transient, safe to retry at the
/// caller's discretion, and never cached by the lookup cache. An absent key is
/// not an error — the client returns an empty entry list for it.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DirectoryError {
    /// Directory could not be reached (connection refused, DNS failure,
    /// gateway error).
    #[error("Directory unavailable: {message}")]
    Unavailable { message: String },

    /// Directory query exceeded the configured timeout.
    #[error("Directory query timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DirectoryError::Timeout { timeout_secs: 3 };
        assert_eq!(err.to_string(), "Directory query timed out after 3s");
    }
}
