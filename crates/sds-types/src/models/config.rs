//! Service configuration model.

use serde::{Deserialize, Serialize};

/// Which directory client implementation to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryMode {
    /// Query the directory's HTTP gateway
    #[default]
    Rest,
    /// Serve entries from a local JSON fixture file
    Static,
}

/// Directory backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub mode: DirectoryMode,
    /// Base URL of the directory gateway
    pub base_url: String,
    /// Upper bound on a single directory query
    pub timeout_secs: u64,
    /// Fixture file for `static` mode
    #[serde(default)]
    pub fixture_path: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            mode: DirectoryMode::Rest,
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 3,
            fixture_path: None,
        }
    }
}

/// Lookup cache tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long a resolved record is served without re-querying the directory
    pub ttl_secs: u64,
    /// How long a not-found outcome is remembered (negative caching)
    pub negative_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            negative_ttl_secs: 60,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub server: ServerConfig,
}
