//! Domain models for the Spine Directory lookup service.

mod config;
mod entry;
mod key;
mod record;

pub mod duration;

pub use config::{AppConfig, CacheConfig, DirectoryConfig, DirectoryMode, ServerConfig};
pub use entry::{attr, RawDirectoryEntry};
pub use key::LookupKey;
pub use record::{AckRequested, DuplicateElimination, RoutingReliabilityRecord, SyncReplyMode};
