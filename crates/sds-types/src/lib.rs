//! # SDS Types
//!
//! Core types, models, and error definitions for the Spine Directory lookup
//! service.
//!
//! This crate provides the foundational type system for the SDS workspace:
//!
//! - **`error`** - Typed error hierarchy for directory, record-quality, and
//!   lookup faults
//! - **`models`** - Domain models (LookupKey, RawDirectoryEntry,
//!   RoutingReliabilityRecord, AppConfig)
//!
//! ## Architecture Role
//!
//! `sds-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          sds-types (this crate)
//!                │
//!                ▼
//!            sds-core
//!                │
//!                ▼
//!            sds-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for API responses
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{DirectoryError, LookupError, RecordError, Result};

// Re-export core model types
pub use models::{
    AckRequested, AppConfig, CacheConfig, DirectoryConfig, DirectoryMode, DuplicateElimination,
    LookupKey, RawDirectoryEntry, RoutingReliabilityRecord, ServerConfig, SyncReplyMode,
};
