//! # SDS Core
//!
//! The lookup-and-normalization engine for the Spine Directory service:
//!
//! - **`directory`** - the directory client boundary (trait, REST gateway
//!   adapter, in-memory fixture adapter)
//! - **`lookup`** - attribute normalizer, candidate resolver, lookup cache,
//!   and the `LookupService` façade
//!
//! The single public operation is
//! [`LookupService::resolve`](lookup::LookupService::resolve): given an
//! organisation code and a service id it returns the
//! [`RoutingReliabilityRecord`](sds_types::RoutingReliabilityRecord) a
//! messaging client must use to reach that counterparty.

pub mod directory;
pub mod lookup;

pub use directory::{build_directory_client, DirectoryClient, RestDirectoryClient, StaticDirectoryClient};
pub use lookup::{LookupCache, LookupService};
