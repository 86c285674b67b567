//! Docshard Core: data model, configuration and errors
//!
//! Shared vocabulary for the implementor-shard pipeline. A documentation page
//! for a trait loads one generated shard per trait; each shard lists, per
//! library, the types implementing that trait. The registry crate merges
//! those shards; this crate only describes them.

pub mod config;
pub mod data_model;
pub mod error;

pub use config::{PendingPolicy, RegistryConfig, PENDING_POLICY_ENV};
pub use data_model::{CapabilityName, ImplementorEntry, LibraryImplementors, LibraryName, ShardMapping};
pub use error::DocshardError;

/// Name of the directory that roots every generated shard file.
pub const IMPLEMENTORS_DIR: &str = "implementors";
