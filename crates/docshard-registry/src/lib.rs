//! Docshard Registry: deferred, load-order independent shard registration
//!
//! A trait page loads its implementor shards in whatever order the browser
//! (or any other loader) decides. Some shards run before the page's registry
//! host is ready, some after. This crate makes the two orders equivalent.
//!
//! # Flow
//!
//! ```text
//! ShardProducer ──handoff──► PageEnvironment ──Ready──► GlobalRegistry
//!                                 │                          ▲
//!                              NotReady                      │
//!                                 ▼                          │
//!                            PendingArea ──── install ───────┘
//! ```
//!
//! # Example
//!
//! ```
//! use docshard_core::{ImplementorEntry, RegistryConfig, ShardMapping};
//! use docshard_registry::{Handoff, PageEnvironment, RegistryHost};
//!
//! let env = PageEnvironment::new(&RegistryConfig::default());
//!
//! // A shard arrives before the host exists
//! let shard = ShardMapping::new("core::fmt::Display")
//!     .with_library("gbm", [ImplementorEntry::new("WrongDeviceError")]);
//! assert!(matches!(env.handoff(shard), Handoff::Buffered { .. }));
//!
//! // The host installs and drains it
//! let host = RegistryHost::new(env.clone());
//! let report = host.install();
//! assert_eq!(report.drained, 1);
//! assert!(env.with_registry(|r| r.contains("core::fmt::Display", "gbm")));
//! ```

pub mod environment;
pub mod host;
pub mod pending;
pub mod registry;

pub use environment::{Handoff, HostState, PageEnvironment};
pub use host::{InstallReport, RegistryHost};
pub use pending::PendingArea;
pub use registry::{GlobalRegistry, MergeReport};
