//! Page Environment: the process-wide state shared by producers and the host
//!
//! One environment per hosting page, created once and never torn down.
//! Producers and the host hold clones of the same handle; every operation
//! runs to completion under the lock.

use std::sync::Arc;

use docshard_core::{RegistryConfig, ShardMapping};
use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::pending::PendingArea;
use crate::registry::GlobalRegistry;

/// Host lifecycle as seen by producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    NotReady,
    Ready,
}

/// What happened to a shard handed to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Host was ready; merged immediately
    Registered,
    /// Host not ready; held until install
    Buffered { pending: usize },
}

#[derive(Debug)]
pub(crate) enum Lifecycle {
    NotReady(PendingArea),
    Ready,
}

#[derive(Debug)]
pub(crate) struct PageState {
    pub(crate) lifecycle: Lifecycle,
    pub(crate) registry: GlobalRegistry,
}

#[derive(Debug, Clone)]
pub struct PageEnvironment {
    state: Arc<Mutex<PageState>>,
}

impl PageEnvironment {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(PageState {
                lifecycle: Lifecycle::NotReady(PendingArea::new(config.pending_policy)),
                registry: GlobalRegistry::new(),
            })),
        }
    }

    pub fn host_state(&self) -> HostState {
        match self.lock().lifecycle {
            Lifecycle::NotReady(_) => HostState::NotReady,
            Lifecycle::Ready => HostState::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.host_state() == HostState::Ready
    }

    /// Producer entry point: register directly when the host is ready,
    /// otherwise park the shard in the holding area.
    pub fn handoff(&self, shard: ShardMapping) -> Handoff {
        let mut guard = self.lock();
        let state = &mut *guard;

        match &mut state.lifecycle {
            Lifecycle::Ready => {
                debug!(capability = %shard.capability, "host ready, registering shard");
                state.registry.merge(shard);
                Handoff::Registered
            }
            Lifecycle::NotReady(pending) => {
                debug!(capability = %shard.capability, "host not ready, holding shard");
                pending.store(shard);
                Handoff::Buffered {
                    pending: pending.len(),
                }
            }
        }
    }

    /// Shards still waiting for the host. Always zero once ready.
    pub fn pending_len(&self) -> usize {
        match &self.lock().lifecycle {
            Lifecycle::NotReady(pending) => pending.len(),
            Lifecycle::Ready => 0,
        }
    }

    /// Copies of the held shards, in arrival order.
    pub fn pending_shards(&self) -> Vec<ShardMapping> {
        match &self.lock().lifecycle {
            Lifecycle::NotReady(pending) => pending.iter().cloned().collect(),
            Lifecycle::Ready => Vec::new(),
        }
    }

    /// Runs `f` on a copy of the registry. The lock is released before `f`
    /// runs, so `f` may hand off shards or take snapshots itself.
    pub fn with_registry<R>(&self, f: impl FnOnce(&GlobalRegistry) -> R) -> R {
        let registry = self.snapshot();
        f(&registry)
    }

    pub fn snapshot(&self) -> GlobalRegistry {
        self.lock().registry.clone()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock()
    }
}

impl Default for PageEnvironment {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}
