//! Registry Host: install, drain and register
use docshard_core::ShardMapping;
use tracing::{debug, info, warn};

use crate::environment::{Handoff, Lifecycle, PageEnvironment};

/// Result of [`RegistryHost::install`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Held shards merged during install
    pub drained: usize,
    /// Install had already happened; nothing was done
    pub already_installed: bool,
}

/// Owner of the page's registry. Producers never talk to it directly; they
/// go through the shared [`PageEnvironment`].
#[derive(Debug, Clone)]
pub struct RegistryHost {
    env: PageEnvironment,
}

impl RegistryHost {
    pub fn new(env: PageEnvironment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &PageEnvironment {
        &self.env
    }

    /// Marks the host ready and drains the holding area in arrival order.
    ///
    /// Both steps happen in one critical section, so a handoff can never land
    /// between them: everything before install is drained, everything after
    /// registers directly.
    pub fn install(&self) -> InstallReport {
        let mut state = self.env.lock();

        let pending = match std::mem::replace(&mut state.lifecycle, Lifecycle::Ready) {
            Lifecycle::Ready => {
                warn!("registry host already installed, ignoring");
                return InstallReport {
                    drained: 0,
                    already_installed: true,
                };
            }
            Lifecycle::NotReady(pending) => pending,
        };

        let shards = pending.into_shards();
        let drained = shards.len();
        for shard in shards {
            debug!(capability = %shard.capability, "draining held shard");
            state.registry.merge(shard);
        }

        info!(
            drained,
            libraries = state.registry.len(),
            "registry host installed"
        );

        InstallReport {
            drained,
            already_installed: false,
        }
    }

    /// The host's registration entry point. Before [`RegistryHost::install`]
    /// it holds the shard like any early producer, so a later registration
    /// is never overwritten by an older held shard during the drain.
    pub fn register(&self, shard: ShardMapping) -> Handoff {
        self.env.handoff(shard)
    }
}
