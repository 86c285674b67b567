//! Pending holding area for shards that arrive before the host is ready.
use std::collections::VecDeque;

use docshard_core::{PendingPolicy, ShardMapping};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct PendingArea {
    policy: PendingPolicy,
    shards: VecDeque<ShardMapping>,
}

impl PendingArea {
    pub fn new(policy: PendingPolicy) -> Self {
        Self {
            policy,
            shards: VecDeque::new(),
        }
    }

    pub fn policy(&self) -> PendingPolicy {
        self.policy
    }

    /// Buffers a shard. Under [`PendingPolicy::SingleSlot`] the previous
    /// occupant is dropped and logged.
    pub fn store(&mut self, shard: ShardMapping) {
        if self.policy == PendingPolicy::SingleSlot {
            if let Some(old) = self.shards.pop_front() {
                let dropped: Vec<&str> = old.library_names().collect();
                warn!(
                    capability = %old.capability,
                    libraries = ?dropped,
                    "single-slot holding area overwritten, earlier shard dropped"
                );
            }
        }

        self.shards.push_back(shard);
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShardMapping> {
        self.shards.iter()
    }

    /// Consumes the area, yielding shards in arrival order.
    pub fn into_shards(self) -> Vec<ShardMapping> {
        self.shards.into()
    }
}

impl Default for PendingArea {
    fn default() -> Self {
        Self::new(PendingPolicy::default())
    }
}
