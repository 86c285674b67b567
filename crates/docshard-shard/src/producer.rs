//! Shard Producer: hands one shard to the page, once per execution.
use std::path::Path;

use docshard_core::{CapabilityName, DocshardError, ShardMapping};
use docshard_registry::{Handoff, PageEnvironment};
use tracing::debug;

use crate::codec;

#[derive(Debug, Clone)]
pub struct ShardProducer {
    shard: ShardMapping,
}

impl ShardProducer {
    pub fn new(shard: ShardMapping) -> Self {
        Self { shard }
    }

    pub fn from_script(capability: CapabilityName, source: &str) -> Result<Self, DocshardError> {
        Ok(Self::new(codec::parse_shard_script(capability, source)?))
    }

    pub fn from_file(path: &Path) -> Result<Self, DocshardError> {
        Ok(Self::new(codec::read_shard_file(path)?))
    }

    pub fn capability(&self) -> &CapabilityName {
        &self.shard.capability
    }

    pub fn shard(&self) -> &ShardMapping {
        &self.shard
    }

    /// Executes the shard against `env`. Running again hands off the same
    /// mapping again, which replaces the earlier contribution per library.
    pub fn run(&self, env: &PageEnvironment) -> Handoff {
        let handoff = env.handoff(self.shard.clone());
        debug!(
            capability = %self.shard.capability,
            libraries = self.shard.libraries.len(),
            entries = self.shard.entry_count(),
            ?handoff,
            "shard executed"
        );
        handoff
    }
}

impl From<ShardMapping> for ShardProducer {
    fn from(shard: ShardMapping) -> Self {
        Self::new(shard)
    }
}
