//! Property tests: no loss and load-order independence.

use std::collections::HashMap;

use docshard_core::{ImplementorEntry, ShardMapping};
use docshard_registry::{PageEnvironment, RegistryHost};
use proptest::prelude::*;

const LIBRARIES: &[&str] = &["calloop", "dbus", "gbm", "nix", "slog", "udev"];

const CAPABILITIES: &[&str] = &["core::fmt::Display", "core::fmt::Debug"];

fn arb_shard() -> impl Strategy<Value = ShardMapping> {
    (
        prop::sample::select(CAPABILITIES),
        prop::sample::select(LIBRARIES),
        prop::collection::vec("[A-Z][a-z]{1,8}", 0..4),
    )
        .prop_map(|(capability, library, texts)| {
            ShardMapping::new(capability)
                .with_library(library, texts.into_iter().map(ImplementorEntry::new))
        })
}

/// Runs `shards` in order, installing the host after the first `install_at`.
fn load(shards: &[ShardMapping], install_at: usize) -> PageEnvironment {
    let env = PageEnvironment::default();
    let host = RegistryHost::new(env.clone());

    for (i, shard) in shards.iter().enumerate() {
        if i == install_at {
            host.install();
        }
        env.handoff(shard.clone());
    }
    if install_at >= shards.len() {
        host.install();
    }
    env
}

/// Expected content: the last shard to run for each (capability, library) wins.
fn last_writes(shards: &[ShardMapping]) -> HashMap<(String, String), Vec<ImplementorEntry>> {
    let mut expected = HashMap::new();
    for shard in shards {
        for (library, entries) in &shard.libraries {
            let key = (shard.capability.as_str().to_string(), library.clone());
            expected.insert(key, entries.clone());
        }
    }
    expected
}

proptest! {
    /// Every library produced ends up in the registry with its last entries.
    #[test]
    fn prop_no_loss(shards in prop::collection::vec(arb_shard(), 0..12), install_at in 0usize..14) {
        let env = load(&shards, install_at);
        let expected = last_writes(&shards);
        let registry = env.snapshot();

        prop_assert_eq!(registry.len(), expected.len());
        for ((capability, library), entries) in &expected {
            prop_assert_eq!(registry.get(capability, library), Some(entries.as_slice()));
        }
        prop_assert_eq!(env.pending_len(), 0);
    }

    /// Where the host installs does not change the final content.
    #[test]
    fn prop_install_position_is_irrelevant(
        shards in prop::collection::vec(arb_shard(), 0..12),
        a in 0usize..14,
        b in 0usize..14,
    ) {
        prop_assert_eq!(load(&shards, a).snapshot(), load(&shards, b).snapshot());
    }
}
