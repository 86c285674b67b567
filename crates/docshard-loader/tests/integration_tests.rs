//! Load plans replaying page load orders.

use std::path::PathBuf;

use docshard_core::{ImplementorEntry, PendingPolicy, RegistryConfig, ShardMapping};
use docshard_loader::LoadPlan;
use docshard_registry::HostState;
use docshard_shard::ShardProducer;

const DISPLAY: &str = "core::fmt::Display";

/// Generated Display shard shipped with docshard-shard
fn display_path() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    PathBuf::from(manifest_dir)
        .join("../docshard-shard/data/implementors/core/fmt/trait.Display.js")
}

fn producer(library: &str, text: &str) -> ShardProducer {
    ShardMapping::new(DISPLAY)
        .with_library(library, [ImplementorEntry::new(text)])
        .into()
}

#[test]
fn test_plan_host_first() {
    let plan = LoadPlan::new()
        .install_host()
        .shard(producer("nix", "Errno"));

    let (env, summary) = plan.run(&RegistryConfig::default());

    assert_eq!(summary.registered, 1);
    assert_eq!(summary.buffered, 0);
    assert_eq!(summary.install.drained, 0);
    assert_eq!(env.host_state(), HostState::Ready);
}

#[test]
fn test_plan_data_first_queue_vs_single_slot() {
    let plan = LoadPlan::new()
        .shard(producer("gbm", "WrongDeviceError"))
        .shard(producer("nix", "Errno"))
        .install_host();

    let (queued, summary) = plan.run(&RegistryConfig::default());
    assert_eq!(summary.buffered, 2);
    assert_eq!(summary.install.drained, 2);
    assert_eq!(queued.snapshot().libraries(DISPLAY), vec!["gbm", "nix"]);

    let (slotted, summary) = plan.run(&RegistryConfig::new(PendingPolicy::SingleSlot));
    assert_eq!(summary.install.drained, 1);
    assert_eq!(slotted.snapshot().libraries(DISPLAY), vec!["nix"]);
}

#[test]
fn test_from_files_installs_after_all_by_default() {
    let plan = LoadPlan::from_files(&[display_path()], None, false).unwrap();
    assert_eq!(plan.len(), 2);

    let (env, summary) = plan.run(&RegistryConfig::default());
    assert_eq!(summary.buffered, 1);
    assert_eq!(summary.install.drained, 1);
    assert_eq!(env.snapshot().len(), 9);
}

#[test]
fn test_from_files_install_position_clamped() {
    let plan = LoadPlan::from_files(&[display_path()], Some(10), true).unwrap();
    assert_eq!(plan.len(), 3);

    let (env, summary) = plan.run(&RegistryConfig::default());
    assert_eq!(summary.install.drained, 2);
    assert_eq!(env.snapshot().entry_count(), 70);
}

#[test]
fn test_from_files_host_first() {
    let plan = LoadPlan::from_files(&[display_path()], Some(0), false).unwrap();
    let (env, summary) = plan.run(&RegistryConfig::default());

    assert_eq!(summary.registered, 1);
    assert_eq!(env.pending_len(), 0);
    assert!(env.with_registry(|r| r.contains(DISPLAY, "wayland_commons")));
}

#[test]
fn test_from_files_reports_bad_path() {
    let missing = display_path().with_file_name("trait.Debug.js");
    let err = LoadPlan::from_files(&[missing], None, false).err().unwrap();
    assert!(format!("{:#}", err).contains("trait.Debug.js"));
}
