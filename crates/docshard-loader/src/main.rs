//! Binary entrypoint: load shard files and print the merged registry.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use docshard_core::{PendingPolicy, RegistryConfig};
use docshard_loader::LoadPlan;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter override, e.g. `DOCSHARD_LOG=docshard_registry=debug`
const LOG_ENV: &str = "DOCSHARD_LOG";

#[derive(Parser, Debug)]
#[command(name = "docshard-loader")]
#[command(about = "Merge implementor shards the way a doc page would")]
struct Args {
    /// Shard files (`.../implementors/<path>/trait.<Name>.js`), in load order
    #[arg(value_name = "SHARD")]
    shards: Vec<PathBuf>,

    /// Number of shards that load before the registry host installs
    #[arg(long, value_name = "N")]
    install_at: Option<usize>,

    /// Load the embedded core::fmt::Display shard first
    #[arg(long)]
    builtin_display: bool,

    /// Holding policy for early shards (overrides DOCSHARD_PENDING_POLICY)
    #[arg(long, value_name = "POLICY")]
    pending_policy: Option<PendingPolicy>,

    /// Pretty-print the registry JSON
    #[arg(long)]
    pretty: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let mut config = RegistryConfig::from_env()?;
    if let Some(policy) = args.pending_policy {
        config.pending_policy = policy;
    }

    let plan = LoadPlan::from_files(&args.shards, args.install_at, args.builtin_display)?;
    info!(steps = plan.len(), pending_policy = %config.pending_policy, "starting page load");

    let (env, _summary) = plan.run(&config);

    let registry = env.with_registry(|r| r.to_json())?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&registry)
    } else {
        serde_json::to_string(&registry)
    }
    .context("rendering registry")?;
    println!("{}", rendered);

    Ok(())
}

fn setup_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
