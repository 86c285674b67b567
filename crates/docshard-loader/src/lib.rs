//! Docshard Loader: plays the hosting page.
//!
//! A [`LoadPlan`] is an ordered list of shard executions with exactly one
//! host install somewhere in it. Running the plan against a fresh
//! [`PageEnvironment`] reproduces a given page load order.

use std::path::Path;

use anyhow::{Context, Result};
use docshard_core::RegistryConfig;
use docshard_registry::{Handoff, InstallReport, PageEnvironment, RegistryHost};
use docshard_shard::{display, ShardProducer};
use tracing::info;

pub enum LoadStep {
    Shard(ShardProducer),
    InstallHost,
}

#[derive(Default)]
pub struct LoadPlan {
    steps: Vec<LoadStep>,
}

/// Counters gathered while running a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub registered: usize,
    pub buffered: usize,
    pub install: InstallReport,
}

impl LoadPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shard(mut self, producer: ShardProducer) -> Self {
        self.steps.push(LoadStep::Shard(producer));
        self
    }

    pub fn install_host(mut self) -> Self {
        self.steps.push(LoadStep::InstallHost);
        self
    }

    /// Builds a plan from shard files, installing the host after the first
    /// `install_at` shards (after all of them when `None` or out of range).
    pub fn from_files<P: AsRef<Path>>(
        paths: &[P],
        install_at: Option<usize>,
        include_display: bool,
    ) -> Result<Self> {
        let mut producers = Vec::with_capacity(paths.len() + 1);
        if include_display {
            producers.push(display::display_producer().context("embedded Display shard")?);
        }
        for path in paths {
            let path = path.as_ref();
            let producer = ShardProducer::from_file(path)
                .with_context(|| format!("loading shard {}", path.display()))?;
            producers.push(producer);
        }

        let install_at = install_at.unwrap_or(producers.len()).min(producers.len());
        let mut plan = Self::new();
        for (i, producer) in producers.into_iter().enumerate() {
            if i == install_at {
                plan = plan.install_host();
            }
            plan = plan.shard(producer);
        }
        if !plan.has_install() {
            plan = plan.install_host();
        }
        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn has_install(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, LoadStep::InstallHost))
    }

    pub fn run(&self, config: &RegistryConfig) -> (PageEnvironment, LoadSummary) {
        let env = PageEnvironment::new(config);
        let host = RegistryHost::new(env.clone());
        let mut summary = LoadSummary::default();

        for step in &self.steps {
            match step {
                LoadStep::Shard(producer) => match producer.run(&env) {
                    Handoff::Registered => summary.registered += 1,
                    Handoff::Buffered { .. } => summary.buffered += 1,
                },
                LoadStep::InstallHost => summary.install = host.install(),
            }
        }

        info!(
            registered = summary.registered,
            buffered = summary.buffered,
            drained = summary.install.drained,
            pending_policy = %config.pending_policy,
            "page load finished"
        );

        (env, summary)
    }
}
