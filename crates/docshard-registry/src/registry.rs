//! Global Registry: capability → library → implementor entries
//!
//! Last write wins per (capability, library). Entry order inside a library is
//! whatever the shard carried; library order is not tracked.

use std::collections::{BTreeMap, HashMap, HashSet};

use docshard_core::{CapabilityName, DocshardError, ImplementorEntry, LibraryName, ShardMapping};
use serde_json::Value;
use tracing::debug;

/// Merged view of every shard seen so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalRegistry {
    capabilities: HashMap<CapabilityName, HashMap<LibraryName, Vec<ImplementorEntry>>>,
}

/// Outcome of one [`GlobalRegistry::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Libraries seen for the first time under this capability
    pub inserted: usize,
    /// Libraries whose previous entries were replaced
    pub replaced: usize,
}

impl GlobalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a shard, replacing (never appending to) any library it names
    /// under the shard's capability. Other capabilities are untouched.
    pub fn merge(&mut self, shard: ShardMapping) -> MergeReport {
        let mut report = MergeReport::default();
        let ShardMapping {
            capability,
            libraries,
        } = shard;

        let page = self.capabilities.entry(capability.clone()).or_default();
        for (library, entries) in libraries {
            debug!(
                capability = %capability,
                library = %library,
                entries = entries.len(),
                "merging implementors"
            );
            if page.insert(library, entries).is_some() {
                report.replaced += 1;
            } else {
                report.inserted += 1;
            }
        }

        report
    }

    pub fn get(&self, capability: &str, library: &str) -> Option<&[ImplementorEntry]> {
        self.capabilities
            .get(capability)
            .and_then(|page| page.get(library))
            .map(Vec::as_slice)
    }

    pub fn contains(&self, capability: &str, library: &str) -> bool {
        self.get(capability, library).is_some()
    }

    /// Capabilities with at least one merged shard, sorted.
    pub fn capabilities(&self) -> Vec<&CapabilityName> {
        let mut names: Vec<&CapabilityName> = self.capabilities.keys().collect();
        names.sort_unstable();
        names
    }

    /// Library names registered for `capability`, sorted.
    pub fn libraries(&self, capability: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .capabilities
            .get(capability)
            .map(|page| page.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Number of (capability, library) pairs.
    pub fn len(&self) -> usize {
        self.capabilities.values().map(|page| page.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entry_count(&self) -> usize {
        self.capabilities
            .values()
            .flat_map(|page| page.values())
            .map(Vec::len)
            .sum()
    }

    /// Implementors of `capability` a page still has to render once it
    /// already shows the impls whose type paths are in `local_types`. An entry
    /// is skipped when any of its types is local; libraries left empty are
    /// omitted.
    pub fn entries_excluding(
        &self,
        capability: &str,
        local_types: &HashSet<&str>,
    ) -> BTreeMap<&str, Vec<&ImplementorEntry>> {
        let Some(page) = self.capabilities.get(capability) else {
            return BTreeMap::new();
        };

        page.iter()
            .filter_map(|(library, entries)| {
                let remaining: Vec<&ImplementorEntry> = entries
                    .iter()
                    .filter(|e| !e.types.iter().any(|t| local_types.contains(t.as_str())))
                    .collect();
                (!remaining.is_empty()).then(|| (library.as_str(), remaining))
            })
            .collect()
    }

    /// `{ capability: { library: [entry, ...] } }`, keys sorted.
    pub fn to_json(&self) -> Result<Value, DocshardError> {
        let sorted: BTreeMap<&str, BTreeMap<&str, &[ImplementorEntry]>> = self
            .capabilities
            .iter()
            .map(|(capability, page)| {
                let libraries: BTreeMap<&str, &[ImplementorEntry]> = page
                    .iter()
                    .map(|(name, entries)| (name.as_str(), entries.as_slice()))
                    .collect();
                (capability.as_str(), libraries)
            })
            .collect();
        Ok(serde_json::to_value(sorted)?)
    }
}
