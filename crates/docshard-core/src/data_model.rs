//! Data Model: CapabilityName, ImplementorEntry, ShardMapping
use std::borrow::Borrow;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DocshardError;
use crate::IMPLEMENTORS_DIR;

/// Name of a documented library (crate), e.g. `"dbus"`.
pub type LibraryName = String;

/// Library name → implementor entries, in source order.
pub type LibraryImplementors = IndexMap<LibraryName, Vec<ImplementorEntry>>;

/// Fully-qualified trait path whose implementors a shard lists
/// (ex: `core::fmt::Display`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityName(String);

impl CapabilityName {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, the bare trait name.
    pub fn trait_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }

    /// Location of this capability's shard below an `implementors/` root.
    pub fn shard_path(&self) -> PathBuf {
        let mut segments: Vec<&str> = self.0.split("::").collect();
        let name = segments.pop().unwrap_or_default();
        let mut path: PathBuf = segments.into_iter().collect();
        path.push(format!("trait.{}.js", name));
        path
    }

    /// Inverse of [`CapabilityName::shard_path`]. Anything up to and
    /// including the last `implementors` directory is ignored.
    pub fn from_shard_path(path: &Path) -> Result<Self, DocshardError> {
        let components: Vec<&str> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect();

        let start = components
            .iter()
            .rposition(|c| *c == IMPLEMENTORS_DIR)
            .map(|i| i + 1)
            .unwrap_or(0);
        let relative = &components[start..];

        let (file, modules) = relative
            .split_last()
            .ok_or_else(|| DocshardError::ShardPath(format!("empty path: {}", path.display())))?;

        let name = file
            .strip_prefix("trait.")
            .and_then(|rest| rest.strip_suffix(".js"))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                DocshardError::ShardPath(format!("not a trait shard: {}", path.display()))
            })?;

        if modules.is_empty() {
            return Err(DocshardError::ShardPath(format!(
                "missing crate directory: {}",
                path.display()
            )));
        }

        let mut segments = modules.to_vec();
        segments.push(name);
        Ok(Self(segments.join("::")))
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CapabilityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CapabilityName {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// One implementing type, as pre-rendered by the doc generator.
///
/// The registry never looks inside an entry; it is carried as-is. Fields the
/// generator adds later land in `extra` and survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementorEntry {
    /// Rendered `impl` signature markup
    pub text: String,

    /// Auto-trait / blanket impl marker
    #[serde(default)]
    pub synthetic: bool,

    /// Fully-qualified paths of the implementing types
    #[serde(default)]
    pub types: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImplementorEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            synthetic: false,
            types: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_type(mut self, path: impl Into<String>) -> Self {
        self.types.push(path.into());
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }
}

/// Everything one shard contributes: one capability, many libraries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardMapping {
    pub capability: CapabilityName,
    pub libraries: LibraryImplementors,
}

impl ShardMapping {
    pub fn new(capability: impl Into<CapabilityName>) -> Self {
        Self {
            capability: capability.into(),
            libraries: IndexMap::new(),
        }
    }

    /// Assigns a library's entries. A repeated library keeps its slot and
    /// takes the new value.
    pub fn with_library(
        mut self,
        library: impl Into<LibraryName>,
        entries: impl IntoIterator<Item = ImplementorEntry>,
    ) -> Self {
        self.insert(library, entries);
        self
    }

    pub fn insert(
        &mut self,
        library: impl Into<LibraryName>,
        entries: impl IntoIterator<Item = ImplementorEntry>,
    ) {
        self.libraries
            .insert(library.into(), entries.into_iter().collect());
    }

    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.libraries.keys().map(String::as_str)
    }

    pub fn entry_count(&self) -> usize {
        self.libraries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// The doc generator's wire shape: `{ library: [entry, ...] }`.
    pub fn to_json(&self) -> Result<Value, DocshardError> {
        Ok(serde_json::to_value(&self.libraries)?)
    }
}
