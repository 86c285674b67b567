//! Registry configuration
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DocshardError;

/// Environment variable selecting the [`PendingPolicy`].
pub const PENDING_POLICY_ENV: &str = "DOCSHARD_PENDING_POLICY";

/// How shards that arrive before the host is ready are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PendingPolicy {
    /// Keep every early shard, drained in arrival order.
    #[default]
    Queue,
    /// Keep only the most recent early shard; older ones are dropped.
    SingleSlot,
}

impl PendingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::SingleSlot => "single-slot",
        }
    }
}

impl fmt::Display for PendingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PendingPolicy {
    type Err = DocshardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "queue" => Ok(Self::Queue),
            "single-slot" | "single_slot" | "slot" => Ok(Self::SingleSlot),
            other => Err(DocshardError::Config(format!(
                "unknown pending policy `{}` (expected `queue` or `single-slot`)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub pending_policy: PendingPolicy,
}

impl RegistryConfig {
    pub fn new(pending_policy: PendingPolicy) -> Self {
        Self { pending_policy }
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, DocshardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DocshardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(PENDING_POLICY_ENV) {
            config.pending_policy = raw.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded_queue() {
        assert_eq!(RegistryConfig::default().pending_policy, PendingPolicy::Queue);
        let config = RegistryConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.pending_policy, PendingPolicy::Queue);
    }

    #[test]
    fn test_lookup_overrides_policy() {
        let config = RegistryConfig::from_lookup(|key| {
            (key == PENDING_POLICY_ENV).then(|| "Single-Slot".to_string())
        })
        .unwrap();
        assert_eq!(config.pending_policy, PendingPolicy::SingleSlot);
    }

    #[test]
    fn test_lookup_rejects_unknown_policy() {
        let err = RegistryConfig::from_lookup(|_| Some("lifo".to_string())).unwrap_err();
        assert!(err.to_string().contains("lifo"));
    }

    #[test]
    fn test_serde_kebab_case() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{ "pending_policy": "single-slot" }"#).unwrap();
        assert_eq!(config.pending_policy, PendingPolicy::SingleSlot);

        let empty: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RegistryConfig::default());
    }
}
