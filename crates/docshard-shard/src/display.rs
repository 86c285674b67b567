//! Built-in `core::fmt::Display` shard.
//!
//! The generated data file is embedded at compile time; nothing is read at
//! run time.

use docshard_core::{CapabilityName, DocshardError, ShardMapping};

use crate::codec;
use crate::producer::ShardProducer;

pub const DISPLAY_CAPABILITY: &str = "core::fmt::Display";

const DISPLAY_SCRIPT: &str = include_str!("../data/implementors/core/fmt/trait.Display.js");

/// The embedded script, exactly as generated.
pub fn display_script() -> &'static str {
    DISPLAY_SCRIPT
}

pub fn display_shard() -> Result<ShardMapping, DocshardError> {
    codec::parse_shard_script(CapabilityName::new(DISPLAY_CAPABILITY), DISPLAY_SCRIPT)
}

pub fn display_producer() -> Result<ShardProducer, DocshardError> {
    display_shard().map(ShardProducer::new)
}
