//! Shard script codec.
//!
//! The doc generator writes one script per trait:
//!
//! ```text
//! (function() {var implementors = {};
//! implementors["gbm"] = [{"text":"...","synthetic":false,"types":["..."]}];
//! if (window.register_implementors) {...} else {window.pending_implementors = implementors;}})()
//! ```
//!
//! Only the assignment lines carry data. Their right-hand sides are plain
//! JSON, so parsing and rendering are exact inverses.

use std::fs;
use std::path::Path;

use docshard_core::{CapabilityName, DocshardError, ImplementorEntry, ShardMapping};
use lazy_static::lazy_static;
use regex::Regex;

pub const SCRIPT_PROLOGUE: &str = "(function() {var implementors = {};";

pub const SCRIPT_EPILOGUE: &str = "if (window.register_implementors) {window.register_implementors(implementors);} else {window.pending_implementors = implementors;}})()";

lazy_static! {
    /// `implementors["<lib>"] = [...];`
    static ref ASSIGNMENT: Regex =
        Regex::new(r#"^implementors\[("(?:[^"\\]|\\.)*")\] = (\[.*\]);$"#).unwrap();
}

pub fn parse_shard_script(
    capability: CapabilityName,
    source: &str,
) -> Result<ShardMapping, DocshardError> {
    let mut shard = ShardMapping::new(capability);

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() || line == SCRIPT_PROLOGUE || line == SCRIPT_EPILOGUE {
            continue;
        }

        let captures = ASSIGNMENT.captures(line).ok_or_else(|| {
            DocshardError::parse(index + 1, format!("unexpected statement `{}`", preview(line)))
        })?;

        let library: String = serde_json::from_str(&captures[1])
            .map_err(|e| DocshardError::parse(index + 1, format!("library name: {}", e)))?;
        let entries: Vec<ImplementorEntry> = serde_json::from_str(&captures[2])
            .map_err(|e| DocshardError::parse(index + 1, format!("entries for `{}`: {}", library, e)))?;

        shard.insert(library, entries);
    }

    Ok(shard)
}

pub fn render_shard_script(shard: &ShardMapping) -> Result<String, DocshardError> {
    let mut out = String::from(SCRIPT_PROLOGUE);
    out.push('\n');

    for (library, entries) in &shard.libraries {
        out.push_str("implementors[");
        out.push_str(&serde_json::to_string(library)?);
        out.push_str("] = ");
        out.push_str(&serde_json::to_string(entries)?);
        out.push_str(";\n");
    }

    out.push_str(SCRIPT_EPILOGUE);
    Ok(out)
}

/// Reads a shard file, taking the capability from its location under
/// `implementors/`.
pub fn read_shard_file(path: &Path) -> Result<ShardMapping, DocshardError> {
    let capability = CapabilityName::from_shard_path(path)?;
    let source = fs::read_to_string(path)?;
    parse_shard_script(capability, &source)
}

fn preview(line: &str) -> String {
    const MAX: usize = 60;
    match line.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}
