use std::path::{Path, PathBuf};

use anyhow::Context;
use atk_package::LoadedPackage;
use atk_types::{TypeError, TypeRegistry};

/// User-facing error for a type that did not resolve, listing close matches.
pub fn unknown_type_error(error: &TypeError, registry: &TypeRegistry) -> anyhow::Error {
    let mut message = error.to_string();
    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        message.push_str("\nDid you mean one of these?");
        for name in suggestions {
            message.push_str(&format!("\n  • {name} - {}", registry.describe(name)));
        }
    }
    message.push_str("\nUse 'atk types' to see all available types");
    anyhow::anyhow!(message)
}

/// Split a `left=right` matching pair.
pub fn parse_pair(raw: &str) -> anyhow::Result<(String, String)> {
    let (left, right) = raw
        .split_once('=')
        .with_context(|| format!("invalid pair '{raw}': expected left=right"))?;
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        anyhow::bail!("invalid pair '{raw}': both sides must be non-empty");
    }
    Ok((left.to_string(), right.to_string()))
}

/// Load every file, failing on the first that cannot be read or parsed.
pub fn load_all(files: &[PathBuf]) -> anyhow::Result<Vec<LoadedPackage>> {
    files
        .iter()
        .map(|path| {
            LoadedPackage::load(path)
                .with_context(|| format!("failed to load assignment {}", path.display()))
        })
        .collect()
}

/// Path as shown in human output.
pub fn display_name(path: &Path) -> String {
    path.strip_prefix("./").unwrap_or(path).display().to_string()
}
