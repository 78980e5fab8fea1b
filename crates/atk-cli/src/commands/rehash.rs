use std::path::PathBuf;

use atk_package::{HashCheck, LoadedPackage, stamp_hash, verify_source_hash};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RehashArgs;
use crate::commands::shared::{display_name, load_all};
use crate::output::output;

#[derive(Debug, Serialize)]
struct RehashRow {
    file: PathBuf,
    status: RehashStatus,
    source_hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum RehashStatus {
    /// `--check`: the recorded hash is current.
    Match,
    /// `--check`: the body changed after the hash was recorded.
    Mismatch,
    /// `--check`: no hash recorded.
    Missing,
    Updated,
    Unchanged,
}

impl RehashStatus {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Missing => "missing",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        }
    }

    const fn is_stale(self) -> bool {
        matches!(self, Self::Mismatch | Self::Missing)
    }
}

/// Handle `atk rehash`.
pub fn handle(args: &RehashArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut loaded = load_all(&args.files)?;
    let rows = if args.check {
        loaded.iter().map(check).collect::<anyhow::Result<Vec<_>>>()?
    } else {
        let now = Utc::now();
        loaded
            .iter_mut()
            .map(|pkg| restamp(pkg, now))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    if flags.is_text() {
        for row in &rows {
            let marker = match row.status {
                RehashStatus::Match | RehashStatus::Unchanged => "✅",
                RehashStatus::Updated => "🔄",
                RehashStatus::Mismatch | RehashStatus::Missing => "❌",
            };
            println!("{marker} {}: {}", display_name(&row.file), row.status.as_str());
        }
    } else {
        output(&rows, flags.format)?;
    }

    let stale = rows.iter().filter(|row| row.status.is_stale()).count();
    if stale > 0 {
        anyhow::bail!("{stale} package(s) have a stale or missing content hash");
    }
    Ok(())
}

fn check(loaded: &LoadedPackage) -> anyhow::Result<RehashRow> {
    let (status, source_hash) = match verify_source_hash(&loaded.package)? {
        HashCheck::Match => (
            RehashStatus::Match,
            loaded.package.metadata.source_hash.clone(),
        ),
        HashCheck::Mismatch { recorded, .. } => (RehashStatus::Mismatch, recorded),
        HashCheck::Missing { .. } => (RehashStatus::Missing, String::new()),
    };
    Ok(RehashRow {
        file: loaded.path.clone(),
        status,
        source_hash,
    })
}

/// Recompute the hash and write the file back only when it changed.
fn restamp(loaded: &mut LoadedPackage, now: DateTime<Utc>) -> anyhow::Result<RehashRow> {
    let changed = stamp_hash(&mut loaded.package, now)?;
    if changed {
        loaded.save()?;
        tracing::info!(file = %loaded.path.display(), "content hash updated");
    }
    Ok(RehashRow {
        file: loaded.path.clone(),
        status: if changed {
            RehashStatus::Updated
        } else {
            RehashStatus::Unchanged
        },
        source_hash: loaded.package.metadata.source_hash.clone(),
    })
}
