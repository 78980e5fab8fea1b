use anyhow::Context;
use atk_package::LoadedPackage;
use atk_package::bundle::{create_bundle, default_bundle_dir};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PackageArgs;
use crate::output::output;

/// Handle `atk package`.
pub fn handle(args: &PackageArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = LoadedPackage::load(&args.file)
        .with_context(|| format!("failed to load assignment {}", args.file.display()))?;
    let dir = args
        .out
        .clone()
        .unwrap_or_else(|| default_bundle_dir(&loaded.path));

    let report = create_bundle(&loaded, &dir, args.force)?;

    if !flags.is_text() {
        return output(&report, flags.format);
    }

    for skipped in &report.skipped {
        println!("⚠️  Resource not bundled: {skipped}");
    }
    println!("✅ Package created: {}/", report.dir.display());
    Ok(())
}
