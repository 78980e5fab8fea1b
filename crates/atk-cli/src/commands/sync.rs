use std::path::Path;

use anyhow::Context;
use atk_core::enums::{ImportStatus, UnresolvedTypePolicy};
use atk_core::responses::{BatchImportResult, ImportResult};
use atk_lms::{LmsClient, SyncOptions, Synchronizer};
use atk_package::LoadedPackage;
use atk_package::store::discover_packages;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SyncArgs;
use crate::commands::shared::{display_name, load_all};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `atk sync`.
pub async fn handle(args: &SyncArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lms = ctx.config.require_lms()?;
    let client = LmsClient::new(&lms.endpoint, &lms.api_key, lms.timeout())
        .context("failed to build LMS client")?;

    let files = if args.files.is_empty() {
        discover_packages(&args.dir)?
    } else {
        args.files.clone()
    };
    if files.is_empty() {
        anyhow::bail!("no assignment files found in {}", args.dir.display());
    }
    let packages = load_all(&files)?;

    let policy = args.strict_types.then_some(UnresolvedTypePolicy::Reject);
    let synchronizer = Synchronizer::new(&client, ctx.converter(policy), sync_options(args, ctx));

    let spinner = Progress::spinner(&format!(
        "Syncing {} package(s) with {}...",
        packages.len(),
        client.base_url()
    ));
    let batch = synchronizer.sync_batch(&packages).await;
    if batch.failure_count == 0 {
        spinner.finish_clear();
    } else {
        spinner.finish_err(&format!("{} package(s) failed", batch.failure_count));
    }

    if flags.is_text() {
        print_text(&packages, &batch);
    } else {
        output(&batch, flags.format)?;
    }

    if batch.failure_count > 0 {
        anyhow::bail!(
            "{} of {} package(s) failed to sync",
            batch.failure_count,
            batch.total_count
        );
    }
    Ok(())
}

fn sync_options(args: &SyncArgs, ctx: &AppContext) -> SyncOptions {
    SyncOptions {
        skip_duplicates: ctx.config.sync.skip_duplicates && !args.no_dedupe,
        concurrency: args
            .concurrency
            .unwrap_or_else(|| ctx.config.sync.effective_concurrency()),
    }
}

fn print_text(packages: &[LoadedPackage], batch: &BatchImportResult) {
    for (loaded, result) in packages.iter().zip(&batch.results) {
        println!("{}", status_line(&loaded.path, result));
    }
    println!(
        "\nSynced {}/{} package(s) (batch {})",
        batch.success_count, batch.total_count, batch.batch_id
    );
}

fn status_line(path: &Path, result: &ImportResult) -> String {
    let name = display_name(path);
    let id = result.assignment_id.as_deref().unwrap_or("-");
    match result.status {
        ImportStatus::Success => format!("✅ {name}: synced (Assignment ID: {id})"),
        ImportStatus::Exists => format!("✅ {name}: already imported (Assignment ID: {id})"),
        ImportStatus::Partial => format!("⚠️  {name}: {} (Assignment ID: {id})", result.message),
        ImportStatus::Failed => format!("❌ {name}: {}", result.message),
    }
}
