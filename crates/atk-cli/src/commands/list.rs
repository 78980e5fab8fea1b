use std::path::Path;

use atk_package::LoadedPackage;
use atk_package::store::discover_packages;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::display_name;
use crate::output::output;
use crate::output::table::{TableOptions, render_entity_table};
use crate::ui;

#[derive(Debug, Serialize)]
struct PackageRow {
    file: String,
    title: String,
    #[serde(rename = "type")]
    assignment_type: String,
    version: String,
    modified: String,
}

/// Handle `atk list`.
pub fn handle(args: &ListArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = collect_rows(&args.dir)?;

    if !flags.is_text() {
        return output(&rows, flags.format);
    }

    if rows.is_empty() {
        println!("No assignment files found in {}.", args.dir.display());
        return Ok(());
    }

    println!("Found {} assignment(s):\n", rows.len());
    let prefs = ui::prefs();
    let cells = rows
        .iter()
        .map(|row| {
            vec![
                row.title.clone(),
                row.assignment_type.clone(),
                row.version.clone(),
                row.modified.clone(),
                row.file.clone(),
            ]
        })
        .collect::<Vec<_>>();
    println!(
        "{}",
        render_entity_table(
            &["title", "type", "version", "modified", "file"],
            &cells,
            TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            },
        )
    );
    Ok(())
}

/// One row per package file; files that fail to load are listed as `error`.
fn collect_rows(dir: &Path) -> anyhow::Result<Vec<PackageRow>> {
    let rows = discover_packages(dir)?
        .into_iter()
        .map(|path| match LoadedPackage::load(&path) {
            Ok(loaded) => {
                let pkg = loaded.package;
                PackageRow {
                    file: display_name(&path),
                    title: pkg.assignment.title,
                    assignment_type: pkg.assignment.assignment_type,
                    version: pkg.metadata.version,
                    modified: pkg.metadata.modified.format("%Y-%m-%d %H:%M").to_string(),
                }
            }
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "skipping unreadable package");
                PackageRow {
                    file: display_name(&path),
                    title: String::from("-"),
                    assignment_type: String::from("error"),
                    version: String::from("-"),
                    modified: String::from("-"),
                }
            }
        })
        .collect();
    Ok(rows)
}
