use std::path::PathBuf;

use atk_core::responses::ValidationResult;
use atk_package::{HashCheck, LoadedPackage, validate, verify_source_hash};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::shared::{display_name, load_all};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidateReport {
    file: PathBuf,
    title: String,
    #[serde(flatten)]
    result: ValidationResult,
    hash: HashStatus,
}

/// Recorded content hash compared with the current body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum HashStatus {
    Match,
    Mismatch,
    Missing,
}

impl From<&HashCheck> for HashStatus {
    fn from(check: &HashCheck) -> Self {
        match check {
            HashCheck::Match => Self::Match,
            HashCheck::Mismatch { .. } => Self::Mismatch,
            HashCheck::Missing { .. } => Self::Missing,
        }
    }
}

/// Handle `atk validate`.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut loaded = load_all(&args.files)?;
    let mut reports = Vec::with_capacity(loaded.len());

    for pkg in &mut loaded {
        let report = check(pkg)?;
        if args.embed {
            pkg.package.validation = Some(report.result.clone());
            pkg.save()?;
            tracing::debug!(file = %pkg.path.display(), "validation result embedded");
        }
        reports.push(report);
    }

    if flags.is_text() {
        for report in &reports {
            print_text(report, reports.len() > 1);
        }
    } else {
        output(&reports, flags.format)?;
    }

    let failed = reports.iter().filter(|r| !r.result.is_valid).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} package(s) failed validation", reports.len());
    }
    Ok(())
}

fn check(loaded: &LoadedPackage) -> anyhow::Result<ValidateReport> {
    let result = validate(&loaded.package);
    let hash = HashStatus::from(&verify_source_hash(&loaded.package)?);
    Ok(ValidateReport {
        file: loaded.path.clone(),
        title: loaded.package.assignment.title.clone(),
        result,
        hash,
    })
}

fn print_text(report: &ValidateReport, with_name: bool) {
    let result = &report.result;
    if with_name {
        println!("{}", display_name(&report.file));
    }

    if result.is_valid {
        println!("✅ Assignment is valid (Score: {}/100)", result.score);
    } else {
        println!("❌ Assignment validation failed");
        for error in &result.errors {
            println!("  • {}", error.message);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n⚠️  Warnings:");
        for warning in &result.warnings {
            println!("  • {}", warning.message);
        }
    }

    match report.hash {
        HashStatus::Mismatch => println!("⚠️  Content changed since the hash was recorded (run 'atk rehash')"),
        HashStatus::Missing => println!("⚠️  No content hash recorded (run 'atk rehash')"),
        HashStatus::Match => {}
    }

    if with_name {
        println!();
    }
}
