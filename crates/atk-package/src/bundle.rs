//! Distributable package directories.
//!
//! ```text
//! <name>-package/
//!   assignment.yaml
//!   README.md
//!   resources/<file>...
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use atk_core::entities::{AssignmentPackage, Resource};
use serde::Serialize;

use crate::error::PackageError;
use crate::store::{LoadedPackage, save_package};

/// What [`create_bundle`] produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleReport {
    pub dir: PathBuf,
    pub copied: Vec<PathBuf>,
    /// Resources whose local file could not be copied, as `title: reason`.
    pub skipped: Vec<String>,
}

/// Default bundle directory for a package file: `quiz.yaml` → `quiz-package`.
#[must_use]
pub fn default_bundle_dir(package_path: &Path) -> PathBuf {
    let stem = package_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("assignment");
    package_path.with_file_name(format!("{stem}-package"))
}

/// Build a bundle for `loaded` in `dir`.
///
/// An existing `dir` is replaced only when it is the package's
/// [`default_bundle_dir`], when it is empty, or when `overwrite` is set. A
/// directory holding the source package is never replaced. The bundled
/// `assignment.yaml` points its resources at the copies under `resources/`.
/// A resource whose file is missing is reported in [`BundleReport::skipped`]
/// instead of failing the bundle.
///
/// # Errors
///
/// Returns [`PackageError::BundleTarget`] when `dir` may not be replaced, and
/// [`PackageError::Write`] if the directory or one of the generated files
/// cannot be written.
pub fn create_bundle(
    loaded: &LoadedPackage,
    dir: &Path,
    overwrite: bool,
) -> Result<BundleReport, PackageError> {
    let write_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| PackageError::Write { path, source }
    };

    if dir.exists() {
        check_replaceable(loaded, dir, overwrite)?;
        fs::remove_dir_all(dir).map_err(write_err(dir))?;
    }
    fs::create_dir_all(dir).map_err(write_err(dir))?;

    let mut report = BundleReport {
        dir: dir.to_path_buf(),
        copied: Vec::new(),
        skipped: Vec::new(),
    };
    let mut bundled = loaded.package.clone();

    if bundled.resources.iter().any(Resource::has_local_file) {
        let resource_dir = dir.join("resources");
        fs::create_dir_all(&resource_dir).map_err(write_err(&resource_dir))?;

        for resource in bundled.resources.iter_mut().filter(|r| r.has_local_file()) {
            let source = loaded.resource_path(resource);
            let Some(file_name) = source.file_name() else {
                report.skipped.push(format!("{}: no file name", resource.title));
                continue;
            };
            let target = resource_dir.join(file_name);
            match fs::copy(&source, &target) {
                Ok(_) => {
                    resource.local_path = format!("resources/{}", file_name.to_string_lossy());
                    report.copied.push(target);
                }
                Err(err) => {
                    tracing::warn!(resource = %resource.title, %err, "resource not copied");
                    report.skipped.push(format!("{}: {err}", resource.title));
                }
            }
        }
    }

    save_package(&bundled, &dir.join("assignment.yaml"))?;

    let readme_path = dir.join("README.md");
    fs::write(&readme_path, render_readme(&bundled)).map_err(write_err(&readme_path))?;

    Ok(report)
}

fn check_replaceable(
    loaded: &LoadedPackage,
    dir: &Path,
    overwrite: bool,
) -> Result<(), PackageError> {
    let refuse = |reason| PackageError::BundleTarget {
        path: dir.to_path_buf(),
        reason,
    };

    let dir_abs = fs::canonicalize(dir).map_err(|source| PackageError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let base = match loaded.base_dir() {
        p if p.as_os_str().is_empty() => Path::new("."),
        p => p,
    };
    let source_dir = fs::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
    if source_dir.starts_with(&dir_abs) {
        return Err(refuse("it contains the source package"));
    }

    if overwrite || dir == default_bundle_dir(&loaded.path) {
        return Ok(());
    }
    let mut entries = fs::read_dir(dir).map_err(|source| PackageError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    if entries.next().is_some() {
        return Err(refuse("directory is not empty (use --force to replace it)"));
    }
    Ok(())
}

/// README describing the bundle.
#[must_use]
pub fn render_readme(pkg: &AssignmentPackage) -> String {
    let assignment = &pkg.assignment;
    let mut out = format!(
        "# {}\n\n{}\n\n## Assignment Details\n\
         - **Type**: {}\n\
         - **Version**: {}\n\
         - **Author**: {}\n\
         - **Created**: {}\n\n\
         ## Installation\n\
         1. Import assignment.yaml into your LMS\n\
         2. Upload resources from the resources/ directory if present\n\n\
         ## Resources\n",
        assignment.title,
        assignment.description,
        assignment.assignment_type,
        pkg.metadata.version,
        pkg.metadata.author,
        pkg.metadata.created.format("%Y-%m-%d"),
    );
    for resource in &pkg.resources {
        let _ = writeln!(out, "- {} ({})", resource.title, resource.resource_type);
    }
    out
}
