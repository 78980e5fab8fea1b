//! YAML storage for package documents.

use std::fs;
use std::path::{Path, PathBuf};

use atk_core::entities::{AssignmentPackage, Resource};

use crate::error::PackageError;

/// Extensions recognized as package documents.
pub const PACKAGE_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Parse a package from YAML text. `origin` names the source in errors.
///
/// # Errors
///
/// Returns [`PackageError::Parse`] for malformed documents.
pub fn from_yaml_str(text: &str, origin: &str) -> Result<AssignmentPackage, PackageError> {
    serde_yaml::from_str(text).map_err(|source| PackageError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Render a package as YAML.
///
/// # Errors
///
/// Returns [`PackageError::Serialize`] if encoding fails.
pub fn to_yaml_string(pkg: &AssignmentPackage) -> Result<String, PackageError> {
    serde_yaml::to_string(pkg).map_err(PackageError::Serialize)
}

/// Read and parse the package at `path`.
///
/// # Errors
///
/// Returns [`PackageError::Read`] or [`PackageError::Parse`].
pub fn load_package(path: &Path) -> Result<AssignmentPackage, PackageError> {
    let text = fs::read_to_string(path).map_err(|source| PackageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml_str(&text, &path.display().to_string())
}

/// Write `pkg` to `path` as YAML, replacing any existing file.
///
/// # Errors
///
/// Returns [`PackageError::Serialize`] or [`PackageError::Write`].
pub fn save_package(pkg: &AssignmentPackage, path: &Path) -> Result<(), PackageError> {
    let text = to_yaml_string(pkg)?;
    fs::write(path, text).map_err(|source| PackageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Package documents directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`PackageError::Read`] if the directory cannot be listed.
pub fn discover_packages(dir: &Path) -> Result<Vec<PathBuf>, PackageError> {
    let read_err = |source| PackageError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let is_package = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| PACKAGE_EXTENSIONS.contains(&ext));
        if is_package {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// File name for a new package: the title lowercased, runs of anything other
/// than letters and digits collapsed to `-`, with a `.yaml` extension.
#[must_use]
pub fn package_file_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "assignment.yaml".to_string()
    } else {
        format!("{slug}.yaml")
    }
}

/// A package together with the file it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPackage {
    pub path: PathBuf,
    pub package: AssignmentPackage,
}

impl LoadedPackage {
    /// # Errors
    ///
    /// Same as [`load_package`].
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PackageError> {
        let path = path.into();
        let package = load_package(&path)?;
        Ok(Self { path, package })
    }

    /// Directory that relative resource paths are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Absolute-or-cwd-relative location of a resource's local file.
    #[must_use]
    pub fn resource_path(&self, resource: &Resource) -> PathBuf {
        let local = Path::new(resource.local_path.trim());
        if local.is_absolute() {
            local.to_path_buf()
        } else {
            self.base_dir().join(local)
        }
    }

    /// Write the package back to where it was loaded from.
    ///
    /// # Errors
    ///
    /// Same as [`save_package`].
    pub fn save(&self) -> Result<(), PackageError> {
        save_package(&self.package, &self.path)
    }
}
