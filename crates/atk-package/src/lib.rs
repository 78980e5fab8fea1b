//! # atk-package
//!
//! Everything the toolkit does to an assignment package between authoring and
//! synchronization:
//! - [`validate`]: quality score plus blocking errors and warnings
//! - [`hash`]: SHA-256 content fingerprint of the assignment body
//! - [`convert`]: translation into the LMS wire record
//! - [`store`]: YAML load/save and package discovery
//! - [`bundle`]: distributable package directories
//!
//! None of these perform network I/O; only `store` and `bundle` touch the
//! filesystem.

pub mod bundle;
pub mod convert;
pub mod hash;
pub mod store;
pub mod validate;

mod error;

pub use convert::{Converter, WireAssignment};
pub use error::PackageError;
pub use hash::{HashCheck, content_hash, stamp_hash, verify_source_hash};
pub use store::LoadedPackage;
pub use validate::{VALIDATOR_VERSION, validate};
