//! # atk-types
//!
//! Translation between the portable assignment vocabulary used while authoring
//! offline and the type/subtype vocabulary of the remote LMS.
//!
//! The [`TypeRegistry`] holds one [`TypeMapping`] per portable type plus a set of
//! shorthand aliases. It is built once (normally from [`TypeRegistry::builtin`]),
//! never mutated afterwards, and shared by reference:
//!
//! ```
//! use atk_types::TypeRegistry;
//!
//! let registry = TypeRegistry::builtin();
//! let (lms_type, lms_subtype) = registry.to_lms_format(" DnD ").unwrap();
//! assert_eq!((lms_type, lms_subtype), ("drag-and-drop", "ordering"));
//! assert_eq!(registry.suggest("drag").len(), 5);
//! ```

mod builtin;
mod category;
mod error;
mod registry;

pub use builtin::builtin_lms_type;
pub use category::TypeCategory;
pub use error::TypeError;
pub use registry::{TypeRegistry, UNKNOWN_TYPE_DESCRIPTION};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How one portable type is expressed in the LMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeMapping {
    /// Canonical portable key, lowercase.
    pub portable_type: String,
    pub lms_type: String,
    /// Only set for grouped LMS types such as `drag-and-drop`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lms_subtype: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

impl TypeMapping {
    #[must_use]
    pub fn new(
        portable_type: &str,
        lms_type: &str,
        lms_subtype: &str,
        description: &str,
    ) -> Self {
        Self {
            portable_type: portable_type.to_string(),
            lms_type: lms_type.to_string(),
            lms_subtype: lms_subtype.to_string(),
            description: description.to_string(),
            deprecated: false,
        }
    }

    /// `lms` or `lms (subtype)`.
    #[must_use]
    pub fn lms_label(&self) -> String {
        if self.lms_subtype.is_empty() {
            self.lms_type.clone()
        } else {
            format!("{} ({})", self.lms_type, self.lms_subtype)
        }
    }
}
