//! Entity structs for the assignment package document.

mod assignment;
mod package;
mod questions;
mod resource;
mod template;

pub use assignment::Assignment;
pub use package::{AssignmentPackage, PackageMetadata};
pub use questions::{CodeSubmissionConfig, MatchingQuestion, MultipleChoiceQuestion, QuestionPayload};
pub use resource::{Dependencies, Resource, SoftwareRequirement};
pub use template::{Template, TemplateField};
