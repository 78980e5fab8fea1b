use atk_core::entities::{AssignmentPackage, Template};
use atk_core::responses::{BatchImportResult, ImportResult, ValidationResult};
use atk_package::WireAssignment;
use schemars::{Schema, schema_for};

use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `atk schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        _ => OutputFormat::Json,
    };
    output(&schema(args.kind), format)
}

fn schema(kind: SchemaKind) -> Schema {
    match kind {
        SchemaKind::Package => schema_for!(AssignmentPackage),
        SchemaKind::Template => schema_for!(Template),
        SchemaKind::Wire => schema_for!(WireAssignment),
        SchemaKind::Validation => schema_for!(ValidationResult),
        SchemaKind::Import => schema_for!(ImportResult),
        SchemaKind::Batch => schema_for!(BatchImportResult),
    }
}
