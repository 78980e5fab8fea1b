use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a new assignment package.
    Create(CreateArgs),
    /// Validate assignment packages.
    Validate(ValidateArgs),
    /// List assignment packages in a directory.
    List(ListArgs),
    /// Bundle a package with its resources for distribution.
    Package(PackageArgs),
    /// Upload packages to the configured LMS.
    Sync(SyncArgs),
    /// Initialize an assignment workspace in the current directory.
    Init(InitArgs),
    /// List available assignment types and their LMS mappings.
    Types(TypesArgs),
    /// Suggest assignment types matching a partial name.
    Suggest(SuggestArgs),
    /// Recompute or verify package content hashes.
    Rehash(RehashArgs),
    /// Check the LMS credentials.
    Auth,
    /// Dump JSON schema for a document type.
    Schema(SchemaArgs),
}

/// Arguments for `atk create`.
#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Assignment type (portable name or alias).
    #[arg(value_name = "TYPE")]
    pub assignment_type: String,
    /// Assignment title.
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// beginner, intermediate, or advanced.
    #[arg(long)]
    pub difficulty: Option<String>,
    /// Points (defaults to the configured default).
    #[arg(long, allow_hyphen_values = true)]
    pub points: Option<i32>,
    /// Start from a template file instead of the built-in defaults.
    #[arg(long)]
    pub template: Option<PathBuf>,
    /// Output file (defaults to a name derived from the title).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
    #[arg(long)]
    pub tag: Vec<String>,

    /// Multiple choice: question text.
    #[arg(long)]
    pub question: Option<String>,
    /// Multiple choice: an answer option (repeatable).
    #[arg(long = "option")]
    pub options: Vec<String>,
    /// Multiple choice: the correct option (defaults to the first).
    #[arg(long)]
    pub correct: Option<String>,
    /// Multiple choice: explanation shown after answering.
    #[arg(long)]
    pub explanation: Option<String>,

    /// Matching: a `left=right` pair (repeatable).
    #[arg(long = "pair")]
    pub pairs: Vec<String>,

    /// Writing: instructions for the student.
    #[arg(long)]
    pub instructions: Option<String>,
    /// Writing: grading criteria.
    #[arg(long)]
    pub criteria: Option<String>,

    /// Code submission: programming language.
    #[arg(long, default_value = "python")]
    pub language: String,
    /// Code submission: expected program output.
    #[arg(long)]
    pub expected_output: Option<String>,
}

/// Arguments for `atk validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Package files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Write the validation result into each package.
    #[arg(long)]
    pub embed: bool,
}

/// Arguments for `atk list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Directory to scan.
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

/// Arguments for `atk package`.
#[derive(Clone, Debug, Args)]
pub struct PackageArgs {
    /// Package file to bundle.
    pub file: PathBuf,
    /// Bundle directory (defaults to `<name>-package` next to the file).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Replace `--out` even when it already holds other files.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `atk sync`.
#[derive(Clone, Debug, Args)]
pub struct SyncArgs {
    /// Package files to sync. Defaults to every package in `--dir`.
    pub files: Vec<PathBuf>,
    /// Directory scanned when no files are given.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
    /// Packages uploaded at once (overrides `sync.concurrency`).
    #[arg(long)]
    pub concurrency: Option<usize>,
    /// Create assignments even when the LMS already has the same content.
    #[arg(long)]
    pub no_dedupe: bool,
    /// Fail packages whose type does not resolve instead of sending it as is.
    #[arg(long)]
    pub strict_types: bool,
}

/// Arguments for `atk init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Author name written to the workspace config.
    #[arg(long)]
    pub author: Option<String>,
    /// Author email written to the workspace config.
    #[arg(long)]
    pub email: Option<String>,
    /// Overwrite an existing workspace config and starter template.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `atk types`.
#[derive(Clone, Debug, Args)]
pub struct TypesArgs {
    /// Include the aliases of each type.
    #[arg(long)]
    pub aliases: bool,
}

/// Arguments for `atk suggest`.
#[derive(Clone, Debug, Args)]
pub struct SuggestArgs {
    /// Partial or misspelled type name.
    pub input: String,
}

/// Arguments for `atk rehash`.
#[derive(Clone, Debug, Args)]
pub struct RehashArgs {
    /// Package files to rehash.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Only report drift; do not write.
    #[arg(long)]
    pub check: bool,
}

/// Document types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Package,
    Template,
    Wire,
    Validation,
    Import,
    Batch,
}

/// Arguments for `atk schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}
