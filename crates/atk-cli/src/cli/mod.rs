use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `atk` binary.
#[derive(Debug, Parser)]
#[command(
    name = "atk",
    version,
    about = "Assignment toolkit - author, validate, and sync assignments with an LMS"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, table, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::root_commands::SchemaKind;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["atk", "--format", "json", "--verbose", "types"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Types(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["atk", "auth", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Auth));
    }

    #[test]
    fn format_defaults_to_text() {
        let cli = Cli::try_parse_from(["atk", "types"]).expect("cli should parse");
        assert!(cli.global_flags().is_text());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["atk", "--format", "xml", "types"]).is_err());
    }

    #[test]
    fn create_collects_repeated_options() {
        let cli = Cli::try_parse_from([
            "atk",
            "create",
            "mcq",
            "--title",
            "Colors",
            "--question",
            "Which is red?",
            "--option",
            "rojo",
            "--option",
            "azul",
            "--points",
            "-1",
        ])
        .expect("cli should parse");

        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.assignment_type, "mcq");
        assert_eq!(args.options, ["rojo", "azul"]);
        assert_eq!(args.points, Some(-1));
        assert_eq!(args.language, "python");
    }

    #[test]
    fn validate_requires_a_file() {
        assert!(Cli::try_parse_from(["atk", "validate"]).is_err());

        let cli = Cli::try_parse_from(["atk", "validate", "a.yaml", "b.yaml", "--embed"])
            .expect("cli should parse");
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.files, [PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]);
        assert!(args.embed);
    }

    #[test]
    fn sync_without_files_scans_current_dir() {
        let cli = Cli::try_parse_from(["atk", "sync", "--concurrency", "4", "--strict-types"])
            .expect("cli should parse");
        let Commands::Sync(args) = cli.command else {
            panic!("expected sync");
        };
        assert!(args.files.is_empty());
        assert_eq!(args.dir, PathBuf::from("."));
        assert_eq!(args.concurrency, Some(4));
        assert!(args.strict_types);
        assert!(!args.no_dedupe);
    }

    #[test]
    fn package_replacing_custom_out_needs_force() {
        let cli = Cli::try_parse_from(["atk", "package", "quiz.yaml", "--out", "dist"])
            .expect("cli should parse");
        let Commands::Package(args) = cli.command else {
            panic!("expected package");
        };
        assert_eq!(args.out, Some(PathBuf::from("dist")));
        assert!(!args.force);
    }

    #[test]
    fn schema_kind_is_validated() {
        let cli = Cli::try_parse_from(["atk", "schema", "wire"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.kind == SchemaKind::Wire
        ));
        assert!(Cli::try_parse_from(["atk", "schema", "config"]).is_err());
    }
}
