use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines with status indicators.
    Text,
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

impl GlobalFlags {
    /// Whether commands should print their own human-readable summary.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }
}
