use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use prodcat_catalog::IntegrityPolicy;
use prodcat_core::CategoryId;
use prodcat_observability::LogFormat;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "prodcat",
    version,
    about = "Filterable product catalog",
    long_about = "Render the product catalog joined with its categories and owners, filtered by user, search text and categories.\n\nExamples:\n  prodcat show --user 2 --search an\n  prodcat --format json show --category 1 --category 3\n  prodcat --data-dir ./fixtures interactive"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Settings that override environment configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        global = true,
        help = "Directory containing users.json, categories.json and products.json."
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long = "integrity-policy",
        value_name = "keep|skip",
        global = true,
        help = "Keep products with dangling references (as unknown) or skip them."
    )]
    pub integrity_policy: Option<IntegrityPolicy>,

    #[arg(long = "format", value_enum, global = true, help = "Output format.")]
    pub format: Option<OutputFormat>,

    #[arg(
        long = "log-format",
        value_name = "json|pretty",
        global = true,
        help = "Log line format (logs go to stderr)."
    )]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Apply the given filters once and print the catalog.
    Show(FilterArgs),
    /// Read filter commands from stdin and print the catalog after each one.
    Interactive,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, value_name = "ID|all", help = "Only products owned by this user.")]
    pub user: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Case-insensitive substring of the product name.")]
    pub search: Option<String>,

    #[arg(
        long = "category",
        value_name = "ID",
        action = ArgAction::Append,
        help = "Toggle a category in the selection (repeatable)."
    )]
    pub categories: Vec<CategoryId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
