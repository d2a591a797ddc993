//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;
use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "gatekeep",
    version,
    about = "Validate JSON data against declarative rule chains",
    long_about = "Validate a JSON object against per-field rule chains such as \
                  `required|min:18|max:200`.\n\n\
                  Settings are layered: built-in defaults, then gatekeep.toml \
                  (or --config), then GATEKEEP_* environment variables, then flags."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./gatekeep.toml if present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive, e.g. `debug` or `gatekeep_validator=trace`.
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Report format on stdout.
    #[arg(long = "output", value_enum, global = true)]
    pub output: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a data file against a rules file.
    Check(CheckArgs),

    /// Run the built-in sample data and rules.
    Demo,

    /// List the available rules and their default messages.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// JSON file holding the object to validate.
    #[arg(long = "data", value_name = "FILE")]
    pub data: PathBuf,

    /// Rules file (`.toml` or `.json`) with a `fields` list of
    /// `{ field, rules, messages }` entries.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: PathBuf,
}
