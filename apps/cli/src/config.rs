//! Layered configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `gatekeep.toml` in the working directory, or the file given by `--config`
//! 3. `GATEKEEP_*` environment variables (e.g. `GATEKEEP_OUTPUT=json`)
//! 4. command-line flags

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::ValueEnum;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::logging::LogFormat;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gatekeep.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GATEKEEP_";

/// Report format on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per rejected field.
    #[default]
    Pretty,
    /// The report as a JSON document.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fallback log filter when neither `GATEKEEP_LOG` nor `RUST_LOG` is set.
    pub log_level: String,
    pub log_format: LogFormat,
    pub output: OutputFormat,
    /// Exit code when the data is rejected.
    pub fail_exit_code: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
            fail_exit_code: 1,
        }
    }
}

/// Values given on the command line; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_format: Option<LogFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
}

impl Config {
    /// Loads the configuration for this invocation.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) if !path.is_file() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        let flags = FlagOverrides {
            log_level: cli.log_level.clone(),
            log_format: cli.log_format,
            output: cli.output,
        };
        Self::figment(&file, flags)
            .extract()
            .with_context(|| format!("invalid configuration (file: {})", file.display()))
    }

    fn figment(file: &Path, flags: FlagOverrides) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).only(&[
                "log_level",
                "log_format",
                "output",
                "fail_exit_code",
            ]))
            .merge(Serialized::defaults(flags))
    }
}
