//! gatekeep CLI.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod logging;
mod rules_file;

use crate::cli::{Cli, Command};
use crate::commands::{print_report, run_check, run_demo, run_rules};
use crate::config::Config;
use crate::logging::{LogConfig, init_logging};

/// Exit code for configuration, I/O and rule-definition errors.
const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            return ExitCode::from(ERROR_EXIT_CODE);
        }
    };

    if let Err(error) = init_logging(&LogConfig::new(&config.log_level, config.log_format)) {
        eprintln!("error: failed to initialize logging: {error:#}");
        return ExitCode::from(ERROR_EXIT_CODE);
    }
    tracing::debug!(?config, "configuration loaded");

    match run(&cli.command, &config) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "command failed");
            eprintln!("error: {error:#}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

fn run(command: &Command, config: &Config) -> anyhow::Result<ExitCode> {
    match command {
        Command::Check(args) => {
            let report = run_check(args)?;
            print_report(&report, config.output)?;
            Ok(if report.success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(config.fail_exit_code)
            })
        }
        Command::Demo => {
            let report = run_demo()?;
            print_report(&report, config.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Rules => {
            run_rules(config.output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
