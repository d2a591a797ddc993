//! Subcommand implementations.

use std::io::{self, Write};

use anyhow::Context;
use gatekeep_validator::registry;
use gatekeep_validator::{ValidationReport, Validator, validate};
use serde_json::{Map, Value, json};

use crate::cli::CheckArgs;
use crate::config::OutputFormat;
use crate::rules_file::{RulesFile, load_data};

/// Runs `check` and returns the report.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<ValidationReport> {
    let data = load_data(&args.data)?;
    let rules = RulesFile::load(&args.rules)?;
    tracing::info!(
        data = %args.data.display(),
        rules = %args.rules.display(),
        entries = rules.fields.len(),
        "checking data"
    );

    let validator = rules
        .apply(validate(&data))
        .with_context(|| format!("invalid rules in {}", args.rules.display()))?;
    validator
        .run()
        .with_context(|| format!("invalid rules in {}", args.rules.display()))
}

/// Sample object validated by `demo`.
pub fn demo_data() -> Map<String, Value> {
    let value = json!({
        "name": "bobby1",
        "age": 1000,
        "weight": "It's none of your concern!",
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Sample rule set run by `demo`.
pub fn demo_rules(data: &Map<String, Value>) -> anyhow::Result<Validator<'_>> {
    Ok(validate(data)
        .verify("id", "required")?
        .verify("name", "required|alpha")?
        .verify_with(
            "age",
            "min:18|max:200",
            [("min", "Whooah! Too young."), ("max", "Whooah! Too old.")],
        )?
        .verify_with(
            "height",
            "int|min:0|max:20",
            [
                ("min", "Whooah! Are you real?"),
                ("max", "Whooah! What were you fed as a child?"),
            ],
        )?
        .verify("weight", "decimal:8:2")?)
}

/// Runs the sample rule set over the sample data.
pub fn run_demo() -> anyhow::Result<ValidationReport> {
    let data = demo_data();
    Ok(demo_rules(&data)?.run()?)
}

/// Prints every registered rule with its default message.
pub fn run_rules(format: OutputFormat) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let rules: Map<String, Value> = registry::definitions()
                .iter()
                .map(|rule| (rule.name().to_owned(), Value::from(rule.default_message())))
                .collect();
            serde_json::to_writer_pretty(&mut out, &rules)?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => {
            let width = registry::rule_names().map(str::len).max().unwrap_or_default();
            for rule in registry::definitions() {
                writeln!(out, "{:<width$}  {}", rule.name(), rule.default_message())?;
            }
        }
    }
    Ok(())
}

/// Writes `report` to stdout.
pub fn print_report(report: &ValidationReport, format: OutputFormat) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report.to_json_value())?;
            writeln!(out)?;
        }
        OutputFormat::Pretty if report.success() => writeln!(out, "valid: all fields passed")?,
        OutputFormat::Pretty => {
            writeln!(out, "invalid: {} field(s) rejected", report.fields().len())?;
            for (field, message) in report.fields() {
                writeln!(out, "  {field}: {message}")?;
            }
        }
    }
    Ok(())
}
