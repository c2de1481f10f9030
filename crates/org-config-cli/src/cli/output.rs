//! Output formatting for validation results
//!
//! Renders a [`ValidationResult`] as a colored human-readable report, JSON or
//! YAML. Structured formats carry the full violation records, including the
//! stable rule codes.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

use org_config_core::{ValidationResult, Violation};

use crate::error::CliError;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable report with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Validation report for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutput {
    /// No errors were found
    pub valid: bool,
    /// Whether strict mode was in effect
    pub strict: bool,
    /// Final verdict after strict-mode escalation
    pub passed: bool,
    /// Number of errors found
    pub error_count: usize,
    /// Number of warnings found
    pub warning_count: usize,
    /// Summary message
    pub summary: String,
    /// Errors in the order they were found
    pub errors: Vec<Violation>,
    /// Warnings in the order they were found
    pub warnings: Vec<Violation>,
}

impl ValidationOutput {
    /// Create output from a validation result
    pub fn from_result(result: &ValidationResult, strict: bool) -> Self {
        let error_count = result.errors.len();
        let warning_count = result.warnings.len();
        let valid = result.is_valid();
        let passed = result.passes(strict);

        let summary = if !valid {
            format!(
                "Configuration has {} error(s) and {} warning(s)",
                error_count, warning_count
            )
        } else if !passed {
            "Validation failed due to warnings (strict mode)".to_string()
        } else if warning_count > 0 {
            format!("Configuration is valid with {} warning(s)", warning_count)
        } else {
            "Configuration is valid".to_string()
        };

        Self {
            valid,
            strict,
            passed,
            error_count,
            warning_count,
            summary,
            errors: result.errors.clone(),
            warnings: result.warnings.clone(),
        }
    }

    /// Render output in the specified format
    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), CliError> {
        match format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(self)?)?;
            }
            OutputFormat::Yaml => {
                write!(out, "{}", serde_yaml::to_string(self)?)?;
            }
            OutputFormat::Table => self.render_table(out)?,
        }
        out.flush()?;
        Ok(())
    }

    /// Render as a human-readable report
    fn render_table<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        if !self.errors.is_empty() {
            writeln!(out, "{} {}", "x".red(), "Configuration validation failed!".red().bold())?;
            writeln!(out)?;
            writeln!(out, "{}", "Errors:".red().bold())?;
            for error in &self.errors {
                render_violation(out, error, "x".red().to_string())?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", "Warnings:".yellow().bold())?;
            for warning in &self.warnings {
                render_violation(out, warning, "!".yellow().to_string())?;
            }
        }

        if self.valid {
            if !self.warnings.is_empty() {
                writeln!(out)?;
                writeln!(out, "{} {}", "+".green(), "Configuration is valid (with warnings)".green())?;
            } else {
                writeln!(out, "{} {}", "+".green(), "Configuration is valid!".green().bold())?;
            }

            if !self.passed {
                writeln!(
                    out,
                    "{} {}",
                    "x".red(),
                    "Validation failed due to warnings (strict mode)".red().bold()
                )?;
            }
        }

        Ok(())
    }
}

/// Render a single violation as a bullet with its code and path
fn render_violation<W: Write>(out: &mut W, violation: &Violation, icon: String) -> Result<(), CliError> {
    writeln!(
        out,
        "  {} {} {}",
        icon,
        violation.message,
        format!("[{} at {}]", violation.code, violation.path).dimmed()
    )?;
    if let Some(suggestion) = &violation.suggestion {
        writeln!(out, "    {} {}", "Fix:".dimmed(), suggestion.green())?;
    }
    Ok(())
}
