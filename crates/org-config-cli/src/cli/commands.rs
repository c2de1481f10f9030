//! CLI argument definitions and the validate command

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use org_config_core::Validator;

use super::output::{OutputFormat, ValidationOutput};
use super::ExitCode;
use crate::error::CliError;

/// Organization configuration validator
///
/// Validates an organization configuration file (metadata, environments,
/// organizational units, accounts, policies, SSO and GitHub Actions access)
/// beyond what a schema checker can express.
#[derive(Parser, Debug)]
#[command(name = "org-config-validate")]
#[command(about = "Validate organization configuration files", long_about = None)]
#[command(version)]
pub struct ValidateCli {
    /// Path to the configuration file (YAML, JSON or TOML)
    #[arg(value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Treat warnings as errors
    #[arg(long, env = "ORG_CONFIG_STRICT")]
    pub strict: bool,

    /// Output format for validation results
    #[arg(long, value_enum, default_value = "table", env = "ORG_CONFIG_FORMAT")]
    pub format: OutputFormat,

    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

/// Execute the validate command, writing the report to `out`
pub fn execute_validate<W: Write>(cli: &ValidateCli, out: &mut W) -> Result<ExitCode, CliError> {
    tracing::info!(path = %cli.config.display(), strict = cli.strict, "Validating configuration");

    let result = Validator::new().validate_file(&cli.config);

    let output = ValidationOutput::from_result(&result, cli.strict);
    output.render(cli.format, out)?;

    let exit_code = ExitCode::from_validation_result(&result, cli.strict);
    tracing::info!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        exit_code = i32::from(exit_code),
        "Validation finished"
    );

    Ok(exit_code)
}
