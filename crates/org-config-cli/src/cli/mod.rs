//! CLI module for the organization config validator
//!
//! Argument parsing lives in `commands`, result rendering in `output`. This
//! module maps validation outcomes to process exit codes.

pub mod commands;
pub mod output;

pub use commands::ValidateCli;
pub use output::{OutputFormat, ValidationOutput};

use org_config_core::ValidationResult;

use crate::error::CliError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Configuration is valid
    Success = 0,
    /// Errors present, the file could not be loaded, or warnings under `--strict`
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a validation result
    pub fn from_validation_result(result: &ValidationResult, strict: bool) -> Self {
        if result.passes(strict) {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: ValidateCli) -> Result<ExitCode, CliError> {
    crate::logging::init_logging(cli.verbose, cli.quiet, cli.log_json);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute_validate(&cli, &mut out)
}
