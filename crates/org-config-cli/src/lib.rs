//! Organization Config Validator CLI
//!
//! Thin shell around [`org_config_core`]: loads a configuration file, runs
//! the validator, renders the result and maps it to a process exit code.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Validate a configuration file
//! org-config-validate org.yaml
//!
//! # Treat warnings as failures
//! org-config-validate org.yaml --strict
//!
//! # Machine-readable output
//! org-config-validate org.yaml --format json
//! ```

pub mod cli;
pub mod error;
pub mod logging;

pub use cli::{ExitCode, OutputFormat, ValidateCli};
pub use error::CliError;

/// Run the CLI application
///
/// This is the main entry point for the CLI binary. Rendering failures are
/// reported on stderr and treated as a failed validation.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use org_config_cli::{run_cli, ValidateCli};
///
/// fn main() {
///     let cli = ValidateCli::parse();
///     let exit_code = run_cli(cli);
///     std::process::exit(exit_code.into());
/// }
/// ```
pub fn run_cli(cli: ValidateCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::Failure
        }
    }
}
