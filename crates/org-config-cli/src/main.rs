//! Organization Config Validator CLI
//!
//! # Usage
//!
//! ```bash
//! org-config-validate config/org.yaml
//! org-config-validate config/org.yaml --strict --format json
//! ```
//!
//! # Exit Codes
//!
//! - 0: Configuration is valid
//! - 1: Errors found, the file could not be loaded, or warnings under `--strict`

use clap::Parser;
use org_config_cli::{run_cli, ValidateCli};

fn main() {
    let cli = ValidateCli::parse();

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
