//! Integration tests for the validate command against real files

use clap::Parser;
use org_config_cli::cli::commands::execute_validate;
use org_config_cli::{ExitCode, ValidateCli};
use std::io::Write;
use std::path::{Path, PathBuf};

fn core_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("org-config-core")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(path: &Path, extra: &[&str]) -> (ExitCode, String) {
    let mut args = vec!["org-config-validate".to_string(), path.display().to_string()];
    args.extend(extra.iter().map(|s| s.to_string()));
    let cli = ValidateCli::try_parse_from(args).unwrap();

    let mut out = Vec::new();
    let code = execute_validate(&cli, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

const WARNING_ONLY: &str = r#"
metadata:
  name: acme
  description: Acme
environments:
  dev:
    target: localstack
    region: us-east-1
  qa:
    target: localstack
    region: us-east-1
organization:
  feature_set: ALL
  default_region: us-east-1
  allowed_regions: [us-east-1]
organizational_units:
  - name: Core
accounts:
  - name: log-archive
    email: aws+logs@acme.example
    ou: Core
"#;

#[test]
fn test_valid_file_exits_zero() {
    let (code, text) = run(&core_fixture("valid.yaml"), &[]);
    assert_eq!(code, ExitCode::Success);
    assert!(text.contains("Configuration is valid!"));
}

#[test]
fn test_invalid_file_exits_one() {
    let (code, text) = run(&core_fixture("invalid.yaml"), &["--format", "json"]);
    assert_eq!(code, ExitCode::Failure);

    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["error_count"], 11);
}

#[test]
fn test_malformed_file_exits_one() {
    let (code, text) = run(&core_fixture("malformed.yaml"), &["--format", "json"]);
    assert_eq!(code, ExitCode::Failure);

    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["errors"][0]["code"], "PARSE_ERROR");
}

#[test]
fn test_warnings_fail_only_in_strict_mode() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(WARNING_ONLY.as_bytes()).unwrap();

    let (code, text) = run(file.path(), &[]);
    assert_eq!(code, ExitCode::Success);
    assert!(text.contains("Missing recommended environment: prod"));

    let (code, text) = run(file.path(), &["--strict"]);
    assert_eq!(code, ExitCode::Failure);
    assert!(text.contains("Validation failed due to warnings (strict mode)"));
}

#[test]
fn test_json_document_is_accepted() {
    let yaml = std::fs::read_to_string(core_fixture("valid.yaml")).unwrap();
    let value: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(serde_json::to_string_pretty(&value).unwrap().as_bytes()).unwrap();

    let (code, _) = run(file.path(), &["--format", "yaml"]);
    assert_eq!(code, ExitCode::Success);
}
