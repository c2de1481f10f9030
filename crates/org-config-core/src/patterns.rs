//! Named patterns and fixed value sets shared by rules and tests

use regex::Regex;
use std::sync::LazyLock;

/// Resource-name-safe charset for metadata and account names
pub static RESOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid resource name pattern"));

/// Organizational unit names additionally allow whitespace
pub static OU_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\s-]+$").expect("valid OU name pattern"));

/// Region identifiers such as `us-east-1`
pub static REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid region pattern"));

/// Minimal `user@host.tld` shape
pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid email pattern"));

/// `org/repo` repository slug
pub static REPOSITORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("valid repository pattern")
});

/// Sections every configuration must declare, in dispatch order
pub const REQUIRED_SECTIONS: [&str; 5] = [
    "metadata",
    "environments",
    "organization",
    "organizational_units",
    "accounts",
];

/// Sections validated only when present
pub const OPTIONAL_SECTIONS: [&str; 3] = ["policies", "sso", "github_actions"];

/// Environments that should exist; their absence is a warning
pub const RECOMMENDED_ENVIRONMENTS: [&str; 3] = ["dev", "qa", "prod"];

/// Allowed values for `environments.<name>.target`
pub const ENVIRONMENT_TARGETS: [&str; 2] = ["aws", "localstack"];

/// Target that expects a named credentials profile
pub const AWS_TARGET: &str = "aws";

/// Allowed values for `organization.feature_set`
pub const FEATURE_SETS: [&str; 2] = ["ALL", "CONSOLIDATED_BILLING"];

/// Placeholder every email template must contain
pub const ENV_PLACEHOLDER: &str = "{env}";

/// Environment token substituted into templates for uniqueness and format checks
pub const TEMPLATE_PROBE_ENV: &str = "test";

/// Instantiate an email template for the probe environment
pub fn probe_email(template: &str) -> String {
    template.replace(ENV_PLACEHOLDER, TEMPLATE_PROBE_ENV)
}
