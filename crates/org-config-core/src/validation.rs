//! Violation model for configuration validation
//!
//! Every rule reports through a [`Violation`] carrying a stable [`RuleCode`],
//! the path of the offending value and a human-readable message. Rendering is
//! left to reporters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity levels for violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks validity
    Error,
    /// Advisory; escalated to failure in strict mode
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Cause-based grouping of rule codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Missing section/field or wrong container shape
    Structural,
    /// String fails a required pattern
    Format,
    /// Value outside a fixed allowed set
    Enumeration,
    /// Duplicate key across sibling entries
    Uniqueness,
    /// Reference to an entity that is not declared
    Referential,
    /// Document could not be loaded or decoded
    Load,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCategory::Structural => write!(f, "structural"),
            RuleCategory::Format => write!(f, "format"),
            RuleCategory::Enumeration => write!(f, "enumeration"),
            RuleCategory::Uniqueness => write!(f, "uniqueness"),
            RuleCategory::Referential => write!(f, "referential"),
            RuleCategory::Load => write!(f, "load"),
        }
    }
}

/// Machine-stable identifier for each validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCode {
    RootNotObject,
    MissingSection,
    MissingField,
    EmptyString,
    ExpectedObject,
    ExpectedList,
    ExpectedString,
    ExpectedBoolean,
    EmailSourceMissing,
    EmailSourceConflict,
    RecommendedEnvironmentMissing,
    AwsProfileMissing,
    InvalidName,
    InvalidRegion,
    InvalidEmail,
    EmailTemplatePlaceholder,
    InvalidRepository,
    InvalidTarget,
    InvalidFeatureSet,
    DuplicateOuName,
    DuplicateAccountName,
    DuplicateAccountEmail,
    DefaultRegionNotAllowed,
    UnknownOu,
    FileNotFound,
    FileUnreadable,
    ParseError,
}

impl RuleCode {
    /// Stable string form, identical to the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::RootNotObject => "ROOT_NOT_OBJECT",
            RuleCode::MissingSection => "MISSING_SECTION",
            RuleCode::MissingField => "MISSING_FIELD",
            RuleCode::EmptyString => "EMPTY_STRING",
            RuleCode::ExpectedObject => "EXPECTED_OBJECT",
            RuleCode::ExpectedList => "EXPECTED_LIST",
            RuleCode::ExpectedString => "EXPECTED_STRING",
            RuleCode::ExpectedBoolean => "EXPECTED_BOOLEAN",
            RuleCode::EmailSourceMissing => "EMAIL_SOURCE_MISSING",
            RuleCode::EmailSourceConflict => "EMAIL_SOURCE_CONFLICT",
            RuleCode::RecommendedEnvironmentMissing => "RECOMMENDED_ENVIRONMENT_MISSING",
            RuleCode::AwsProfileMissing => "AWS_PROFILE_MISSING",
            RuleCode::InvalidName => "INVALID_NAME",
            RuleCode::InvalidRegion => "INVALID_REGION",
            RuleCode::InvalidEmail => "INVALID_EMAIL",
            RuleCode::EmailTemplatePlaceholder => "EMAIL_TEMPLATE_PLACEHOLDER",
            RuleCode::InvalidRepository => "INVALID_REPOSITORY",
            RuleCode::InvalidTarget => "INVALID_TARGET",
            RuleCode::InvalidFeatureSet => "INVALID_FEATURE_SET",
            RuleCode::DuplicateOuName => "DUPLICATE_OU_NAME",
            RuleCode::DuplicateAccountName => "DUPLICATE_ACCOUNT_NAME",
            RuleCode::DuplicateAccountEmail => "DUPLICATE_ACCOUNT_EMAIL",
            RuleCode::DefaultRegionNotAllowed => "DEFAULT_REGION_NOT_ALLOWED",
            RuleCode::UnknownOu => "UNKNOWN_OU",
            RuleCode::FileNotFound => "FILE_NOT_FOUND",
            RuleCode::FileUnreadable => "FILE_UNREADABLE",
            RuleCode::ParseError => "PARSE_ERROR",
        }
    }

    /// Category of the rule this code belongs to
    pub fn category(&self) -> RuleCategory {
        match self {
            RuleCode::RootNotObject
            | RuleCode::MissingSection
            | RuleCode::MissingField
            | RuleCode::EmptyString
            | RuleCode::ExpectedObject
            | RuleCode::ExpectedList
            | RuleCode::ExpectedString
            | RuleCode::ExpectedBoolean
            | RuleCode::EmailSourceMissing
            | RuleCode::EmailSourceConflict
            | RuleCode::RecommendedEnvironmentMissing
            | RuleCode::AwsProfileMissing => RuleCategory::Structural,
            RuleCode::InvalidName
            | RuleCode::InvalidRegion
            | RuleCode::InvalidEmail
            | RuleCode::EmailTemplatePlaceholder
            | RuleCode::InvalidRepository => RuleCategory::Format,
            RuleCode::InvalidTarget | RuleCode::InvalidFeatureSet => RuleCategory::Enumeration,
            RuleCode::DuplicateOuName
            | RuleCode::DuplicateAccountName
            | RuleCode::DuplicateAccountEmail => RuleCategory::Uniqueness,
            RuleCode::DefaultRegionNotAllowed | RuleCode::UnknownOu => RuleCategory::Referential,
            RuleCode::FileNotFound | RuleCode::FileUnreadable | RuleCode::ParseError => {
                RuleCategory::Load
            }
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule that produced this violation
    pub code: RuleCode,
    /// Severity of the violation
    pub severity: Severity,
    /// Path to the offending value (e.g. `accounts[2].email`)
    pub path: String,
    /// Human-readable message
    pub message: String,
    /// Suggested fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    /// Create a new error violation
    pub fn error(code: RuleCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create a new warning violation
    pub fn warning(code: RuleCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion to the violation
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Category of the rule that produced this violation
    pub fn category(&self) -> RuleCategory {
        self.code.category()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at '{}': {}", self.severity, self.code, self.path, self.message)
    }
}

/// Errors and warnings produced by one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Violations that block validity
    pub errors: Vec<Violation>,
    /// Advisory violations
    pub warnings: Vec<Violation>,
}

impl ValidationResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation, routing it by severity
    pub fn add(&mut self, violation: Violation) {
        match violation.severity {
            Severity::Error => self.errors.push(violation),
            Severity::Warning => self.warnings.push(violation),
        }
    }

    /// Record an error
    pub fn error(&mut self, code: RuleCode, message: impl Into<String>, path: impl Into<String>) {
        self.add(Violation::error(code, message, path));
    }

    /// Record a warning
    pub fn warning(&mut self, code: RuleCode, message: impl Into<String>, path: impl Into<String>) {
        self.add(Violation::warning(code, message, path));
    }

    /// Whether the configuration has no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any warnings remain
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Final verdict, escalating warnings to failure when `strict` is set
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid() && !(strict && self.has_warnings())
    }

    /// Check whether any violation carries the given code
    pub fn has_code(&self, code: RuleCode) -> bool {
        self.iter().any(|v| v.code == code)
    }

    /// All violations carrying the given code
    pub fn with_code(&self, code: RuleCode) -> Vec<&Violation> {
        self.iter().filter(|v| v.code == code).collect()
    }

    /// Iterate over errors followed by warnings
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_rule_code_matches_serialized_form() {
        for code in [
            RuleCode::RootNotObject,
            RuleCode::RecommendedEnvironmentMissing,
            RuleCode::DuplicateAccountEmail,
            RuleCode::UnknownOu,
            RuleCode::ParseError,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::Value::String(code.as_str().to_string()));
        }
    }

    #[test]
    fn test_rule_code_categories() {
        assert_eq!(RuleCode::MissingSection.category(), RuleCategory::Structural);
        assert_eq!(RuleCode::InvalidRegion.category(), RuleCategory::Format);
        assert_eq!(RuleCode::InvalidTarget.category(), RuleCategory::Enumeration);
        assert_eq!(RuleCode::DuplicateOuName.category(), RuleCategory::Uniqueness);
        assert_eq!(RuleCode::UnknownOu.category(), RuleCategory::Referential);
        assert_eq!(RuleCode::FileNotFound.category(), RuleCategory::Load);
    }

    #[test]
    fn test_violation_builders() {
        let violation = Violation::error(RuleCode::InvalidEmail, "Invalid email format: x", "accounts[0].email")
            .with_suggestion("Use the form user@host.tld");

        assert_eq!(violation.severity, Severity::Error);
        assert_eq!(violation.category(), RuleCategory::Format);
        assert_eq!(violation.suggestion.as_deref(), Some("Use the form user@host.tld"));
        assert_eq!(
            violation.to_string(),
            "[error] INVALID_EMAIL at 'accounts[0].email': Invalid email format: x"
        );
    }

    #[test]
    fn test_result_routes_by_severity() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.passes(true));

        result.warning(RuleCode::RecommendedEnvironmentMissing, "Missing recommended environment: prod", "environments");
        assert!(result.is_valid());
        assert!(result.passes(false));
        assert!(!result.passes(true));

        result.error(RuleCode::MissingSection, "Missing required section: accounts", "accounts");
        assert!(!result.is_valid());
        assert!(!result.passes(false));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.iter().count(), 2);
        assert!(result.has_code(RuleCode::MissingSection));
        assert_eq!(result.with_code(RuleCode::RecommendedEnvironmentMissing).len(), 1);
    }
}
