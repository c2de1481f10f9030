//! Validation engine
//!
//! The [`Validator`] owns an ordered list of [`SectionRule`]s and walks them
//! over a decoded configuration tree. Each call builds a fresh
//! [`ValidationResult`] that is threaded through every rule by `&mut` and
//! returned by value.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use crate::error::LoadError;
use crate::loader::load_config;
use crate::patterns::{OPTIONAL_SECTIONS, REQUIRED_SECTIONS};
use crate::rules::{
    AccountsRule, EnvironmentsRule, GithubActionsRule, MetadataRule, OrganizationRule,
    OrganizationalUnitsRule, PoliciesRule, SsoRule,
};
use crate::validation::{RuleCode, ValidationResult};
use crate::ConfigTree;

/// Trait for per-section validation rules
pub trait SectionRule: Send + Sync {
    /// Top-level key this rule validates
    fn section(&self) -> &'static str;

    /// Whether the section must be present
    fn is_required(&self) -> bool {
        false
    }

    /// Validate the section's raw value, appending to `result`
    fn check(&self, value: &ConfigTree, context: &SectionContext, result: &mut ValidationResult);
}

/// Cross-section data derived once per run
#[derive(Debug, Clone, Default)]
pub struct SectionContext {
    declared_ous: BTreeSet<String>,
}

impl SectionContext {
    /// Derive the context from the configuration root
    ///
    /// Only string `name`s of object entries in a list-shaped
    /// `organizational_units` are declared; any other shape declares nothing.
    pub fn from_config(root: &serde_json::Map<String, ConfigTree>) -> Self {
        let declared_ous = root
            .get("organizational_units")
            .and_then(|ous| ous.as_array())
            .map(|ous| {
                ous.iter()
                    .filter_map(|ou| ou.get("name").and_then(|n| n.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { declared_ous }
    }

    /// Create a context with the given OU names declared
    #[cfg(test)]
    pub(crate) fn with_ous<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared_ous: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether an OU with this name is declared
    pub fn has_ou(&self, name: &str) -> bool {
        self.declared_ous.contains(name)
    }

    /// Declared OU names in sorted order
    #[cfg(test)]
    pub(crate) fn declared_ous(&self) -> impl Iterator<Item = &str> {
        self.declared_ous.iter().map(String::as_str)
    }
}

/// Main validator for organization configurations
pub struct Validator {
    rules: Vec<Box<dyn SectionRule>>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a validator with the built-in section rules
    pub fn new() -> Self {
        let mut validator = Self { rules: Vec::new() };
        validator.add_builtin_rules();
        validator
    }

    /// Register the built-in rules in dispatch order
    fn add_builtin_rules(&mut self) {
        self.rules.push(Box::new(MetadataRule));
        self.rules.push(Box::new(EnvironmentsRule));
        self.rules.push(Box::new(OrganizationRule));
        self.rules.push(Box::new(OrganizationalUnitsRule));
        self.rules.push(Box::new(AccountsRule));
        self.rules.push(Box::new(PoliciesRule));
        self.rules.push(Box::new(SsoRule));
        self.rules.push(Box::new(GithubActionsRule));
    }

    /// Section names in dispatch order
    pub fn sections(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.section())
    }

    /// Validate a decoded configuration tree
    pub fn validate(&self, config: &ConfigTree) -> ValidationResult {
        let start = Instant::now();
        let mut result = ValidationResult::new();

        let Some(root) = config.as_object() else {
            result.error(
                RuleCode::RootNotObject,
                format!(
                    "Configuration root must be an object, found {}",
                    type_name(config)
                ),
                "$",
            );
            return result;
        };

        for rule in self.rules.iter().filter(|r| r.is_required()) {
            if !root.contains_key(rule.section()) {
                result.error(
                    RuleCode::MissingSection,
                    format!("Missing required section: {}", rule.section()),
                    rule.section(),
                );
            }
        }

        for key in root.keys() {
            if !REQUIRED_SECTIONS.contains(&key.as_str()) && !OPTIONAL_SECTIONS.contains(&key.as_str()) {
                tracing::debug!(section = %key, "Ignoring unrecognized section");
            }
        }

        let context = SectionContext::from_config(root);

        for rule in &self.rules {
            if let Some(value) = root.get(rule.section()) {
                tracing::debug!(section = rule.section(), "Validating section");
                rule.check(value, &context, &mut result);
            }
        }

        tracing::debug!(
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Validation complete"
        );

        result
    }

    /// Load and validate a configuration file
    ///
    /// A file that cannot be found, read or decoded yields a result holding
    /// exactly that one error; no section checks run.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> ValidationResult {
        let path = path.as_ref();
        match load_config(path) {
            Ok(config) => self.validate(&config),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to load configuration");
                let code = match &err {
                    LoadError::NotFound(_) => RuleCode::FileNotFound,
                    LoadError::Io { .. } => RuleCode::FileUnreadable,
                    LoadError::Parse { .. } => RuleCode::ParseError,
                };
                let mut result = ValidationResult::new();
                result.error(code, err.to_string(), path.display().to_string());
                result
            }
        }
    }
}

/// Name of a tree node's type for messages
pub(crate) fn type_name(value: &ConfigTree) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}
