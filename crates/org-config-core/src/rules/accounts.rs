//! `accounts` section rules
//!
//! Each account needs a unique resource-safe `name` and exactly one email
//! source: a literal `email`, or an `email_template` containing `{env}`.
//! Templates are instantiated for the probe environment (`test`) and the
//! resulting address takes part in the same uniqueness and format checks as
//! literal emails, so a template can collide with a literal address.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::{expect_list, expect_string, field_path, index_path};
use crate::patterns::{probe_email, EMAIL, ENV_PLACEHOLDER, RESOURCE_NAME};
use crate::validation::{RuleCode, ValidationResult, Violation};
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "accounts";

/// Validates member accounts and their OU references
pub struct AccountsRule;

/// Email an account will be provisioned with, and where it came from
struct ResolvedEmail {
    address: String,
    path: String,
}

impl AccountsRule {
    /// Resolve the literal or template-derived email of an account
    ///
    /// A literal `email` wins when both sources are present; the conflict
    /// itself is reported separately. The template is checked either way.
    fn resolve_email(
        account: &Map<String, Value>,
        path: &str,
        result: &mut ValidationResult,
    ) -> Option<ResolvedEmail> {
        let template = account
            .get("email_template")
            .and_then(|template| Self::check_template(template, path, result));

        if let Some(email) = account.get("email") {
            let email_path = field_path(path, "email");
            let address = expect_string(email, &email_path, result)?;
            return Some(ResolvedEmail {
                address: address.to_string(),
                path: email_path,
            });
        }

        template
    }

    /// Check a template for its placeholder and derive the probe address
    fn check_template(
        template: &Value,
        path: &str,
        result: &mut ValidationResult,
    ) -> Option<ResolvedEmail> {
        let template_path = field_path(path, "email_template");
        let template = expect_string(template, &template_path, result)?;
        if !template.contains(ENV_PLACEHOLDER) {
            result.add(
                Violation::error(
                    RuleCode::EmailTemplatePlaceholder,
                    format!("email_template must contain '{}' placeholder: {}", ENV_PLACEHOLDER, template),
                    template_path,
                )
                .with_suggestion("Insert '{env}' where the environment name belongs, e.g. aws+{env}@example.com"),
            );
            return None;
        }

        Some(ResolvedEmail {
            address: probe_email(template),
            path: template_path,
        })
    }
}

impl SectionRule for AccountsRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn is_required(&self) -> bool {
        true
    }

    fn check(&self, value: &ConfigTree, context: &SectionContext, result: &mut ValidationResult) {
        let Some(accounts) = expect_list(value, SECTION, result) else {
            return;
        };

        let mut names: HashSet<&str> = HashSet::new();
        let mut emails: HashSet<String> = HashSet::new();

        for (i, account) in accounts.iter().enumerate() {
            let path = index_path(SECTION, i);
            let Some(account) = account.as_object() else {
                result.error(RuleCode::ExpectedObject, format!("{} must be an object", path), path);
                continue;
            };

            let name_path = field_path(&path, "name");
            if !account.contains_key("name") {
                result.error(RuleCode::MissingField, format!("{} is required", name_path), name_path.clone());
            }

            match (account.contains_key("email"), account.contains_key("email_template")) {
                (false, false) => result.error(
                    RuleCode::EmailSourceMissing,
                    format!("{} must have either 'email' or 'email_template'", path),
                    path.clone(),
                ),
                (true, true) => result.error(
                    RuleCode::EmailSourceConflict,
                    format!("{} cannot have both 'email' and 'email_template'", path),
                    path.clone(),
                ),
                _ => {}
            }

            let name = account
                .get("name")
                .and_then(|name| expect_string(name, &name_path, result));
            if let Some(name) = name {
                if !names.insert(name) {
                    result.error(
                        RuleCode::DuplicateAccountName,
                        format!("Duplicate account name: {}", name),
                        name_path.clone(),
                    );
                }
                if !RESOURCE_NAME.is_match(name) {
                    result.error(
                        RuleCode::InvalidName,
                        format!(
                            "Account name '{}' should contain only alphanumeric characters, hyphens, and underscores",
                            name
                        ),
                        name_path.clone(),
                    );
                }
            }

            if let Some(email) = Self::resolve_email(account, &path, result) {
                if emails.contains(&email.address) {
                    result.error(
                        RuleCode::DuplicateAccountEmail,
                        format!("Duplicate account email/template: {}", email.address),
                        email.path.clone(),
                    );
                }
                if !EMAIL.is_match(&email.address) {
                    result.error(
                        RuleCode::InvalidEmail,
                        format!("Invalid email format: {}", email.address),
                        email.path,
                    );
                }
                emails.insert(email.address);
            }

            if let Some(ou) = account.get("ou") {
                let ou_path = field_path(&path, "ou");
                if let Some(ou) = expect_string(ou, &ou_path, result) {
                    if !context.has_ou(ou) {
                        result.error(
                            RuleCode::UnknownOu,
                            format!(
                                "Account '{}' references unknown OU: {}",
                                name.unwrap_or("unknown"),
                                ou
                            ),
                            ou_path,
                        );
                    }
                }
            }
        }
    }
}
