//! Section rules for organization configuration validation
//!
//! One [`SectionRule`](crate::SectionRule) per top-level section. Rules are
//! pure with respect to the accumulator: they read the section's raw value
//! and the shared [`SectionContext`](crate::SectionContext) and only append
//! violations.

pub mod accounts;
pub mod environments;
pub mod github_actions;
pub mod metadata;
pub mod organization;
pub mod organizational_units;
pub mod policies;
pub mod sso;

pub use accounts::AccountsRule;
pub use environments::EnvironmentsRule;
pub use github_actions::GithubActionsRule;
pub use metadata::MetadataRule;
pub use organization::OrganizationRule;
pub use organizational_units::OrganizationalUnitsRule;
pub use policies::PoliciesRule;
pub use sso::SsoRule;

use serde_json::{Map, Value};

use crate::validation::{RuleCode, ValidationResult};

/// Path of a mapping entry below `parent`
pub(crate) fn field_path(parent: &str, key: &str) -> String {
    format!("{}.{}", parent, key)
}

/// Path of a list element below `parent`
pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Borrow `value` as a mapping, reporting `EXPECTED_OBJECT` otherwise
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
    result: &mut ValidationResult,
) -> Option<&'a Map<String, Value>> {
    let object = value.as_object();
    if object.is_none() {
        result.error(RuleCode::ExpectedObject, format!("{} must be an object", path), path);
    }
    object
}

/// Borrow `value` as a list, reporting `EXPECTED_LIST` otherwise
pub(crate) fn expect_list<'a>(
    value: &'a Value,
    path: &str,
    result: &mut ValidationResult,
) -> Option<&'a Vec<Value>> {
    let list = value.as_array();
    if list.is_none() {
        result.error(RuleCode::ExpectedList, format!("{} must be a list", path), path);
    }
    list
}

/// Borrow `value` as a string, reporting `EXPECTED_STRING` otherwise
pub(crate) fn expect_string<'a>(
    value: &'a Value,
    path: &str,
    result: &mut ValidationResult,
) -> Option<&'a str> {
    let string = value.as_str();
    if string.is_none() {
        result.error(RuleCode::ExpectedString, format!("{} must be a string", path), path);
    }
    string
}

/// Report `EXPECTED_BOOLEAN` when an `enabled`-style flag is present but not a boolean
pub(crate) fn check_optional_bool(
    object: &Map<String, Value>,
    key: &str,
    parent: &str,
    result: &mut ValidationResult,
) {
    if let Some(value) = object.get(key) {
        if !value.is_boolean() {
            let path = field_path(parent, key);
            result.error(RuleCode::ExpectedBoolean, format!("{} must be a boolean", path), path);
        }
    }
}

/// Validate a list of objects that each need a `name` field
///
/// Shared by `policies.tag_policies` and `sso.permission_sets`.
pub(crate) fn check_named_objects(value: &Value, path: &str, result: &mut ValidationResult) {
    let Some(items) = expect_list(value, path, result) else {
        return;
    };

    for (i, item) in items.iter().enumerate() {
        let item_path = index_path(path, i);
        match item.as_object() {
            None => result.error(
                RuleCode::ExpectedObject,
                format!("{} must be an object", item_path),
                item_path,
            ),
            Some(object) if !object.contains_key("name") => {
                let name_path = field_path(&item_path, "name");
                result.error(
                    RuleCode::MissingField,
                    format!("{} is required", name_path),
                    name_path,
                );
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(field_path("metadata", "name"), "metadata.name");
        assert_eq!(index_path("accounts", 2), "accounts[2]");
        assert_eq!(field_path(&index_path("accounts", 2), "email"), "accounts[2].email");
    }

    #[test]
    fn test_expect_helpers_report_shape() {
        let mut result = ValidationResult::new();
        assert!(expect_object(&json!([]), "sso", &mut result).is_none());
        assert!(expect_list(&json!({}), "accounts", &mut result).is_none());
        assert!(expect_string(&json!(3), "accounts[0].name", &mut result).is_none());
        assert!(expect_string(&json!("ok"), "accounts[1].name", &mut result).is_some());

        let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![RuleCode::ExpectedObject, RuleCode::ExpectedList, RuleCode::ExpectedString]
        );
        assert_eq!(result.errors[0].message, "sso must be an object");
    }

    #[test]
    fn test_named_objects() {
        let mut result = ValidationResult::new();
        check_named_objects(
            &json!([{"name": "a"}, "b", {"description": "c"}]),
            "sso.permission_sets",
            &mut result,
        );
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].message, "sso.permission_sets[1] must be an object");
        assert_eq!(result.errors[1].message, "sso.permission_sets[2].name is required");
        assert_eq!(result.errors[1].path, "sso.permission_sets[2].name");
    }
}
