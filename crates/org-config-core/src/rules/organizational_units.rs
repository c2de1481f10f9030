//! `organizational_units` section rules

use std::collections::HashSet;

use super::{expect_list, field_path, index_path};
use crate::patterns::OU_NAME;
use crate::validation::{RuleCode, ValidationResult};
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "organizational_units";

/// Validates the list of organizational units
///
/// A repeated name is reported once per repeated occurrence, never for the
/// first one.
pub struct OrganizationalUnitsRule;

impl SectionRule for OrganizationalUnitsRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn is_required(&self) -> bool {
        true
    }

    fn check(&self, value: &ConfigTree, _context: &SectionContext, result: &mut ValidationResult) {
        let Some(ous) = expect_list(value, SECTION, result) else {
            return;
        };

        let mut seen = HashSet::new();
        for (i, ou) in ous.iter().enumerate() {
            let path = index_path(SECTION, i);
            let Some(ou) = ou.as_object() else {
                result.error(RuleCode::ExpectedObject, format!("{} must be an object", path), path);
                continue;
            };

            let name_path = field_path(&path, "name");
            let Some(name) = ou.get("name") else {
                result.error(RuleCode::MissingField, format!("{} is required", name_path), name_path);
                continue;
            };
            let Some(name) = name.as_str() else {
                result.error(RuleCode::ExpectedString, format!("{} must be a string", name_path), name_path);
                continue;
            };

            if !seen.insert(name) {
                result.error(
                    RuleCode::DuplicateOuName,
                    format!("Duplicate OU name: {}", name),
                    name_path.clone(),
                );
            }

            if !OU_NAME.is_match(name) {
                result.error(
                    RuleCode::InvalidName,
                    format!("OU name '{}' contains invalid characters", name),
                    name_path,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(value: ConfigTree) -> ValidationResult {
        let mut result = ValidationResult::new();
        OrganizationalUnitsRule.check(&value, &SectionContext::default(), &mut result);
        result
    }

    #[test]
    fn test_valid_units() {
        let result = check(json!([{"name": "Core"}, {"name": "Shared Services"}]));
        assert!(result.is_valid());
    }

    #[test]
    fn test_duplicate_reported_per_repeat() {
        let result = check(json!([{"name": "Core"}, {"name": "Core"}, {"name": "Core"}]));
        let dups = result.with_code(RuleCode::DuplicateOuName);
        assert_eq!(dups.len(), 2);
        assert_eq!(dups[0].path, "organizational_units[1].name");
        assert_eq!(dups[1].path, "organizational_units[2].name");
        assert_eq!(dups[0].message, "Duplicate OU name: Core");
    }

    #[test]
    fn test_invalid_name() {
        let result = check(json!([{"name": "Core/Infra"}]));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "OU name 'Core/Infra' contains invalid characters");
    }

    #[test]
    fn test_malformed_entries() {
        let result = check(json!(["Core", {"description": "x"}, {"name": ["Core"]}]));
        let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![RuleCode::ExpectedObject, RuleCode::MissingField, RuleCode::ExpectedString]
        );
    }

    #[test]
    fn test_not_a_list() {
        let result = check(json!({"Core": {}}));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "organizational_units must be a list");
    }
}
