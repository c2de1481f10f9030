//! `organization` section rules

use super::{expect_object, expect_string, field_path, index_path};
use crate::patterns::{FEATURE_SETS, REGION};
use crate::validation::{RuleCode, ValidationResult, Violation};
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "organization";
const REQUIRED_FIELDS: [&str; 3] = ["feature_set", "default_region", "allowed_regions"];

/// Validates the organization root: feature set and region allow-list
pub struct OrganizationRule;

impl SectionRule for OrganizationRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn is_required(&self) -> bool {
        true
    }

    fn check(&self, value: &ConfigTree, _context: &SectionContext, result: &mut ValidationResult) {
        let Some(org) = expect_object(value, SECTION, result) else {
            return;
        };

        for field in REQUIRED_FIELDS {
            if !org.contains_key(field) {
                let path = field_path(SECTION, field);
                result.error(RuleCode::MissingField, format!("{} is required", path), path);
            }
        }

        if let Some(feature_set) = org.get("feature_set") {
            if !feature_set.as_str().is_some_and(|f| FEATURE_SETS.contains(&f)) {
                result.add(
                    Violation::error(
                        RuleCode::InvalidFeatureSet,
                        "organization.feature_set must be 'ALL' or 'CONSOLIDATED_BILLING'",
                        field_path(SECTION, "feature_set"),
                    )
                    .with_suggestion(format!("Allowed values: {}", FEATURE_SETS.join(", "))),
                );
            }
        }

        let regions_path = field_path(SECTION, "allowed_regions");
        let allowed_regions = org.get("allowed_regions").and_then(|regions| {
            let list = regions.as_array();
            if list.is_none() {
                result.error(
                    RuleCode::ExpectedList,
                    format!("{} must be a list", regions_path),
                    regions_path.clone(),
                );
            }
            list
        });

        if let Some(regions) = allowed_regions {
            for (i, region) in regions.iter().enumerate() {
                let path = index_path(&regions_path, i);
                match region.as_str() {
                    None => result.error(
                        RuleCode::ExpectedString,
                        format!("{} must be a string", path),
                        path,
                    ),
                    Some(r) if !REGION.is_match(r) => result.error(
                        RuleCode::InvalidRegion,
                        format!("Invalid region format: {}", r),
                        path,
                    ),
                    Some(_) => {}
                }
            }
        }

        let default_path = field_path(SECTION, "default_region");
        let default_region = org
            .get("default_region")
            .and_then(|region| expect_string(region, &default_path, result));

        // Membership is independent of region format validity.
        if let (Some(default_region), Some(regions)) = (default_region, allowed_regions) {
            if !regions.iter().any(|r| r.as_str() == Some(default_region)) {
                result.error(
                    RuleCode::DefaultRegionNotAllowed,
                    "organization.default_region must be in allowed_regions",
                    default_path,
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
        OrganizationRule.check(&value, &SectionContext::default(), &mut result);
        result
    }

    #[test]
    fn test_valid_organization() {
        let result = check(json!({
            "feature_set": "ALL",
            "default_region": "us-east-1",
            "allowed_regions": ["us-east-1", "eu-west-1"]
        }));
        assert!(result.is_valid());
    }

    #[test]
    fn test_missing_fields() {
        let result = check(json!({}));
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().all(|e| e.code == RuleCode::MissingField));
        assert_eq!(result.errors[2].message, "organization.allowed_regions is required");
    }

    #[test]
    fn test_invalid_feature_set() {
        let result = check(json!({
            "feature_set": "SOME",
            "default_region": "us-east-1",
            "allowed_regions": ["us-east-1"]
        }));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, RuleCode::InvalidFeatureSet);
    }

    #[test]
    fn test_default_region_not_allowed() {
        let result = check(json!({
            "feature_set": "CONSOLIDATED_BILLING",
            "default_region": "us-west-9",
            "allowed_regions": ["us-east-1"]
        }));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "organization.default_region must be in allowed_regions");
    }

    #[test]
    fn test_region_format() {
        let result = check(json!({
            "feature_set": "ALL",
            "default_region": "US_EAST_1",
            "allowed_regions": ["US_EAST_1", 5]
        }));
        let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![RuleCode::InvalidRegion, RuleCode::ExpectedString]);
        assert_eq!(result.errors[0].message, "Invalid region format: US_EAST_1");
        assert_eq!(result.errors[1].path, "organization.allowed_regions[1]");
    }

    #[test]
    fn test_allowed_regions_not_a_list() {
        let result = check(json!({
            "feature_set": "ALL",
            "default_region": "us-east-1",
            "allowed_regions": "us-east-1"
        }));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, RuleCode::ExpectedList);
    }

    #[test]
    fn test_non_string_default_region() {
        let result = check(json!({
            "feature_set": "ALL",
            "default_region": 5,
            "allowed_regions": ["us-east-1"]
        }));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, RuleCode::ExpectedString);
        assert_eq!(result.errors[0].path, "organization.default_region");
    }
}
