//! `sso` section rules

use super::{check_named_objects, check_optional_bool, expect_object, field_path};
use crate::validation::ValidationResult;
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "sso";

/// Validates single sign-on settings and permission sets
pub struct SsoRule;

impl SectionRule for SsoRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn check(&self, value: &ConfigTree, _context: &SectionContext, result: &mut ValidationResult) {
        let Some(sso) = expect_object(value, SECTION, result) else {
            return;
        };

        check_optional_bool(sso, "enabled", SECTION, result);

        if let Some(permission_sets) = sso.get("permission_sets") {
            check_named_objects(permission_sets, &field_path(SECTION, "permission_sets"), result);
        }
    }
}
