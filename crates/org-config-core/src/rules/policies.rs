//! `policies` section rules

use super::{check_named_objects, expect_list, expect_object, field_path};
use crate::validation::ValidationResult;
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "policies";

/// Validates tag policies and service control policies
///
/// Service control policy entries are passed through to provisioning as-is,
/// so only the list shape is checked.
pub struct PoliciesRule;

impl SectionRule for PoliciesRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn check(&self, value: &ConfigTree, _context: &SectionContext, result: &mut ValidationResult) {
        let Some(policies) = expect_object(value, SECTION, result) else {
            return;
        };

        if let Some(tag_policies) = policies.get("tag_policies") {
            check_named_objects(tag_policies, &field_path(SECTION, "tag_policies"), result);
        }

        if let Some(scps) = policies.get("service_control_policies") {
            expect_list(scps, &field_path(SECTION, "service_control_policies"), result);
        }
    }
}
