//! `metadata` section rules

use super::{expect_object, field_path};
use crate::patterns::RESOURCE_NAME;
use crate::validation::{RuleCode, ValidationResult, Violation};
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "metadata";
const REQUIRED_FIELDS: [&str; 2] = ["name", "description"];

/// Requires a resource-name-safe `name` and a `description`
pub struct MetadataRule;

impl SectionRule for MetadataRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn is_required(&self) -> bool {
        true
    }

    fn check(&self, value: &ConfigTree, _context: &SectionContext, result: &mut ValidationResult) {
        let Some(metadata) = expect_object(value, SECTION, result) else {
            return;
        };

        for field in REQUIRED_FIELDS {
            let path = field_path(SECTION, field);
            match metadata.get(field) {
                None => result.error(RuleCode::MissingField, format!("{} is required", path), path),
                Some(v) if v.as_str().is_some_and(|s| !s.trim().is_empty()) => {}
                Some(_) => result.error(
                    RuleCode::EmptyString,
                    format!("{} must be a non-empty string", path),
                    path,
                ),
            }
        }

        // Resource naming downstream accepts only this charset.
        if let Some(name) = metadata.get("name").and_then(|n| n.as_str()) {
            if !RESOURCE_NAME.is_match(name) {
                result.add(
                    Violation::error(
                        RuleCode::InvalidName,
                        "metadata.name should contain only alphanumeric characters, hyphens, and underscores",
                        field_path(SECTION, "name"),
                    )
                    .with_suggestion("Replace spaces and punctuation with '-' or '_'"),
                );
            }
        }
    }
}
