//! `environments` section rules

use super::{expect_object, expect_string, field_path};
use crate::patterns::{AWS_TARGET, ENVIRONMENT_TARGETS, RECOMMENDED_ENVIRONMENTS};
use crate::validation::{RuleCode, ValidationResult, Violation};
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "environments";

/// Validates deployment environments keyed by name
///
/// Missing `dev`/`qa`/`prod` environments and AWS environments without a
/// credentials `profile` are warnings; everything else is an error.
pub struct EnvironmentsRule;

impl SectionRule for EnvironmentsRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn is_required(&self) -> bool {
        true
    }

    fn check(&self, value: &ConfigTree, _context: &SectionContext, result: &mut ValidationResult) {
        let Some(environments) = expect_object(value, SECTION, result) else {
            return;
        };

        for env in RECOMMENDED_ENVIRONMENTS {
            if !environments.contains_key(env) {
                result.warning(
                    RuleCode::RecommendedEnvironmentMissing,
                    format!("Missing recommended environment: {}", env),
                    field_path(SECTION, env),
                );
            }
        }

        for (name, env_config) in environments {
            let path = field_path(SECTION, name);
            let Some(env) = env_config.as_object() else {
                result.error(RuleCode::ExpectedObject, format!("{} must be an object", path), path);
                continue;
            };

            let target_path = field_path(&path, "target");
            match env.get("target") {
                None => result.error(
                    RuleCode::MissingField,
                    format!("{} is required", target_path),
                    target_path,
                ),
                Some(target)
                    if !target
                        .as_str()
                        .is_some_and(|t| ENVIRONMENT_TARGETS.contains(&t)) =>
                {
                    result.add(
                        Violation::error(
                            RuleCode::InvalidTarget,
                            format!("{} must be 'aws' or 'localstack'", target_path),
                            target_path,
                        )
                        .with_suggestion(format!("Allowed values: {}", ENVIRONMENT_TARGETS.join(", "))),
                    );
                }
                Some(_) => {}
            }

            let region_path = field_path(&path, "region");
            match env.get("region") {
                None => result.error(
                    RuleCode::MissingField,
                    format!("{} is required", region_path),
                    region_path,
                ),
                Some(region) => {
                    expect_string(region, &region_path, result);
                }
            }

            let is_aws = env.get("target").and_then(|t| t.as_str()) == Some(AWS_TARGET);
            if is_aws && !env.contains_key("profile") {
                let profile_path = field_path(&path, "profile");
                result.warning(
                    RuleCode::AwsProfileMissing,
                    format!("{} recommended for AWS targets", profile_path),
                    profile_path,
                );
            }
        }
    }
}
