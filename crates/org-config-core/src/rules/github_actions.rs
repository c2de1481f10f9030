//! `github_actions` section rules

use super::{check_optional_bool, expect_list, expect_object, expect_string, field_path, index_path};
use crate::patterns::REPOSITORY;
use crate::validation::{RuleCode, ValidationResult};
use crate::validator::{SectionContext, SectionRule};
use crate::ConfigTree;

const SECTION: &str = "github_actions";

/// Validates the GitHub Actions access configuration
///
/// Repository entries without a `repo` field are left alone.
pub struct GithubActionsRule;

impl SectionRule for GithubActionsRule {
    fn section(&self) -> &'static str {
        SECTION
    }

    fn check(&self, value: &ConfigTree, _context: &SectionContext, result: &mut ValidationResult) {
        let Some(github) = expect_object(value, SECTION, result) else {
            return;
        };

        check_optional_bool(github, "enabled", SECTION, result);

        let Some(repositories) = github.get("repositories") else {
            return;
        };
        let repositories_path = field_path(SECTION, "repositories");
        let Some(repositories) = expect_list(repositories, &repositories_path, result) else {
            return;
        };

        for (i, entry) in repositories.iter().enumerate() {
            let Some(repo) = entry.get("repo") else {
                continue;
            };
            let repo_path = field_path(&index_path(&repositories_path, i), "repo");
            let Some(repo) = expect_string(repo, &repo_path, result) else {
                continue;
            };
            if !REPOSITORY.is_match(repo) {
                result.error(
                    RuleCode::InvalidRepository,
                    format!("{} has invalid format (should be 'org/repo')", repo_path),
                    repo_path,
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
        GithubActionsRule.check(&value, &SectionContext::default(), &mut result);
        result
    }

    #[test]
    fn test_valid_repositories() {
        let result = check(json!({
            "enabled": true,
            "repositories": [
                {"repo": "acme/infrastructure", "environments": ["dev"]},
                {"repo": "acme/web.app"},
                {"branch": "main"},
                "ignored"
            ]
        }));
        assert!(result.is_valid());
    }

    #[test]
    fn test_invalid_repo_format() {
        let result = check(json!({"repositories": [{"repo": "acme"}, {"repo": "acme/a/b"}]}));
        assert_eq!(result.errors.len(), 2);
        assert_eq!(
            result.errors[0].message,
            "github_actions.repositories[0].repo has invalid format (should be 'org/repo')"
        );
        assert_eq!(result.errors[1].path, "github_actions.repositories[1].repo");
    }

    #[test]
    fn test_wrong_shapes() {
        let result = check(json!({"enabled": 1, "repositories": {"repo": "acme/x"}}));
        let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![RuleCode::ExpectedBoolean, RuleCode::ExpectedList]);
    }

    #[test]
    fn test_non_string_repo() {
        let result = check(json!({"repositories": [{"repo": 12}]}));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, RuleCode::ExpectedString);
    }

    #[test]
    fn test_not_an_object() {
        let result = check(json!(["acme/x"]));
        assert_eq!(result.errors[0].message, "github_actions must be an object");
    }
}
