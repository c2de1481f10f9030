//! Organization Config Validator core
//!
//! Semantic validation for organization configuration documents describing a
//! cloud-account hierarchy: metadata, environments, the organization root,
//! organizational units, accounts, policies, SSO and GitHub Actions access.
//!
//! ## Architecture
//!
//! 1. **Loader** (`loader`): decodes a YAML, JSON or TOML document into a
//!    [`ConfigTree`].
//!
//! 2. **Validator** (`validator`): dispatches the section rules in a fixed
//!    order over the tree and accumulates violations into a fresh
//!    [`ValidationResult`] per call.
//!
//! 3. **Rules** (`rules/`): one [`SectionRule`] per top-level section. The
//!    accounts rule cross-references the declared organizational units.
//!
//! 4. **Validation model** (`validation`): [`Violation`] records with a stable
//!    [`RuleCode`], the offending path and a human message.
//!
//! ## Example
//!
//! ```rust
//! use org_config_core::Validator;
//!
//! let config = serde_json::json!({
//!     "metadata": { "name": "acme", "description": "Acme organization" },
//! });
//!
//! let result = Validator::new().validate(&config);
//! assert!(!result.is_valid());
//! assert!(result
//!     .errors
//!     .iter()
//!     .any(|e| e.message == "Missing required section: accounts"));
//! ```

pub mod error;
pub mod loader;
pub mod patterns;
pub mod rules;
pub mod validation;
pub mod validator;

pub use error::{LoadError, Result};
pub use loader::{load_config, parse_config_str, DocumentFormat};
pub use validation::{RuleCategory, RuleCode, Severity, ValidationResult, Violation};
pub use validator::{SectionContext, SectionRule, Validator};

/// Decoded configuration document.
///
/// Mappings keep document order, so violations are reported in the order
/// entries appear in the file.
pub type ConfigTree = serde_json::Value;
