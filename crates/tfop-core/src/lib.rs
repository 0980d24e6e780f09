//! tfop Core - Pure helpers for the Terraform workspace controller
//!
//! This crate provides the decision logic that needs no cluster access:
//! - `version`: Remote service version classification and the modern-behavior gate
//! - `output`: Terraform state output stringification
//! - `wildcard`: Wildcard name matching for workspace and project selectors

pub mod error;
pub mod output;
pub mod version;
pub mod wildcard;

pub use error::{CoreError, Result};
pub use output::format_output;
pub use version::{
    ClassifiedVersion, LEGACY_VERSION_THRESHOLD, SEMANTIC_VERSION_BASE, VersionFormat, classify,
    parse_version, supports_modern_behavior, uses_modern_behavior,
};
pub use wildcard::match_wildcard_name;
