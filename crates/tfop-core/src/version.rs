//! Remote service version classification
//!
//! Terraform Enterprise reports its release in one of two shapes:
//! - **Legacy**: date coded `vYYYYMM-N` (e.g. `v202409-1`)
//! - **Semantic**: `MAJOR.MINOR.PATCH` with an optional `-pre` / `+build` tail
//!
//! Both are folded into a single `i64` space so callers can compare releases
//! numerically. Every semantic encoding is at least [`SEMANTIC_VERSION_BASE`],
//! far above the largest legacy encoding (`9999999`), so the two ranges never
//! collide and a semantic release always sorts after a legacy one.
//!
//! The encoding is one-way: there is no decoder back to a version string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{CoreError, Result};

/// Oldest legacy release (`v202409-1`) that supports the modern behavior
pub const LEGACY_VERSION_THRESHOLD: i64 = 2_024_091;

/// Every semantic encoding starts at or above this value
pub const SEMANTIC_VERSION_BASE: i64 = 300_000_000;

/// Largest accepted major, minor or patch component
///
/// Each component owns three decimal digits of the encoding.
pub const MAX_SEMANTIC_COMPONENT: u64 = 999;

// Revision is exactly one digit: `v202409-10` is rejected.
static LEGACY_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v([0-9]{6})-([0-9])$").expect("valid legacy version regex"));

// Any `-` or `+` tail is accepted and ignored.
static SEMANTIC_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:[-+].*)?$").expect("valid semantic version regex")
});

/// Which grammar a version string matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionFormat {
    Legacy,
    Semantic,
}

impl std::fmt::Display for VersionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Legacy => "legacy",
            Self::Semantic => "semantic",
        };
        write!(f, "{}", s)
    }
}

/// Result of classifying a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedVersion {
    /// Numeric encoding, comparable across both formats
    pub encoded: i64,

    /// Whether the input used the semantic grammar
    pub is_semantic: bool,
}

impl ClassifiedVersion {
    /// Grammar the classified input matched
    pub fn format(&self) -> VersionFormat {
        if self.is_semantic {
            VersionFormat::Semantic
        } else {
            VersionFormat::Legacy
        }
    }

    /// See [`uses_modern_behavior`]
    pub fn uses_modern_behavior(&self) -> bool {
        uses_modern_behavior(self)
    }
}

/// Classify and encode a remote service version string.
///
/// The legacy grammar is tried first, then the semantic one.
pub fn classify(version: &str) -> Result<ClassifiedVersion> {
    if let Some(caps) = LEGACY_VERSION.captures(version) {
        let year_month = parse_component(version, &caps[1])?;
        let revision = parse_component(version, &caps[2])?;
        return Ok(ClassifiedVersion {
            encoded: year_month * 10 + revision,
            is_semantic: false,
        });
    }

    if let Some(caps) = SEMANTIC_VERSION.captures(version) {
        let major = parse_semantic_component(version, &caps[1])?;
        let minor = parse_semantic_component(version, &caps[2])?;
        let patch = parse_semantic_component(version, &caps[3])?;
        return Ok(ClassifiedVersion {
            encoded: SEMANTIC_VERSION_BASE + major * 1_000_000 + minor * 1_000 + patch,
            is_semantic: true,
        });
    }

    Err(CoreError::malformed(version))
}

/// Encoded value only, for callers that just compare numbers.
pub fn parse_version(version: &str) -> Result<i64> {
    classify(version).map(|v| v.encoded)
}

/// Feature gate: semantic releases always qualify, legacy ones from
/// [`LEGACY_VERSION_THRESHOLD`] on.
pub fn uses_modern_behavior(version: &ClassifiedVersion) -> bool {
    version.is_semantic || version.encoded >= LEGACY_VERSION_THRESHOLD
}

/// Classify `version` and apply [`uses_modern_behavior`] in one step.
pub fn supports_modern_behavior(version: &str) -> Result<bool> {
    let classified = classify(version)?;
    let modern = classified.uses_modern_behavior();
    tracing::debug!(
        version,
        encoded = classified.encoded,
        format = %classified.format(),
        modern,
        "classified remote service version"
    );
    Ok(modern)
}

fn parse_component(input: &str, digits: &str) -> Result<i64> {
    digits
        .parse::<i64>()
        .map_err(|_| CoreError::malformed(input))
}

fn parse_semantic_component(input: &str, digits: &str) -> Result<i64> {
    match digits.parse::<u64>() {
        Ok(n) if n <= MAX_SEMANTIC_COMPONENT => Ok(n as i64),
        _ => Err(CoreError::malformed(input)),
    }
}
