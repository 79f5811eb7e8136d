//! SemVer version scheme
//!
//! Follows the SemVer 2.0.0 specification: https://semver.org/

use std::cmp::Ordering;

use gantry_core::error::{Result, VersionError};

use crate::traits::VersionScheme;
use crate::types::Version;

/// Full-version fragment from the SemVer 2.0.0 grammar, capture groups removed
const SEMVER_PATTERN: &str = r"(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)(?:-(?:(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?:[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?";

/// Semantic Versioning scheme
///
/// Parsing tolerates a leading `v` and a missing minor or patch component
/// (padded with zeros), so versions assembled from partial tag formats still
/// resolve. Rendering always carries the full release triple.
pub struct SemVerScheme;

impl SemVerScheme {
    /// Create a new SemVer scheme
    pub fn new() -> Self {
        Self
    }

    fn to_semver(version: &Version) -> semver::Version {
        let mut v = semver::Version::new(version.major, version.minor, version.patch);
        if let Some(pre) = &version.prerelease {
            v.pre = semver::Prerelease::new(pre).unwrap_or(semver::Prerelease::EMPTY);
        }
        v
    }

    /// Pad a one- or two-component release to the full triple, keeping any
    /// prerelease or build suffix intact. Returns None when the input is not
    /// of that shape.
    fn pad_release(input: &str) -> Option<String> {
        let split = input.find(['-', '+']).unwrap_or(input.len());
        let (release, suffix) = input.split_at(split);

        let segments: Vec<&str> = release.split('.').collect();
        if segments.is_empty()
            || segments.len() > 2
            || segments
                .iter()
                .any(|s| s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        let mut padded = release.to_string();
        for _ in segments.len()..3 {
            padded.push_str(".0");
        }
        padded.push_str(suffix);
        Some(padded)
    }
}

impl Default for SemVerScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionScheme for SemVerScheme {
    fn name(&self) -> &'static str {
        "semver"
    }

    fn parse(&self, input: &str) -> Result<Version> {
        let version = input.strip_prefix('v').unwrap_or(input);

        let parsed = match semver::Version::parse(version) {
            Ok(v) => v,
            Err(e) => {
                let padded = Self::pad_release(version)
                    .ok_or_else(|| VersionError::invalid(input, e.to_string()))?;
                semver::Version::parse(&padded)
                    .map_err(|e| VersionError::invalid(input, e.to_string()))?
            }
        };

        let mut result = Version::new(parsed.major, parsed.minor, parsed.patch);
        if !parsed.pre.is_empty() {
            result = result.with_prerelease(parsed.pre.as_str());
        }
        if !parsed.build.is_empty() {
            result = result.with_build(parsed.build.as_str());
        }
        Ok(result)
    }

    fn compare(&self, a: &Version, b: &Version) -> Ordering {
        Self::to_semver(a).cmp(&Self::to_semver(b))
    }

    fn version_pattern(&self) -> &str {
        SEMVER_PATTERN
    }
}
