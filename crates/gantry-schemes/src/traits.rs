//! Version scheme trait

use std::cmp::Ordering;

use gantry_core::error::Result;

use crate::types::Version;

/// Trait for version schemes
///
/// A scheme owns parsing, rendering, and ordering for one versioning
/// convention, and exposes the regex fragments the tag-format compiler
/// substitutes for template placeholders. Fragments must not contain capture
/// groups or anchors; the compiler adds both.
pub trait VersionScheme: Send + Sync {
    /// Get the name of this scheme
    fn name(&self) -> &'static str;

    /// Parse a version string
    fn parse(&self, input: &str) -> Result<Version>;

    /// Render a version into its canonical string form
    fn format(&self, version: &Version) -> String {
        version.to_version_string()
    }

    /// Compare two versions under this scheme's ordering
    fn compare(&self, a: &Version, b: &Version) -> Ordering;

    /// Check if a version string is valid for this scheme
    fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }

    /// Regex fragment matching a full version
    fn version_pattern(&self) -> &str;

    /// Regex fragment matching the major component
    fn major_pattern(&self) -> &str {
        r"\d+"
    }

    /// Regex fragment matching the minor component
    fn minor_pattern(&self) -> &str {
        r"\d+"
    }

    /// Regex fragment matching the patch component
    fn patch_pattern(&self) -> &str {
        r"\d+"
    }

    /// Regex fragment matching a prerelease qualifier
    fn prerelease_pattern(&self) -> &str {
        r"\w+\d+"
    }

    /// Regex fragment matching a dev-release suffix
    fn devrelease_pattern(&self) -> &str {
        r"\.dev\d+"
    }
}
