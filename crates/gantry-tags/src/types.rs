//! Tag rule result types

use serde::{Deserialize, Serialize};

/// A version found inside free-form text
///
/// Pairs the assembled version string with the raw text span it was found in
/// (e.g. `1.2.3` found as `v1.2.3` inside a changelog heading).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTag {
    /// The assembled version string
    pub version: String,
    /// The raw matched text span
    pub tag: String,
}

impl VersionTag {
    /// Create a new VersionTag
    pub fn new(version: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            tag: tag.into(),
        }
    }
}
