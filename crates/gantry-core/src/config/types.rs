//! Configuration types

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::{DEFAULT_CHANGELOG_FORMAT, DEFAULT_SCHEME, DEFAULT_TAG_FORMAT};

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Tag recognition configuration
    pub tags: TagsConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            tags: TagsConfig::default(),
            changelog: ChangelogConfig::default(),
        }
    }
}

impl Config {
    /// Deserialize a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Toml)?;
        super::validation::validate_config(&config)?;
        debug!(name = ?config.name, "config parsed and validated");
        Ok(config)
    }
}

/// Tag recognition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    /// Version scheme (semver, calver)
    pub scheme: String,

    /// Tag format (e.g., "v$version")
    pub tag_format: String,

    /// Older tag formats still recognized after a format migration
    pub legacy_tag_formats: Vec<String>,

    /// Wildcard patterns for tags excluded from version consideration
    pub ignored_tag_formats: Vec<String>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            tag_format: DEFAULT_TAG_FORMAT.to_string(),
            legacy_tag_formats: Vec::new(),
            ignored_tag_formats: Vec::new(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file format, by extension (e.g., "md")
    pub format: String,

    /// Fold prerelease versions into the next final release
    pub merge_prereleases: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_CHANGELOG_FORMAT.to_string(),
            merge_prereleases: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tags.scheme, "semver");
        assert_eq!(config.tags.tag_format, "v$version");
        assert!(config.tags.legacy_tag_formats.is_empty());
        assert!(!config.changelog.merge_prereleases);
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
            name = "myproject"

            [tags]
            tag_format = "myproject-v$version"
            legacy_tag_formats = ["v$version"]
            ignored_tag_formats = ["snapshot-*"]

            [changelog]
            merge_prereleases = true
            "#,
        )
        .unwrap();

        assert_eq!(config.name, Some("myproject".to_string()));
        assert_eq!(config.tags.tag_format, "myproject-v$version");
        assert_eq!(config.tags.legacy_tag_formats, vec!["v$version"]);
        assert_eq!(config.tags.ignored_tag_formats, vec!["snapshot-*"]);
        assert!(config.changelog.merge_prereleases);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        assert!(Config::from_toml_str("tags = 3").is_err());
    }
}
