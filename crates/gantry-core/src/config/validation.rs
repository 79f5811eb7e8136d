//! Configuration validation
//!
//! Template syntax itself is not validated here; anything the regex engine
//! rejects surfaces when the rule set is built.

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

const VERSION_PLACEHOLDERS: &[&str] = &["$version", "${version}", "$major", "${major}"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_tags(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_tags(config: &Config) -> Result<()> {
    let valid_schemes = ["semver", "calver"];
    if !valid_schemes.contains(&config.tags.scheme.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "tags.scheme".to_string(),
            message: format!("must be one of: {}", valid_schemes.join(", ")),
        }
        .into());
    }

    if config.tags.tag_format.is_empty() {
        return Err(ConfigError::MissingField("tags.tag_format".to_string()).into());
    }

    for format in std::iter::once(&config.tags.tag_format).chain(&config.tags.legacy_tag_formats) {
        if !VERSION_PLACEHOLDERS.iter().any(|p| format.contains(p)) {
            return Err(ConfigError::InvalidValue {
                field: "tags.tag_format".to_string(),
                message: format!("'{format}' must contain a $version or $major placeholder"),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.format.is_empty() {
        return Err(ConfigError::MissingField("changelog.format".to_string()).into());
    }
    Ok(())
}
