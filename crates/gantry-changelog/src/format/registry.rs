//! Format registry

use std::sync::Arc;

use tracing::debug;

use gantry_core::config::Config;
use gantry_core::error::{ConfigError, Result};
use gantry_tags::TagRules;

use super::markdown::MarkdownFormat;
use super::ChangelogFormat;

/// Registry of available changelog formats
pub struct FormatRegistry {
    formats: Vec<Arc<dyn ChangelogFormat>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats
    pub fn new(rules: Arc<TagRules>) -> Self {
        Self {
            formats: vec![Arc::new(MarkdownFormat::new(rules))],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Register a format
    pub fn register<F: ChangelogFormat + 'static>(&mut self, format: F) {
        self.formats.push(Arc::new(format));
    }

    /// Get a format by file extension, including alternatives
    pub fn get(&self, extension: &str) -> Option<Arc<dyn ChangelogFormat>> {
        let result = self
            .formats
            .iter()
            .find(|f| {
                f.extension() == extension || f.alternative_extensions().contains(&extension)
            })
            .cloned();
        debug!(
            extension,
            found = result.is_some(),
            "format registry lookup"
        );
        result
    }

    /// All registered formats
    pub fn all(&self) -> &[Arc<dyn ChangelogFormat>] {
        &self.formats
    }

    /// Resolve the configured changelog format
    pub fn from_config(config: &Config) -> Result<Arc<dyn ChangelogFormat>> {
        let rules = Arc::new(TagRules::from_config(config)?);
        let registry = Self::new(rules);
        registry
            .get(&config.changelog.format)
            .ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: "changelog.format".to_string(),
                    message: format!("unknown format '{}'", config.changelog.format),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Arc<TagRules> {
        Arc::new(TagRules::builder().build().unwrap())
    }

    #[test]
    fn test_registry_has_markdown() {
        let registry = FormatRegistry::new(rules());
        assert!(registry.get("md").is_some());
        assert_eq!(registry.all().len(), 1);
    }

    #[test]
    fn test_get_by_alternative_extension() {
        let registry = FormatRegistry::new(rules());
        assert!(registry.get("markdown").is_some());
        assert!(registry.get("mkd").is_some());
        assert!(registry.get("rst").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::empty();
        assert!(registry.get("md").is_none());
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = Config::default();
        let format = FormatRegistry::from_config(&config).unwrap();
        assert_eq!(format.extension(), "md");
    }

    #[test]
    fn test_from_config_unknown_format() {
        let mut config = Config::default();
        config.changelog.format = "rst".to_string();
        assert!(FormatRegistry::from_config(&config).is_err());
    }
}
