//! Tag rules
//!
//! `TagRules` bundles everything the release tooling needs to know about tag
//! naming: which tags carry versions, how to read a version out of a tag, how
//! to render a version back into a tag, and how to spot a version inside a
//! changelog heading. All configured formats are compiled once at
//! construction; the instance is immutable afterwards and safe to share.

use std::sync::Arc;

use regex::Captures;
use tracing::{debug, instrument, warn};

use gantry_core::config::{Config, DEFAULT_TAG_FORMAT};
use gantry_core::error::{ConfigError, Result, VersionError};
use gantry_core::types::TagInfo;
use gantry_schemes::{SchemeRegistry, Version, VersionScheme};

use crate::template::{self, CompiledFormat};
use crate::types::VersionTag;

/// Tag naming rules for one repository
pub struct TagRules {
    scheme: Arc<dyn VersionScheme>,
    tag_format: String,
    legacy_tag_formats: Vec<String>,
    merge_prereleases: bool,
    /// Compiled version formats, primary first, then legacy in configured order
    version_formats: Vec<CompiledFormat>,
    ignored_formats: Vec<CompiledFormat>,
}

impl TagRules {
    /// Start building a rule set with default scheme and format
    pub fn builder() -> TagRulesBuilder {
        TagRulesBuilder::new()
    }

    /// Build a rule set from configuration
    #[instrument(skip(config))]
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = SchemeRegistry::new();
        let scheme = registry
            .get(&config.tags.scheme)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "tags.scheme".to_string(),
                message: format!("unknown scheme '{}'", config.tags.scheme),
            })?;

        Self::builder()
            .scheme(scheme)
            .tag_format(&config.tags.tag_format)
            .legacy_tag_formats(config.tags.legacy_tag_formats.clone())
            .ignored_tag_formats(config.tags.ignored_tag_formats.clone())
            .merge_prereleases(config.changelog.merge_prereleases)
            .build()
    }

    /// The active version scheme
    pub fn scheme(&self) -> &dyn VersionScheme {
        self.scheme.as_ref()
    }

    /// The primary tag format
    pub fn tag_format(&self) -> &str {
        &self.tag_format
    }

    /// True if a given tag is a legit version tag
    pub fn is_version_tag(&self, tag: &str) -> bool {
        self.version_formats.iter().any(|f| f.matches_start(tag))
    }

    /// True if a given tag can be ignored
    pub fn is_ignored_tag(&self, tag: &str) -> bool {
        self.ignored_formats.iter().any(|f| f.matches_start(tag))
    }

    /// Filter in version tags, preserving input order
    ///
    /// With `warn`, tags that are neither version tags nor ignored are
    /// reported on the warning channel; they are excluded either way and
    /// never abort the batch.
    #[instrument(skip(self, tags))]
    pub fn get_version_tags<'a>(&self, tags: &'a [TagInfo], warn: bool) -> Vec<&'a TagInfo> {
        let selected: Vec<&TagInfo> = tags.iter().filter(|t| self.select_tag(t, warn)).collect();
        debug!(
            total = tags.len(),
            selected = selected.len(),
            "filtered version tags"
        );
        selected
    }

    fn select_tag(&self, tag: &TagInfo, warn: bool) -> bool {
        if self.is_version_tag(&tag.name) {
            return true;
        }
        if warn && !self.is_ignored_tag(&tag.name) {
            warn!(tag = %tag.name, "tag does not match any configured tag format");
        }
        false
    }

    /// Extract the version from a version tag
    ///
    /// Formats are tried primary first, then legacy in configured order, and
    /// must consume the entire tag. Fails with an invalid-version error when
    /// no format fully matches or the assembled string does not parse under
    /// the active scheme.
    pub fn extract_version(&self, tag: &str) -> Result<Version> {
        let caps = self
            .version_formats
            .iter()
            .find_map(|f| f.full_match(tag))
            .ok_or_else(|| {
                VersionError::invalid(tag, "does not match any configured tag format")
            })?;

        let version = Self::version_string(&caps)
            .ok_or_else(|| VersionError::invalid(tag, "matched format captures no components"))?;
        self.scheme.parse(&version)
    }

    /// Assemble a version string from a format match
    ///
    /// A `version` group wins outright; otherwise the string is built from
    /// parts, omitting minor/patch when their groups are absent or empty.
    fn version_string(caps: &Captures) -> Option<String> {
        if let Some(version) = caps.name("version") {
            return Some(version.as_str().to_string());
        }

        let mut version = caps.name("major")?.as_str().to_string();

        if let Some(minor) = Self::group(caps, "minor") {
            version.push('.');
            version.push_str(minor);
        }
        if let Some(patch) = Self::group(caps, "patch") {
            version.push('.');
            version.push_str(patch);
        }

        if let Some(prerelease) = Self::group(caps, "prerelease") {
            version.push('-');
            version.push_str(prerelease);
        }
        if let Some(devrelease) = Self::group(caps, "devrelease") {
            version.push_str(devrelease);
        }

        Some(version)
    }

    /// A named group's text, treating empty captures as absent
    fn group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
        caps.name(name)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Check if a tag should be included in the changelog
    pub fn include_in_changelog(&self, tag: &str) -> bool {
        match self.extract_version(tag) {
            Ok(version) => !(self.merge_prereleases && version.is_prerelease()),
            Err(_) => false,
        }
    }

    /// Search the first or last version occurrence in free-form text
    ///
    /// The first format (primary, then legacy order) that matches anywhere in
    /// the text wins; later formats are never consulted. Among the winning
    /// format's matches, the first is taken unless `last` is set. Unlike
    /// extraction, part-assembly here requires all of major, minor, and patch.
    pub fn search_version(&self, text: &str, last: bool) -> Option<VersionTag> {
        let matches = self.version_formats.iter().find_map(|f| {
            let found = f.find_all(text);
            if found.is_empty() {
                None
            } else {
                Some(found)
            }
        })?;

        let caps = if last {
            matches.last()
        } else {
            matches.first()
        }?;
        let matched = caps.get(0)?.as_str();

        if let Some(version) = caps.name("version") {
            return Some(VersionTag::new(version.as_str(), matched));
        }

        let mut version = format!(
            "{}.{}.{}",
            caps.name("major")?.as_str(),
            caps.name("minor")?.as_str(),
            caps.name("patch")?.as_str()
        );

        if let Some(prerelease) = Self::group(caps, "prerelease") {
            version.push('-');
            version.push_str(prerelease);
        }
        if let Some(devrelease) = Self::group(caps, "devrelease") {
            version.push_str(devrelease);
        }

        Some(VersionTag::new(version, matched))
    }

    /// Render a version into its tag string
    ///
    /// Uses the given format or the primary one. Unknown placeholders in the
    /// template are left as literal text.
    pub fn normalize_tag(&self, version: &Version, tag_format: Option<&str>) -> String {
        let tag_format = tag_format.unwrap_or(&self.tag_format);
        let (major, minor, patch) = version.release();
        let rendered = self.scheme.format(version);
        let prerelease = version.prerelease.clone().unwrap_or_default();

        template::substitute(tag_format, |name| match name {
            "version" => Some(rendered.clone()),
            "major" => Some(major.to_string()),
            "minor" => Some(minor.to_string()),
            "patch" => Some(patch.to_string()),
            "prerelease" => Some(prerelease.clone()),
            _ => None,
        })
    }

    /// Render a version string into its tag string
    ///
    /// The string is parsed under the active scheme first; a parse failure is
    /// a caller error and propagates.
    pub fn normalize_tag_str(&self, version: &str, tag_format: Option<&str>) -> Result<String> {
        let version = self.scheme.parse(version)?;
        Ok(self.normalize_tag(&version, tag_format))
    }

    /// Find the tag matching a version, if any
    ///
    /// Candidate tag names are the version normalized under the primary and
    /// then each legacy format; the first tag in the input sequence whose
    /// name equals any candidate wins.
    pub fn find_tag_for<'a>(&self, tags: &'a [TagInfo], version: &Version) -> Option<&'a TagInfo> {
        let candidates: Vec<String> = self
            .formats()
            .map(|f| self.normalize_tag(version, Some(f)))
            .collect();

        tags.iter().find(|t| candidates.iter().any(|c| *c == t.name))
    }

    /// Find the tag matching a version string, if any
    pub fn find_tag_for_str<'a>(
        &self,
        tags: &'a [TagInfo],
        version: &str,
    ) -> Result<Option<&'a TagInfo>> {
        let version = self.scheme.parse(version)?;
        Ok(self.find_tag_for(tags, &version))
    }

    /// All configured formats, primary first
    fn formats(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.tag_format.as_str())
            .chain(self.legacy_tag_formats.iter().map(String::as_str))
    }
}

impl std::fmt::Debug for TagRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagRules")
            .field("scheme", &self.scheme.name())
            .field("tag_format", &self.tag_format)
            .field("legacy_tag_formats", &self.legacy_tag_formats)
            .field("merge_prereleases", &self.merge_prereleases)
            .finish()
    }
}

/// Builder for [`TagRules`]
pub struct TagRulesBuilder {
    scheme: Arc<dyn VersionScheme>,
    tag_format: String,
    legacy_tag_formats: Vec<String>,
    ignored_tag_formats: Vec<String>,
    merge_prereleases: bool,
}

impl TagRulesBuilder {
    /// Create a builder with the default scheme and tag format
    pub fn new() -> Self {
        Self {
            scheme: SchemeRegistry::default_scheme(),
            tag_format: DEFAULT_TAG_FORMAT.to_string(),
            legacy_tag_formats: Vec::new(),
            ignored_tag_formats: Vec::new(),
            merge_prereleases: false,
        }
    }

    /// Set the version scheme
    pub fn scheme(mut self, scheme: Arc<dyn VersionScheme>) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the primary tag format
    pub fn tag_format(mut self, tag_format: impl Into<String>) -> Self {
        self.tag_format = tag_format.into();
        self
    }

    /// Set the legacy tag formats, in precedence order
    pub fn legacy_tag_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legacy_tag_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ignored tag formats (`*` wildcards allowed)
    pub fn ignored_tag_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_tag_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Exclude prerelease versions from the changelog
    pub fn merge_prereleases(mut self, merge: bool) -> Self {
        self.merge_prereleases = merge;
        self
    }

    /// Compile all formats and finish the rule set
    pub fn build(self) -> Result<TagRules> {
        let scheme = self.scheme;

        let version_formats = std::iter::once(&self.tag_format)
            .chain(&self.legacy_tag_formats)
            .map(|f| CompiledFormat::compile(f, scheme.as_ref(), false))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let ignored_formats = self
            .ignored_tag_formats
            .iter()
            .map(|f| CompiledFormat::compile(f, scheme.as_ref(), true))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            scheme = scheme.name(),
            tag_format = %self.tag_format,
            legacy = self.legacy_tag_formats.len(),
            ignored = self.ignored_tag_formats.len(),
            "compiled tag rules"
        );

        Ok(TagRules {
            scheme,
            tag_format: self.tag_format,
            legacy_tag_formats: self.legacy_tag_formats,
            merge_prereleases: self.merge_prereleases,
            version_formats,
            ignored_formats,
        })
    }
}

impl Default for TagRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
