//! Default configuration values

/// Default version scheme
pub const DEFAULT_SCHEME: &str = "semver";

/// Default tag format
pub const DEFAULT_TAG_FORMAT: &str = "v$version";

/// Default changelog format extension
pub const DEFAULT_CHANGELOG_FORMAT: &str = "md";

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Gantry configuration

[tags]
scheme = "semver"
tag_format = "v$version"
legacy_tag_formats = []
ignored_tag_formats = []

[changelog]
format = "md"
merge_prereleases = false
"#;
