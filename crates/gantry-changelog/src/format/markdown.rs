//! Markdown changelog format

use std::sync::{Arc, LazyLock};

use regex::Regex;

use gantry_tags::{TagRules, VersionTag};

use super::ChangelogFormat;

/// ATX heading line, e.g. `## [1.2.3] - 2023-01-01`
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<level>#+) (?P<title>.*)$").expect("Invalid regex"));

/// Markdown changelog format
pub struct MarkdownFormat {
    rules: Arc<TagRules>,
}

impl MarkdownFormat {
    /// Create a new markdown format bound to a rule set
    pub fn new(rules: Arc<TagRules>) -> Self {
        Self { rules }
    }
}

impl ChangelogFormat for MarkdownFormat {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn alternative_extensions(&self) -> &'static [&'static str] {
        &["markdown", "mkd"]
    }

    fn parse_version_from_title(&self, line: &str) -> Option<VersionTag> {
        let caps = TITLE_REGEX.captures(line)?;
        self.rules
            .search_version(caps.name("title")?.as_str(), false)
    }

    fn parse_title_level(&self, line: &str) -> Option<usize> {
        let caps = TITLE_REGEX.captures(line)?;
        Some(caps.name("level")?.as_str().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markdown() -> MarkdownFormat {
        let rules = TagRules::builder().tag_format("$version").build().unwrap();
        MarkdownFormat::new(Arc::new(rules))
    }

    #[test]
    fn test_parse_version_from_title() {
        let format = markdown();
        let found = format
            .parse_version_from_title("## [1.2.3] - 2023-01-01")
            .unwrap();
        assert_eq!(found.version, "1.2.3");
        assert_eq!(found.tag, "1.2.3");
    }

    #[test]
    fn test_parse_version_from_title_with_tag_prefix() {
        let rules = TagRules::builder().tag_format("v$version").build().unwrap();
        let format = MarkdownFormat::new(Arc::new(rules));

        let found = format.parse_version_from_title("## v2.0.0-rc.1").unwrap();
        assert_eq!(found.version, "2.0.0-rc.1");
        assert_eq!(found.tag, "v2.0.0-rc.1");
    }

    #[test]
    fn test_parse_version_from_title_none_for_plain_heading() {
        let format = markdown();
        assert!(format.parse_version_from_title("## Unreleased").is_none());
    }

    #[test]
    fn test_parse_version_from_title_none_for_body_line() {
        let format = markdown();
        assert!(format
            .parse_version_from_title("some text mentioning 1.2.3")
            .is_none());
    }

    #[test]
    fn test_parse_title_level() {
        let format = markdown();
        assert_eq!(format.parse_title_level("# Changelog"), Some(1));
        assert_eq!(format.parse_title_level("### Fixes"), Some(3));
        assert_eq!(format.parse_title_level("plain text"), None);
    }
}
