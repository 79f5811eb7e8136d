//! Tag format templates
//!
//! A tag format is a plain string with `$name` / `${name}` placeholders and
//! literal characters (e.g. `v$version`). This module provides the safe
//! substitution pass shared by normalization and pattern compilation, and the
//! compiler that turns a format into the regexes the rule set matches with.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use gantry_core::error::TagError;
use gantry_schemes::VersionScheme;

/// Placeholder token: `$$`, `$name`, or `${name}`
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\$|\{(?P<braced>\w+)\}|(?P<named>\w+))").expect("Invalid regex")
});

/// Substitute placeholders in a template
///
/// Names the lookup does not know are left as literal text, and `$$` renders a
/// literal `$`. Names are tokenized greedily, so substituting `version` never
/// touches a literal `$versionX`.
pub fn substitute<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            match caps.name("braced").or_else(|| caps.name("named")) {
                Some(name) => {
                    lookup(name.as_str()).unwrap_or_else(|| caps[0].to_string())
                }
                None => "$".to_string(),
            }
        })
        .into_owned()
}

/// Build the regex source for a tag format
///
/// Each recognized placeholder becomes the scheme's sub-pattern for that field
/// wrapped in a capture group of the same name; literal characters pass
/// through untouched. With `wildcard`, every `*` is first lowered to a lazy
/// match-anything token (used for ignored-tag formats).
pub fn format_regex(template: &str, scheme: &dyn VersionScheme, wildcard: bool) -> String {
    let template = if wildcard {
        template.replace('*', "(?:.*?)")
    } else {
        template.to_string()
    };

    substitute(&template, |name| match name {
        "version" => Some(format!("(?P<version>{})", scheme.version_pattern())),
        "major" => Some(format!("(?P<major>{})", scheme.major_pattern())),
        "minor" => Some(format!("(?P<minor>{})", scheme.minor_pattern())),
        "patch" => Some(format!("(?P<patch>{})", scheme.patch_pattern())),
        "prerelease" => Some(format!("(?P<prerelease>{})?", scheme.prerelease_pattern())),
        "devrelease" => Some(format!("(?P<devrelease>{})?", scheme.devrelease_pattern())),
        _ => None,
    })
}

/// A tag format compiled for matching
///
/// One format is used in three search modes: anchored at the start of a tag
/// (classification), consuming the whole tag (extraction), and unanchored
/// inside free text (changelog heading search). The regex engine has no
/// match-time anchoring modes, so each mode gets its own compiled variant.
#[derive(Debug)]
pub(crate) struct CompiledFormat {
    prefix: Regex,
    full: Regex,
    search: Regex,
}

impl CompiledFormat {
    /// Compile a tag format under the given scheme
    pub fn compile(
        template: &str,
        scheme: &dyn VersionScheme,
        wildcard: bool,
    ) -> Result<Self, TagError> {
        let source = format_regex(template, scheme, wildcard);
        let compile = |src: String| {
            Regex::new(&src).map_err(|e| TagError::InvalidTemplate {
                template: template.to_string(),
                source: e,
            })
        };

        Ok(Self {
            prefix: compile(format!("^(?:{source})"))?,
            full: compile(format!("^(?:{source})$"))?,
            search: compile(source)?,
        })
    }

    /// Whether the format matches at the start of the tag
    pub fn matches_start(&self, tag: &str) -> bool {
        self.prefix.is_match(tag)
    }

    /// Match the entire tag, yielding the captured groups
    pub fn full_match<'t>(&self, tag: &'t str) -> Option<Captures<'t>> {
        self.full.captures(tag)
    }

    /// All non-overlapping matches anywhere in the text
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<Captures<'t>> {
        self.search.captures_iter(text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_schemes::SemVerScheme;

    #[test]
    fn test_substitute_known_placeholder() {
        let out = substitute("v$version", |name| {
            (name == "version").then(|| "1.2.3".to_string())
        });
        assert_eq!(out, "v1.2.3");
    }

    #[test]
    fn test_substitute_braced_placeholder() {
        let out = substitute("v${version}rc", |name| {
            (name == "version").then(|| "1.2.3".to_string())
        });
        assert_eq!(out, "v1.2.3rc");
    }

    #[test]
    fn test_substitute_unknown_left_literal() {
        let out = substitute("v$version-$channel", |name| {
            (name == "version").then(|| "1.2.3".to_string())
        });
        assert_eq!(out, "v1.2.3-$channel");
    }

    #[test]
    fn test_substitute_does_not_corrupt_longer_names() {
        // `$versionX` is a different (unknown) placeholder, not `$version` + "X"
        let out = substitute("$versionX", |name| {
            (name == "version").then(|| "1.2.3".to_string())
        });
        assert_eq!(out, "$versionX");
    }

    #[test]
    fn test_substitute_dollar_escape() {
        let out = substitute("$$version", |name| {
            (name == "version").then(|| "1.2.3".to_string())
        });
        assert_eq!(out, "$version");
    }

    #[test]
    fn test_format_regex_version_placeholder() {
        let scheme = SemVerScheme::new();
        let source = format_regex("v$version", &scheme, false);
        assert!(source.starts_with("v(?P<version>"));
    }

    #[test]
    fn test_format_regex_wildcard() {
        let scheme = SemVerScheme::new();
        let source = format_regex("snapshot-*", &scheme, true);
        assert_eq!(source, "snapshot-(?:.*?)");
    }

    #[test]
    fn test_format_regex_star_kept_without_wildcard() {
        let scheme = SemVerScheme::new();
        let source = format_regex("snapshot-*", &scheme, false);
        assert_eq!(source, "snapshot-*");
    }

    #[test]
    fn test_compiled_format_matching_modes() {
        let scheme = SemVerScheme::new();
        let format = CompiledFormat::compile("v$version", &scheme, false).unwrap();

        assert!(format.matches_start("v1.2.3"));
        assert!(format.matches_start("v1.2.3 (latest)"));
        assert!(!format.matches_start("x1.2.3"));

        assert!(format.full_match("v1.2.3").is_some());
        assert!(format.full_match("v1.2.3 (latest)").is_none());

        let matches = format.find_all("## [v1.2.3] - 2023-01-01");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name("version").unwrap().as_str(), "1.2.3");
    }

    #[test]
    fn test_compiled_format_component_groups() {
        let scheme = SemVerScheme::new();
        let format = CompiledFormat::compile("ver$major.$minor.$patch", &scheme, false).unwrap();

        let caps = format.full_match("ver1.2.3").unwrap();
        assert_eq!(caps.name("major").unwrap().as_str(), "1");
        assert_eq!(caps.name("minor").unwrap().as_str(), "2");
        assert_eq!(caps.name("patch").unwrap().as_str(), "3");
    }

    #[test]
    fn test_compile_rejects_bad_template() {
        let scheme = SemVerScheme::new();
        assert!(CompiledFormat::compile("v$version(", &scheme, false).is_err());
    }
}
