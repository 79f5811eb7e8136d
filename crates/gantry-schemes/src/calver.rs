//! CalVer (Calendar Versioning) scheme
//!
//! Recognizes `YYYY.MM` and `YYYY.MM.MICRO` style versions, with an optional
//! `-prerelease` qualifier. Zero-padded segments are accepted on input;
//! rendering is unpadded.

use std::cmp::Ordering;

use gantry_core::error::{Result, VersionError};

use crate::traits::VersionScheme;
use crate::types::Version;

const CALVER_PATTERN: &str = r"\d{2,4}\.\d{1,2}(?:\.\d+)?(?:-[0-9A-Za-z][0-9A-Za-z.-]*)?";

/// Calendar versioning scheme
///
/// The release triple maps to (year, month, micro); a missing micro component
/// is normalized to zero. Ordering is numeric on the triple, with prerelease
/// versions sorting before the corresponding final version.
pub struct CalVerScheme;

impl CalVerScheme {
    /// Create a new CalVer scheme
    pub fn new() -> Self {
        Self
    }
}

impl Default for CalVerScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionScheme for CalVerScheme {
    fn name(&self) -> &'static str {
        "calver"
    }

    fn parse(&self, input: &str) -> Result<Version> {
        let (release, prerelease) = match input.split_once('-') {
            Some((release, pre)) if !pre.is_empty() => (release, Some(pre)),
            Some(_) => {
                return Err(VersionError::invalid(input, "empty prerelease qualifier").into())
            }
            None => (input, None),
        };

        let segments: Vec<&str> = release.split('.').collect();
        if segments.len() < 2 || segments.len() > 3 {
            return Err(VersionError::invalid(
                input,
                "expected year.month or year.month.micro",
            )
            .into());
        }

        let mut parts = [0u64; 3];
        for (i, segment) in segments.iter().enumerate() {
            parts[i] = segment
                .parse()
                .map_err(|_| VersionError::invalid(input, format!("'{segment}' is not numeric")))?;
        }

        let mut version = Version::new(parts[0], parts[1], parts[2]);
        if let Some(pre) = prerelease {
            version = version.with_prerelease(pre);
        }
        Ok(version)
    }

    fn compare(&self, a: &Version, b: &Version) -> Ordering {
        a.release().cmp(&b.release()).then_with(|| {
            match (&a.prerelease, &b.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                // Identifier ordering is plain lexical for calendar versions
                (Some(x), Some(y)) => x.cmp(y),
            }
        })
    }

    fn version_pattern(&self) -> &str {
        CALVER_PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        let scheme = CalVerScheme::new();
        let v = scheme.parse("2024.3").unwrap();
        assert_eq!(v.release(), (2024, 3, 0));
    }

    #[test]
    fn test_parse_year_month_micro() {
        let scheme = CalVerScheme::new();
        let v = scheme.parse("2024.3.1").unwrap();
        assert_eq!(v.release(), (2024, 3, 1));
    }

    #[test]
    fn test_parse_zero_padded_month() {
        let scheme = CalVerScheme::new();
        let v = scheme.parse("2024.03.0").unwrap();
        assert_eq!(v.release(), (2024, 3, 0));
    }

    #[test]
    fn test_parse_with_prerelease() {
        let scheme = CalVerScheme::new();
        let v = scheme.parse("2024.3.1-beta1").unwrap();
        assert_eq!(v.prerelease, Some("beta1".to_string()));
    }

    #[test]
    fn test_parse_invalid() {
        let scheme = CalVerScheme::new();

        assert!(scheme.parse("2024").is_err());
        assert!(scheme.parse("2024.3.1.4").is_err());
        assert!(scheme.parse("2024.x").is_err());
        assert!(scheme.parse("2024.3-").is_err());
    }

    #[test]
    fn test_compare() {
        let scheme = CalVerScheme::new();

        assert_eq!(
            scheme.compare(&Version::new(2024, 2, 0), &Version::new(2024, 3, 0)),
            Ordering::Less
        );
        assert_eq!(
            scheme.compare(
                &Version::new(2024, 3, 0).with_prerelease("beta1"),
                &Version::new(2024, 3, 0)
            ),
            Ordering::Less
        );
    }

    #[test]
    fn test_format() {
        let scheme = CalVerScheme::new();
        let v = scheme.parse("2024.03.2").unwrap();
        assert_eq!(scheme.format(&v), "2024.3.2");
    }
}
