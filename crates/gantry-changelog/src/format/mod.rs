//! Changelog formats

mod markdown;
mod registry;

pub use markdown::MarkdownFormat;
pub use registry::FormatRegistry;

use gantry_tags::VersionTag;

/// Trait for changelog file formats
pub trait ChangelogFormat: Send + Sync {
    /// The file extension for this format
    fn extension(&self) -> &'static str;

    /// Alternative file extensions also recognized
    fn alternative_extensions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Extract the version named in a title line, if any
    fn parse_version_from_title(&self, line: &str) -> Option<VersionTag>;

    /// The nesting level of a title line, if it is one
    fn parse_title_level(&self, line: &str) -> Option<usize>;
}
