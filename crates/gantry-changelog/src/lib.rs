//! Gantry Changelog - Changelog format boundary
//!
//! This crate provides the interface changelog tooling uses to read title
//! levels and version headings out of existing changelog files, delegating
//! version detection to the tag rules engine.

pub mod format;

pub use format::{ChangelogFormat, FormatRegistry, MarkdownFormat};
