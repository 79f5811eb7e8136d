//! Gantry Tags - Tag recognition and version extraction
//!
//! This crate provides the rule set that decides which git tags are version
//! tags, extracts versions from them, renders versions back into tag strings,
//! and finds version strings inside free-form text.

mod rules;
pub mod template;
pub mod types;

pub use rules::{TagRules, TagRulesBuilder};
pub use types::VersionTag;
