//! Gantry Core - Core types for tag and version resolution
//!
//! This crate provides the foundational types, error handling, and
//! configuration for the Gantry tag rules engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ChangelogConfig, Config, TagsConfig};
pub use error::{ConfigError, GantryError, Result, TagError, VersionError};
pub use types::TagInfo;
