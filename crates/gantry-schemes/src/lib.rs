//! Gantry Schemes - Version schemes for tag and version resolution
//!
//! This crate provides the version value type, the pluggable version scheme
//! abstraction, and the built-in schemes (SemVer, CalVer).

mod calver;
mod registry;
mod semver;
mod traits;
pub mod types;

pub use calver::CalVerScheme;
pub use registry::SchemeRegistry;
pub use semver::SemVerScheme;
pub use traits::VersionScheme;
pub use types::Version;
