//! Configuration system for Gantry
//!
//! Config file discovery and loading belong to the embedding tool; this module
//! only defines the settings shape, defaults, and validation.

pub mod defaults;
mod types;
pub mod validation;

pub use defaults::*;
pub use types::*;
pub use validation::*;
