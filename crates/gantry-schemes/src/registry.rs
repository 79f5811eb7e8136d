//! Scheme registry

use std::sync::Arc;

use tracing::debug;

use crate::calver::CalVerScheme;
use crate::semver::SemVerScheme;
use crate::traits::VersionScheme;

/// Registry of available version schemes
pub struct SchemeRegistry {
    schemes: Vec<Arc<dyn VersionScheme>>,
}

impl SchemeRegistry {
    /// Create a new registry with all built-in schemes
    pub fn new() -> Self {
        Self {
            schemes: vec![Arc::new(SemVerScheme::new()), Arc::new(CalVerScheme::new())],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            schemes: Vec::new(),
        }
    }

    /// Register a scheme
    pub fn register<S: VersionScheme + 'static>(&mut self, scheme: S) {
        self.schemes.push(Arc::new(scheme));
    }

    /// Get scheme by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn VersionScheme>> {
        let result = self.schemes.iter().find(|s| s.name() == name).cloned();
        debug!(
            scheme = name,
            found = result.is_some(),
            "scheme registry lookup"
        );
        result
    }

    /// Get all registered schemes
    pub fn all(&self) -> &[Arc<dyn VersionScheme>] {
        &self.schemes
    }

    /// Get scheme names
    pub fn names(&self) -> Vec<&'static str> {
        self.schemes.iter().map(|s| s.name()).collect()
    }

    /// The scheme used when none is configured
    pub fn default_scheme() -> Arc<dyn VersionScheme> {
        Arc::new(SemVerScheme::new())
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
