//! Configuration for property derivation.

/// Configuration for building a resource index.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Only derive resources carrying the resource annotation. When false,
    /// unannotated resources are derived too, named after their shape and
    /// without additional schemas.
    pub require_resource_trait: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            require_resource_trait: true,
        }
    }
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_require_resource_trait(mut self, require: bool) -> Self {
        self.require_resource_trait = require;
        self
    }

    /// Derive every resource shape, annotated or not.
    pub fn all_resources() -> Self {
        Self {
            require_resource_trait: false,
        }
    }
}
