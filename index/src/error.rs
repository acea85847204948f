//! Index error types.

use resdex_core::{ModelError, ShapeId};
use thiserror::Error;

/// Errors that abort the derivation of a resource.
///
/// Problems that leave a usable result are reported as findings instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A shape referenced while deriving the resource is missing or has the
    /// wrong kind.
    #[error("Failed to derive properties of resource {resource}: {source}")]
    Derivation {
        resource: ShapeId,
        #[source]
        source: ModelError,
    },

    /// The requested shape is not a usable resource.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The resource does not carry the resource annotation.
    #[error("Resource {0} does not carry the resource annotation")]
    NotAnnotated(ShapeId),
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
