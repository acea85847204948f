//! Common error types for resdex.

use crate::ShapeId;
use thiserror::Error;

/// Errors that can occur while building or reading a shape graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A shape id could not be parsed.
    #[error("Invalid shape id '{id}': {reason}")]
    InvalidShapeId { id: String, reason: &'static str },

    /// Two shapes were registered under the same id.
    #[error("Duplicate shape id: {0}")]
    DuplicateShape(ShapeId),

    /// An aggregate declared the same member name twice.
    #[error("Duplicate member '{member}' in {container}")]
    DuplicateMember { container: ShapeId, member: String },

    /// A referenced shape does not exist in the graph.
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),

    /// A referenced shape exists but is of the wrong kind.
    #[error("Shape {id} is a {actual}, expected a {expected}")]
    UnexpectedShapeKind {
        id: ShapeId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for shape graph operations.
pub type ModelResult<T> = Result<T, ModelError>;
