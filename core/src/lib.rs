//! resdex Core Types
//!
//! This crate provides the foundational types used throughout resdex:
//! - Shape identifiers (ShapeId)
//! - Property mutability (Mutability, MutabilitySet)
//! - Validation findings (Finding, Findings)
//! - Common error types

mod error;
mod finding;
mod id;
mod mutability;

pub use error::*;
pub use finding::*;
pub use id::*;
pub use mutability::*;
