//! resdex Index
//!
//! Derives a flat property schema for every annotated resource of a model:
//! - Primary and additional identifiers (identifiers)
//! - Member exclusion, including through nested structures (exclusion)
//! - Mutability fusion across lifecycle roles in a fixed order (fusion)
//! - The per-resource query surface (schema, index)

mod config;
mod definition;
mod error;
mod exclusion;
mod fusion;
mod identifiers;
mod index;
mod schema;

pub use config::IndexConfig;
pub use definition::{PropertyDefinition, PropertyMap, Provenance};
pub use error::{IndexError, IndexResult};
pub use exclusion::ExclusionCollector;
pub use fusion::{role_structures, FusionRole, RoleDescriptor, RoleStructure, StructureSource, LIFECYCLE_ROLES};
pub use identifiers::identifier_mutability;
pub use index::{derive_resource, ResourceIndex};
pub use schema::ResourceSchema;
