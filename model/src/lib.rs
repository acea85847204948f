//! resdex Model
//!
//! Read-only shape graph: structures, members, operations and resources,
//! plus the member and resource annotations the index queries.
//! The model is immutable after construction via ModelBuilder.

mod builder;
mod lifecycle;
mod model;
mod prelude;
mod shape;
mod traits;

pub use builder::{MemberDef, ModelBuilder, OperationBuilder, ResourceBuilder, StructureBuilder};
pub use lifecycle::LifecycleRole;
pub use model::Model;
pub use prelude::PRELUDE_NAMESPACE;
pub use shape::*;
pub use traits::*;
