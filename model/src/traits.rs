//! Annotations carried by members and resources.

use resdex_core::{MutabilitySet, ShapeId};
use serde::{Deserialize, Serialize};

/// Explicit mutability annotation on a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutabilityTrait {
    /// Settable on create and update, returned on read.
    Full,
    /// Settable on create only, never returned.
    Create,
    /// Settable on create, returned on read.
    CreateAndRead,
    /// Returned on read only.
    Read,
    /// Settable on update only, never returned.
    Write,
}

impl MutabilityTrait {
    /// The mutability set this annotation fixes.
    pub fn mutabilities(&self) -> MutabilitySet {
        match self {
            MutabilityTrait::Full => MutabilitySet::FULLY_MUTABLE,
            MutabilityTrait::Create => MutabilitySet::CREATE,
            MutabilityTrait::CreateAndRead => MutabilitySet::CREATE | MutabilitySet::READ,
            MutabilityTrait::Read => MutabilitySet::READ,
            MutabilityTrait::Write => MutabilitySet::WRITE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MutabilityTrait::Full => "full",
            MutabilityTrait::Create => "create",
            MutabilityTrait::CreateAndRead => "create-and-read",
            MutabilityTrait::Read => "read",
            MutabilityTrait::Write => "write",
        }
    }
}

/// Annotations applied to a single member.
///
/// Lookups are member-level only: a member does not inherit annotations
/// from the shape it targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberTraits {
    /// Explicit mutability override.
    pub mutability: Option<MutabilityTrait>,
    /// Removes the member (and anything reached only through it) from the
    /// derived property set.
    pub exclude_property: bool,
    /// Overrides the derived property name.
    pub property_name: Option<String>,
    /// Marks a read-input member as an additional identifier.
    pub additional_identifier: bool,
    /// Binds the member to the named resource identifier.
    pub resource_identifier: Option<String>,
}

impl MemberTraits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no annotation is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The resource annotation: marks a resource for property derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceTrait {
    /// External resource name; defaults to the resource shape's name.
    pub name: Option<String>,
    /// Extra structures whose members are added as properties.
    pub additional_schemas: Vec<ShapeId>,
}

impl ResourceTrait {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_additional_schema(mut self, schema: ShapeId) -> Self {
        self.additional_schemas.push(schema);
        self
    }

    /// Resolve the external name for the annotated resource.
    pub fn resolved_name<'a>(&'a self, resource: &'a ShapeId) -> &'a str {
        self.name.as_deref().unwrap_or(resource.name())
    }
}
