//! Shape definition types.

use crate::{LifecycleRole, MemberTraits, ResourceTrait};
use resdex_core::ShapeId;
use serde::Deserialize;
use std::fmt;

/// Kind of a scalar shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarKind {
    String,
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    BigDecimal,
    Timestamp,
    Blob,
    Document,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Integer => "integer",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::BigDecimal => "bigDecimal",
            ScalarKind::Timestamp => "timestamp",
            ScalarKind::Blob => "blob",
            ScalarKind::Document => "document",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of an aggregate shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberShape {
    /// Own id (`Container$name`), distinct from the target.
    pub id: ShapeId,
    /// Member name within its container.
    pub name: String,
    /// The shape this member targets.
    pub target: ShapeId,
    /// Annotations applied to this member.
    pub traits: MemberTraits,
}

impl MemberShape {
    /// The property name this member derives: its rename annotation if
    /// present, else its raw name.
    pub fn property_name(&self) -> &str {
        self.traits.property_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_excluded(&self) -> bool {
        self.traits.exclude_property
    }

    pub fn is_additional_identifier(&self) -> bool {
        self.traits.additional_identifier
    }
}

/// A structure (or union): an ordered collection of members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureShape {
    pub id: ShapeId,
    /// Members in declaration order.
    pub members: Vec<MemberShape>,
}

impl StructureShape {
    /// Get a member by name.
    pub fn get_member(&self, name: &str) -> Option<&MemberShape> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Get all member names in declaration order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }
}

/// A list shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListShape {
    pub id: ShapeId,
    pub member: ShapeId,
}

/// A map shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapShape {
    pub id: ShapeId,
    pub key: ShapeId,
    pub value: ShapeId,
}

/// A scalar shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarShape {
    pub id: ShapeId,
    pub kind: ScalarKind,
}

/// An operation shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationShape {
    pub id: ShapeId,
    /// Input structure, if any.
    pub input: Option<ShapeId>,
    /// Output structure, if any.
    pub output: Option<ShapeId>,
}

/// A resource shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceShape {
    pub id: ShapeId,
    /// Identifier name to target shape, in declaration order.
    pub identifiers: Vec<(String, ShapeId)>,
    pub create: Option<ShapeId>,
    pub read: Option<ShapeId>,
    pub update: Option<ShapeId>,
    pub delete: Option<ShapeId>,
    pub put: Option<ShapeId>,
    pub list: Option<ShapeId>,
    /// The resource annotation, if the resource carries it.
    pub resource_trait: Option<ResourceTrait>,
}

impl ResourceShape {
    /// The operation bound to a lifecycle role.
    pub fn operation(&self, role: LifecycleRole) -> Option<&ShapeId> {
        match role {
            LifecycleRole::Create => self.create.as_ref(),
            LifecycleRole::Read => self.read.as_ref(),
            LifecycleRole::Update => self.update.as_ref(),
            LifecycleRole::Delete => self.delete.as_ref(),
            LifecycleRole::Put => self.put.as_ref(),
            LifecycleRole::List => self.list.as_ref(),
        }
    }

    /// Identifier names in declaration order.
    pub fn identifier_names(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(|(name, _)| name.as_str())
    }

    /// Get the target of an identifier by name.
    pub fn get_identifier(&self, name: &str) -> Option<&ShapeId> {
        self.identifiers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, target)| target)
    }

    pub fn has_put(&self) -> bool {
        self.put.is_some()
    }
}

/// A node of the shape graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Structure(StructureShape),
    Union(StructureShape),
    List(ListShape),
    Map(MapShape),
    Scalar(ScalarShape),
    Operation(OperationShape),
    Resource(ResourceShape),
}

impl Shape {
    /// The shape's own id.
    pub fn id(&self) -> &ShapeId {
        match self {
            Shape::Structure(s) | Shape::Union(s) => &s.id,
            Shape::List(s) => &s.id,
            Shape::Map(s) => &s.id,
            Shape::Scalar(s) => &s.id,
            Shape::Operation(s) => &s.id,
            Shape::Resource(s) => &s.id,
        }
    }

    /// Human-readable kind name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Structure(_) => "structure",
            Shape::Union(_) => "union",
            Shape::List(_) => "list",
            Shape::Map(_) => "map",
            Shape::Scalar(s) => s.kind.as_str(),
            Shape::Operation(_) => "operation",
            Shape::Resource(_) => "resource",
        }
    }

    pub fn as_structure(&self) -> Option<&StructureShape> {
        match self {
            Shape::Structure(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&OperationShape> {
        match self {
            Shape::Operation(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_resource(&self) -> Option<&ResourceShape> {
        match self {
            Shape::Resource(s) => Some(s),
            _ => None,
        }
    }

    /// Members of an aggregate shape; empty for every other kind.
    pub fn members(&self) -> &[MemberShape] {
        match self {
            Shape::Structure(s) | Shape::Union(s) => &s.members,
            Shape::List(_)
            | Shape::Map(_)
            | Shape::Scalar(_)
            | Shape::Operation(_)
            | Shape::Resource(_) => &[],
        }
    }
}
