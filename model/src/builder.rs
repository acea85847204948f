//! ModelBuilder for constructing an immutable Model.
//!
//! Sub-builders hold raw textual ids and parse them in `done()`, so a
//! malformed id surfaces as a `ModelError` at the point the shape is added.
//! References between shapes are not resolved here; a dangling reference
//! is reported by whoever follows it.

use crate::{
    prelude, LifecycleRole, ListShape, MapShape, MemberShape, MemberTraits, Model, MutabilityTrait,
    OperationShape, ResourceShape, ResourceTrait, ScalarKind, ScalarShape, Shape, StructureShape,
};
use resdex_core::{ModelError, ModelResult, ShapeId};
use std::collections::{BTreeMap, BTreeSet};

/// Member definition within an aggregate shape.
#[derive(Debug, Clone)]
pub struct MemberDef {
    /// Member name.
    pub name: String,
    /// Target shape id (textual).
    pub target: String,
    /// Annotations.
    pub traits: MemberTraits,
}

impl MemberDef {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            traits: MemberTraits::default(),
        }
    }

    pub fn mutability(mut self, mutability: MutabilityTrait) -> Self {
        self.traits.mutability = Some(mutability);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.traits.exclude_property = true;
        self
    }

    pub fn property_name(mut self, name: impl Into<String>) -> Self {
        self.traits.property_name = Some(name.into());
        self
    }

    pub fn additional_identifier(mut self) -> Self {
        self.traits.additional_identifier = true;
        self
    }

    pub fn resource_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.traits.resource_identifier = Some(identifier.into());
        self
    }

    pub fn with_traits(mut self, traits: MemberTraits) -> Self {
        self.traits = traits;
        self
    }
}

/// Builder for constructing an immutable Model.
#[derive(Debug)]
pub struct ModelBuilder {
    /// Shapes being built.
    shapes: BTreeMap<ShapeId, Shape>,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    /// Create a new builder with the prelude scalars registered.
    pub fn new() -> Self {
        let mut shapes = BTreeMap::new();
        for shape in prelude::prelude_shapes() {
            shapes.insert(shape.id().clone(), shape);
        }
        Self { shapes }
    }

    /// Create a builder without the prelude.
    pub fn without_prelude() -> Self {
        Self {
            shapes: BTreeMap::new(),
        }
    }

    /// Add a structure definition.
    pub fn add_structure(&mut self, id: impl Into<String>) -> StructureBuilder<'_> {
        StructureBuilder {
            builder: self,
            id: id.into(),
            members: Vec::new(),
            union: false,
        }
    }

    /// Add a union definition.
    pub fn add_union(&mut self, id: impl Into<String>) -> StructureBuilder<'_> {
        StructureBuilder {
            builder: self,
            id: id.into(),
            members: Vec::new(),
            union: true,
        }
    }

    /// Add an operation definition.
    pub fn add_operation(&mut self, id: impl Into<String>) -> OperationBuilder<'_> {
        OperationBuilder {
            builder: self,
            id: id.into(),
            input: None,
            output: None,
        }
    }

    /// Add a resource definition.
    pub fn add_resource(&mut self, id: impl Into<String>) -> ResourceBuilder<'_> {
        ResourceBuilder {
            builder: self,
            id: id.into(),
            identifiers: Vec::new(),
            operations: BTreeMap::new(),
            annotated: false,
            name: None,
            additional_schemas: Vec::new(),
        }
    }

    /// Add a list shape.
    pub fn add_list(&mut self, id: &str, member: &str) -> ModelResult<ShapeId> {
        let shape = Shape::List(ListShape {
            id: ShapeId::parse(id)?,
            member: ShapeId::parse(member)?,
        });
        self.insert(shape)
    }

    /// Add a map shape.
    pub fn add_map(&mut self, id: &str, key: &str, value: &str) -> ModelResult<ShapeId> {
        let shape = Shape::Map(MapShape {
            id: ShapeId::parse(id)?,
            key: ShapeId::parse(key)?,
            value: ShapeId::parse(value)?,
        });
        self.insert(shape)
    }

    /// Add a scalar shape.
    pub fn add_scalar(&mut self, id: &str, kind: ScalarKind) -> ModelResult<ShapeId> {
        let shape = Shape::Scalar(ScalarShape {
            id: ShapeId::parse(id)?,
            kind,
        });
        self.insert(shape)
    }

    /// Build the immutable Model.
    pub fn build(self) -> ModelResult<Model> {
        Ok(Model::new(self.shapes))
    }

    fn insert(&mut self, shape: Shape) -> ModelResult<ShapeId> {
        let id = shape.id().clone();
        if self.shapes.contains_key(&id) {
            return Err(ModelError::DuplicateShape(id));
        }
        self.shapes.insert(id.clone(), shape);
        Ok(id)
    }
}

/// Builder for a structure or union definition.
pub struct StructureBuilder<'a> {
    builder: &'a mut ModelBuilder,
    id: String,
    members: Vec<MemberDef>,
    union: bool,
}

impl<'a> StructureBuilder<'a> {
    /// Add a member.
    pub fn member(mut self, member: MemberDef) -> Self {
        self.members.push(member);
        self
    }

    /// Finish building this shape.
    pub fn done(self) -> ModelResult<ShapeId> {
        let id = ShapeId::parse(&self.id)?;

        let mut seen = BTreeSet::new();
        let mut members = Vec::with_capacity(self.members.len());
        for def in self.members {
            if !seen.insert(def.name.clone()) {
                return Err(ModelError::DuplicateMember {
                    container: id,
                    member: def.name,
                });
            }
            // Re-parse so a malformed member name is rejected.
            let member_id = ShapeId::parse(&id.with_member(def.name.as_str()).to_string())?;
            members.push(MemberShape {
                id: member_id,
                target: ShapeId::parse(&def.target)?,
                name: def.name,
                traits: def.traits,
            });
        }

        let structure = StructureShape { id, members };
        let shape = if self.union {
            Shape::Union(structure)
        } else {
            Shape::Structure(structure)
        };
        self.builder.insert(shape)
    }
}

/// Builder for an operation definition.
pub struct OperationBuilder<'a> {
    builder: &'a mut ModelBuilder,
    id: String,
    input: Option<String>,
    output: Option<String>,
}

impl<'a> OperationBuilder<'a> {
    /// Set the input structure.
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Set the output structure.
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Finish building this operation.
    pub fn done(self) -> ModelResult<ShapeId> {
        let shape = Shape::Operation(OperationShape {
            id: ShapeId::parse(&self.id)?,
            input: parse_optional(self.input.as_deref())?,
            output: parse_optional(self.output.as_deref())?,
        });
        self.builder.insert(shape)
    }
}

/// Builder for a resource definition.
pub struct ResourceBuilder<'a> {
    builder: &'a mut ModelBuilder,
    id: String,
    identifiers: Vec<(String, String)>,
    operations: BTreeMap<LifecycleRole, String>,
    annotated: bool,
    name: Option<String>,
    additional_schemas: Vec<String>,
}

impl<'a> ResourceBuilder<'a> {
    /// Add an identifier, in declaration order.
    pub fn identifier(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.identifiers.push((name.into(), target.into()));
        self
    }

    /// Bind an operation to a lifecycle role.
    pub fn lifecycle(mut self, role: LifecycleRole, operation: impl Into<String>) -> Self {
        self.operations.insert(role, operation.into());
        self
    }

    pub fn create(self, operation: impl Into<String>) -> Self {
        self.lifecycle(LifecycleRole::Create, operation)
    }

    pub fn read(self, operation: impl Into<String>) -> Self {
        self.lifecycle(LifecycleRole::Read, operation)
    }

    pub fn update(self, operation: impl Into<String>) -> Self {
        self.lifecycle(LifecycleRole::Update, operation)
    }

    pub fn delete(self, operation: impl Into<String>) -> Self {
        self.lifecycle(LifecycleRole::Delete, operation)
    }

    pub fn put(self, operation: impl Into<String>) -> Self {
        self.lifecycle(LifecycleRole::Put, operation)
    }

    pub fn list(self, operation: impl Into<String>) -> Self {
        self.lifecycle(LifecycleRole::List, operation)
    }

    /// Attach the resource annotation.
    pub fn annotated(mut self) -> Self {
        self.annotated = true;
        self
    }

    /// Attach the resource annotation with an explicit external name.
    pub fn resource_name(mut self, name: impl Into<String>) -> Self {
        self.annotated = true;
        self.name = Some(name.into());
        self
    }

    /// Attach the resource annotation and add an additional schema.
    pub fn additional_schema(mut self, schema: impl Into<String>) -> Self {
        self.annotated = true;
        self.additional_schemas.push(schema.into());
        self
    }

    /// Finish building this resource.
    pub fn done(self) -> ModelResult<ShapeId> {
        let id = ShapeId::parse(&self.id)?;

        let mut identifiers = Vec::with_capacity(self.identifiers.len());
        for (name, target) in self.identifiers {
            identifiers.push((name, ShapeId::parse(&target)?));
        }

        let mut operations = BTreeMap::new();
        for (role, operation) in self.operations {
            operations.insert(role, ShapeId::parse(&operation)?);
        }

        let resource_trait = if self.annotated {
            let mut resource_trait = ResourceTrait::new();
            resource_trait.name = self.name;
            for schema in &self.additional_schemas {
                resource_trait.additional_schemas.push(ShapeId::parse(schema)?);
            }
            Some(resource_trait)
        } else {
            None
        };

        let shape = Shape::Resource(ResourceShape {
            id,
            identifiers,
            create: operations.remove(&LifecycleRole::Create),
            read: operations.remove(&LifecycleRole::Read),
            update: operations.remove(&LifecycleRole::Update),
            delete: operations.remove(&LifecycleRole::Delete),
            put: operations.remove(&LifecycleRole::Put),
            list: operations.remove(&LifecycleRole::List),
            resource_trait,
        });
        self.builder.insert(shape)
    }
}

fn parse_optional(text: Option<&str>) -> ModelResult<Option<ShapeId>> {
    text.map(ShapeId::parse).transpose()
}
