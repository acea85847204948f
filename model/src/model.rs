//! The Model - immutable shape graph lookup.

use crate::{
    LifecycleRole, MemberShape, OperationShape, ResourceShape, Shape, StructureShape,
};
use resdex_core::{ModelError, ModelResult, ShapeId};
use std::collections::BTreeMap;

/// The Model provides read-only lookup of shapes by id.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Model {
    /// Shapes by id, including prelude scalars.
    shapes: BTreeMap<ShapeId, Shape>,
}

impl Model {
    /// Create a model from assembled shapes (use ModelBuilder for construction).
    pub(crate) fn new(shapes: BTreeMap<ShapeId, Shape>) -> Self {
        Self { shapes }
    }

    // ==================== Shape Lookups ====================

    /// Get a shape by id.
    pub fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Get a shape by id, failing if it does not exist.
    pub fn expect_shape(&self, id: &ShapeId) -> ModelResult<&Shape> {
        self.shapes
            .get(id)
            .ok_or_else(|| ModelError::ShapeNotFound(id.clone()))
    }

    /// Get a structure by id, failing if it is missing or not a structure.
    pub fn expect_structure(&self, id: &ShapeId) -> ModelResult<&StructureShape> {
        let shape = self.expect_shape(id)?;
        shape
            .as_structure()
            .ok_or_else(|| unexpected_kind(id, "structure", shape))
    }

    /// Get an operation by id, failing if it is missing or not an operation.
    pub fn expect_operation(&self, id: &ShapeId) -> ModelResult<&OperationShape> {
        let shape = self.expect_shape(id)?;
        shape
            .as_operation()
            .ok_or_else(|| unexpected_kind(id, "operation", shape))
    }

    /// Get a resource by id, failing if it is missing or not a resource.
    pub fn expect_resource(&self, id: &ShapeId) -> ModelResult<&ResourceShape> {
        let shape = self.expect_shape(id)?;
        shape
            .as_resource()
            .ok_or_else(|| unexpected_kind(id, "resource", shape))
    }

    /// Get a member by its member id (`Container$name`).
    pub fn get_member(&self, id: &ShapeId) -> Option<&MemberShape> {
        let name = id.member()?;
        self.shapes
            .get(&id.container())?
            .members()
            .iter()
            .find(|m| m.name == name)
    }

    /// Get all shapes in id order.
    pub fn all_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get all resource shapes in id order.
    pub fn resources(&self) -> impl Iterator<Item = &ResourceShape> {
        self.shapes.values().filter_map(Shape::as_resource)
    }

    // ==================== Operation Lookups ====================

    /// Resolve an operation's input structure.
    pub fn operation_input(&self, operation: &ShapeId) -> ModelResult<Option<&StructureShape>> {
        match &self.expect_operation(operation)?.input {
            Some(input) => self.expect_structure(input).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve an operation's output structure.
    pub fn operation_output(&self, operation: &ShapeId) -> ModelResult<Option<&StructureShape>> {
        match &self.expect_operation(operation)?.output {
            Some(output) => self.expect_structure(output).map(Some),
            None => Ok(None),
        }
    }

    /// Compute which input members of the operation bound to `role` carry
    /// the resource's identifiers, as identifier name -> member name.
    ///
    /// Only instance roles bind identifiers. A member annotated with a
    /// resource identifier binds that identifier; otherwise a member named
    /// after the identifier does.
    pub fn identifier_bindings(
        &self,
        resource: &ResourceShape,
        role: LifecycleRole,
    ) -> ModelResult<BTreeMap<String, String>> {
        let mut bindings = BTreeMap::new();
        if !role.is_instance() {
            return Ok(bindings);
        }
        let Some(operation) = resource.operation(role) else {
            return Ok(bindings);
        };
        let Some(input) = self.operation_input(operation)? else {
            return Ok(bindings);
        };

        for name in resource.identifier_names() {
            let explicit = input
                .members
                .iter()
                .find(|m| m.traits.resource_identifier.as_deref() == Some(name));
            if let Some(member) = explicit.or_else(|| input.get_member(name)) {
                bindings.insert(name.to_string(), member.name.clone());
            }
        }

        Ok(bindings)
    }
}

fn unexpected_kind(id: &ShapeId, expected: &'static str, shape: &Shape) -> ModelError {
    ModelError::UnexpectedShapeKind {
        id: id.clone(),
        expected,
        actual: shape.kind_name(),
    }
}
