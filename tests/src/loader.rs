//! Loader for JSON model fixtures.
//!
//! A fixture maps shape ids to shape documents tagged by `type`. Members
//! and identifiers are arrays so declaration order survives parsing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use resdex_core::ModelResult;
use resdex_model::{MemberDef, MemberTraits, Model, ModelBuilder, ScalarKind};
use serde::Deserialize;

use crate::error::{FixtureError, FixtureResult};

/// A parsed model fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDocument {
    /// Free-form note on what the fixture exercises.
    #[serde(default)]
    pub description: Option<String>,
    /// Shapes by id.
    pub shapes: BTreeMap<String, ShapeDocument>,
}

/// A single shape in a fixture.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeDocument {
    Structure {
        #[serde(default)]
        members: Vec<MemberDocument>,
    },
    Union {
        #[serde(default)]
        members: Vec<MemberDocument>,
    },
    List {
        member: String,
    },
    Map {
        key: String,
        value: String,
    },
    Scalar {
        kind: ScalarKind,
    },
    Operation {
        #[serde(default)]
        input: Option<String>,
        #[serde(default)]
        output: Option<String>,
    },
    Resource(ResourceDocument),
}

/// A member of a structure or union.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberDocument {
    pub name: String,
    pub target: String,
    #[serde(default)]
    pub traits: MemberTraits,
}

/// A resource shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceDocument {
    pub identifiers: Vec<IdentifierDocument>,
    pub create: Option<String>,
    pub read: Option<String>,
    pub update: Option<String>,
    pub delete: Option<String>,
    pub put: Option<String>,
    pub list: Option<String>,
    /// The resource annotation; absent means the resource is not annotated.
    pub resource: Option<ResourceAnnotationDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentifierDocument {
    pub name: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceAnnotationDocument {
    pub name: Option<String>,
    pub additional_schemas: Vec<String>,
}

impl ModelDocument {
    /// Parse a fixture from a string.
    pub fn parse(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Build the model the fixture describes.
    pub fn into_model(self) -> ModelResult<Model> {
        let mut builder = ModelBuilder::new();
        for (id, shape) in self.shapes {
            add_shape(&mut builder, id, shape)?;
        }
        builder.build()
    }
}

fn add_shape(builder: &mut ModelBuilder, id: String, shape: ShapeDocument) -> ModelResult<()> {
    match shape {
        ShapeDocument::Structure { members } => {
            let mut structure = builder.add_structure(id);
            for member in members {
                structure = structure.member(member_def(member));
            }
            structure.done()?;
        }
        ShapeDocument::Union { members } => {
            let mut union = builder.add_union(id);
            for member in members {
                union = union.member(member_def(member));
            }
            union.done()?;
        }
        ShapeDocument::List { member } => {
            builder.add_list(&id, &member)?;
        }
        ShapeDocument::Map { key, value } => {
            builder.add_map(&id, &key, &value)?;
        }
        ShapeDocument::Scalar { kind } => {
            builder.add_scalar(&id, kind)?;
        }
        ShapeDocument::Operation { input, output } => {
            let mut operation = builder.add_operation(id);
            if let Some(input) = input {
                operation = operation.input(input);
            }
            if let Some(output) = output {
                operation = operation.output(output);
            }
            operation.done()?;
        }
        ShapeDocument::Resource(doc) => add_resource(builder, id, doc)?,
    }
    Ok(())
}

fn add_resource(builder: &mut ModelBuilder, id: String, doc: ResourceDocument) -> ModelResult<()> {
    let mut resource = builder.add_resource(id);
    for identifier in doc.identifiers {
        resource = resource.identifier(identifier.name, identifier.target);
    }
    if let Some(op) = doc.create {
        resource = resource.create(op);
    }
    if let Some(op) = doc.read {
        resource = resource.read(op);
    }
    if let Some(op) = doc.update {
        resource = resource.update(op);
    }
    if let Some(op) = doc.delete {
        resource = resource.delete(op);
    }
    if let Some(op) = doc.put {
        resource = resource.put(op);
    }
    if let Some(op) = doc.list {
        resource = resource.list(op);
    }
    if let Some(annotation) = doc.resource {
        resource = resource.annotated();
        if let Some(name) = annotation.name {
            resource = resource.resource_name(name);
        }
        for schema in annotation.additional_schemas {
            resource = resource.additional_schema(schema);
        }
    }
    resource.done()?;
    Ok(())
}

fn member_def(member: MemberDocument) -> MemberDef {
    MemberDef::new(member.name, member.target).with_traits(member.traits)
}

/// Absolute path of a fixture under this crate's `fixtures/` directory.
pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(relative)
}

/// Read, parse and build a fixture.
pub fn load_fixture(relative: impl AsRef<Path>) -> FixtureResult<Model> {
    let path = fixture_path(relative);
    let source = fs::read_to_string(&path).map_err(|source| FixtureError::FileRead {
        path: path.clone(),
        source,
    })?;
    let document =
        ModelDocument::parse(&source).map_err(|source| FixtureError::Parse { path, source })?;
    Ok(document.into_model()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resdex_core::ShapeId;
    use resdex_model::MutabilityTrait;

    #[test]
    fn test_parse_inline_document() {
        let source = r#"{
            "shapes": {
                "example#Input": {
                    "type": "structure",
                    "members": [
                        { "name": "b", "target": "prelude#String" },
                        { "name": "a", "target": "example#Count",
                          "traits": { "mutability": "create-and-read", "propertyName": "A" } }
                    ]
                },
                "example#Count": { "type": "scalar", "kind": "bigDecimal" },
                "example#Op": { "type": "operation", "input": "example#Input" },
                "example#Res": {
                    "type": "resource",
                    "identifiers": [{ "name": "resId", "target": "prelude#String" }],
                    "create": "example#Op",
                    "resource": { "name": "Thing", "additionalSchemas": ["example#Input"] }
                }
            }
        }"#;

        let model = ModelDocument::parse(source).unwrap().into_model().unwrap();

        let input = model.expect_structure(&ShapeId::new("example", "Input")).unwrap();
        assert_eq!(input.member_names().collect::<Vec<_>>(), vec!["b", "a"]);
        let a = input.get_member("a").unwrap();
        assert_eq!(a.traits.mutability, Some(MutabilityTrait::CreateAndRead));
        assert_eq!(a.property_name(), "A");

        let resource = model.expect_resource(&ShapeId::new("example", "Res")).unwrap();
        let annotation = resource.resource_trait.as_ref().unwrap();
        assert_eq!(annotation.name.as_deref(), Some("Thing"));
        assert_eq!(annotation.additional_schemas.len(), 1);
    }

    #[test]
    fn test_unknown_shape_type_rejected() {
        let source = r#"{ "shapes": { "example#X": { "type": "service" } } }"#;

        assert!(ModelDocument::parse(source).is_err());
    }

    #[test]
    fn test_missing_fixture_file() {
        let result = load_fixture("does-not-exist.json");

        assert!(matches!(result, Err(FixtureError::FileRead { .. })));
    }
}
