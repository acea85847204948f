//! The resource index.

use crate::exclusion::ExclusionCollector;
use crate::fusion::{role_structures, PropertyMapBuilder};
use crate::identifiers::{collect_additional_identifiers, seed_primary_identifiers};
use crate::{IndexConfig, IndexError, IndexResult, PropertyDefinition, PropertyMap, ResourceSchema};
use resdex_core::{Findings, ModelResult, ShapeId};
use resdex_model::{Model, ResourceShape, ResourceTrait};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

static EMPTY_PROPERTIES: PropertyMap = BTreeMap::new();
static EMPTY_IDENTITIES: BTreeSet<ShapeId> = BTreeSet::new();

/// Derived schemas of every resource in a model, keyed by resource id.
///
/// Queries for a resource that was not derived return empty results.
#[derive(Debug, Default)]
pub struct ResourceIndex {
    schemas: BTreeMap<ShapeId, ResourceSchema>,
}

impl ResourceIndex {
    /// Derive every annotated resource with the default configuration.
    pub fn build(model: &Model) -> IndexResult<Self> {
        Self::with_config(model, &IndexConfig::default())
    }

    /// Derive every resource selected by `config`, in shape-id order.
    pub fn with_config(model: &Model, config: &IndexConfig) -> IndexResult<Self> {
        let mut schemas = BTreeMap::new();
        for resource in model.resources() {
            if resource.resource_trait.is_none() && config.require_resource_trait {
                continue;
            }
            let schema = derive_resource(model, &resource.id, config)?;
            schemas.insert(resource.id.clone(), schema);
        }
        debug!(resources = schemas.len(), "built resource index");
        Ok(Self { schemas })
    }

    pub fn schema(&self, resource: &ShapeId) -> Option<&ResourceSchema> {
        self.schemas.get(resource)
    }

    pub fn schemas(&self) -> impl Iterator<Item = &ResourceSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    // ==================== Queries ====================

    pub fn properties(&self, resource: &ShapeId) -> &PropertyMap {
        self.schema(resource)
            .map_or(&EMPTY_PROPERTIES, ResourceSchema::properties)
    }

    pub fn property(&self, resource: &ShapeId, name: &str) -> Option<&PropertyDefinition> {
        self.schema(resource)?.property(name)
    }

    pub fn create_only_properties(&self, resource: &ShapeId) -> BTreeSet<&str> {
        self.schema(resource)
            .map(ResourceSchema::create_only_properties)
            .unwrap_or_default()
    }

    pub fn read_only_properties(&self, resource: &ShapeId) -> BTreeSet<&str> {
        self.schema(resource)
            .map(ResourceSchema::read_only_properties)
            .unwrap_or_default()
    }

    pub fn write_only_properties(&self, resource: &ShapeId) -> BTreeSet<&str> {
        self.schema(resource)
            .map(ResourceSchema::write_only_properties)
            .unwrap_or_default()
    }

    pub fn primary_identifiers(&self, resource: &ShapeId) -> &[String] {
        self.schema(resource)
            .map_or(&[][..], ResourceSchema::primary_identifiers)
    }

    pub fn additional_identifiers(&self, resource: &ShapeId) -> &[BTreeSet<String>] {
        self.schema(resource)
            .map_or(&[][..], ResourceSchema::additional_identifiers)
    }

    pub fn excluded_identities(&self, resource: &ShapeId) -> &BTreeSet<ShapeId> {
        self.schema(resource)
            .map_or(&EMPTY_IDENTITIES, ResourceSchema::excluded_identities)
    }

    /// Derivation findings of every resource, in resource order.
    pub fn findings(&self) -> Findings {
        let mut findings = Findings::new();
        for schema in self.schemas.values() {
            findings.extend(schema.findings().all().iter().cloned());
        }
        findings
    }
}

/// Derive the schema of a single resource.
///
/// Each resource is independent of every other; the model is only read.
pub fn derive_resource(
    model: &Model,
    resource: &ShapeId,
    config: &IndexConfig,
) -> IndexResult<ResourceSchema> {
    let shape = model.expect_resource(resource)?;
    let resource_trait = match &shape.resource_trait {
        Some(resource_trait) => Some(resource_trait),
        None if config.require_resource_trait => {
            return Err(IndexError::NotAnnotated(resource.clone()))
        }
        None => None,
    };

    let schema = derive(model, shape, resource_trait).map_err(|source| IndexError::Derivation {
        resource: resource.clone(),
        source,
    })?;

    for finding in schema.findings() {
        warn!(resource = %resource, code = %finding.code, "{}", finding.message);
    }
    debug!(
        resource = %resource,
        name = schema.name(),
        properties = schema.properties().len(),
        excluded = schema.excluded_identities().len(),
        "derived resource"
    );
    Ok(schema)
}

fn derive(
    model: &Model,
    resource: &ResourceShape,
    resource_trait: Option<&ResourceTrait>,
) -> ModelResult<ResourceSchema> {
    let mut findings = Findings::new();
    let mut properties = PropertyMapBuilder::new();
    let mut exclusions = ExclusionCollector::new(model, &resource.id);

    let primary = seed_primary_identifiers(resource, &mut properties);

    let mut additional = Vec::new();
    if let Some(read) = &resource.read {
        if let Some(input) = model.operation_input(read)? {
            additional = collect_additional_identifiers(&resource.id, input, &mut properties, &mut findings);
        }
    }

    for role in role_structures(model, resource, resource_trait)? {
        exclusions.collect(role.structure, &mut findings)?;
        properties.fuse(&role, exclusions.excluded());
    }

    let name = match resource_trait {
        Some(resource_trait) => resource_trait.resolved_name(&resource.id),
        None => resource.id.name(),
    };

    Ok(ResourceSchema::new(
        resource.id.clone(),
        name.to_string(),
        properties.finish(),
        primary,
        additional,
        exclusions.finish(),
        findings,
    ))
}
