//! Finalized per-resource schema.

use crate::{PropertyDefinition, PropertyMap};
use resdex_core::{Findings, ShapeId};
use serde::Serialize;
use std::collections::BTreeSet;

/// The derived property schema of one resource.
///
/// Immutable once derived. Properties whose introducing member is excluded
/// are kept apart from the visible map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSchema {
    resource: ShapeId,
    /// External resource name.
    name: String,
    properties: PropertyMap,
    #[serde(skip_serializing_if = "PropertyMap::is_empty")]
    excluded_properties: PropertyMap,
    primary_identifiers: Vec<String>,
    additional_identifiers: Vec<BTreeSet<String>>,
    excluded_identities: BTreeSet<ShapeId>,
    findings: Findings,
}

impl ResourceSchema {
    pub(crate) fn new(
        resource: ShapeId,
        name: String,
        fused: PropertyMap,
        primary_identifiers: Vec<String>,
        additional_identifiers: Vec<BTreeSet<String>>,
        excluded_identities: BTreeSet<ShapeId>,
        findings: Findings,
    ) -> Self {
        let (excluded_properties, properties): (PropertyMap, PropertyMap) = fused
            .into_iter()
            .partition(|(_, def)| excluded_identities.contains(def.source()));
        Self {
            resource,
            name,
            properties,
            excluded_properties,
            primary_identifiers,
            additional_identifiers,
            excluded_identities,
            findings,
        }
    }

    pub fn resource(&self) -> &ShapeId {
        &self.resource
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visible properties: the fused map without excluded members.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.get(name)
    }

    /// Fused properties filtered out because their member is excluded.
    pub fn excluded_properties(&self) -> &PropertyMap {
        &self.excluded_properties
    }

    /// Names settable on creation but never updated.
    pub fn create_only_properties(&self) -> BTreeSet<&str> {
        self.names_where(|def| def.mutability().is_create_only())
    }

    /// Names whose mutability is exactly {READ}.
    pub fn read_only_properties(&self) -> BTreeSet<&str> {
        self.names_where(|def| def.mutability().is_read_only())
    }

    /// Names never returned to the caller.
    pub fn write_only_properties(&self) -> BTreeSet<&str> {
        self.names_where(|def| def.mutability().is_write_only())
    }

    pub fn primary_identifiers(&self) -> &[String] {
        &self.primary_identifiers
    }

    pub fn additional_identifiers(&self) -> &[BTreeSet<String>] {
        &self.additional_identifiers
    }

    /// Raw excluded member identities.
    pub fn excluded_identities(&self) -> &BTreeSet<ShapeId> {
        &self.excluded_identities
    }

    /// Findings raised while deriving this resource.
    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    fn names_where(&self, predicate: impl Fn(&PropertyDefinition) -> bool) -> BTreeSet<&str> {
        self.properties
            .iter()
            .filter(|(_, def)| predicate(def))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
