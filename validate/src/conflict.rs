//! Target conflict detection.
//!
//! Fusion keeps the first target it sees for a property. This pass looks at
//! every contributing member instead and reports names that resolve to more
//! than one target.

use resdex_core::{Finding, FindingCode, Findings, ModelResult, Severity, ShapeId};
use resdex_index::{role_structures, ResourceSchema};
use resdex_model::{Model, ResourceShape, ResourceTrait};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Collect every target each property name resolves to across a resource's
/// role structures, in fusion order. Directly excluded members are skipped.
pub fn property_targets(
    model: &Model,
    resource: &ResourceShape,
    resource_trait: Option<&ResourceTrait>,
) -> ModelResult<BTreeMap<String, BTreeSet<ShapeId>>> {
    let mut targets: BTreeMap<String, BTreeSet<ShapeId>> = BTreeMap::new();

    for role in role_structures(model, resource, resource_trait)? {
        for member in role.structure.members.iter().filter(|m| !m.is_excluded()) {
            targets
                .entry(member.property_name().to_string())
                .or_default()
                .insert(member.target.clone());
        }
    }

    Ok(targets)
}

/// Reports properties whose members target different shapes.
pub struct ConflictChecker<'m> {
    model: &'m Model,
    severity: Severity,
}

impl<'m> ConflictChecker<'m> {
    pub fn new(model: &'m Model, severity: Severity) -> Self {
        Self { model, severity }
    }

    /// Check one derived resource. One finding per conflicting property,
    /// listing every distinct target.
    pub fn check(&self, schema: &ResourceSchema) -> ModelResult<Findings> {
        let resource = self.model.expect_resource(schema.resource())?;
        let targets = property_targets(self.model, resource, resource.resource_trait.as_ref())?;

        let mut findings = Findings::new();
        for (property, targets) in targets.into_iter().filter(|(_, t)| t.len() > 1) {
            let listed: Vec<String> = targets.iter().map(ToString::to_string).collect();
            debug!(resource = %resource.id, property = %property, targets = ?listed, "target conflict");
            findings.push(
                Finding::new(
                    resource.id.clone(),
                    FindingCode::TargetConflict,
                    self.severity,
                    format!(
                        "The `{}` property of the `{}` resource targets multiple shapes: [{}]. \
                         This should be resolved in the model or one of the members should be \
                         excluded from the conversion.",
                        property,
                        schema.name(),
                        listed.join(", ")
                    ),
                )
                .with_property(property)
                .with_targets(targets),
            );
        }

        Ok(findings)
    }
}
