//! Exclusion collection.
//!
//! Walks every structure a resource consumes and records the identity of
//! each member annotated for exclusion, descending through members that
//! target nested structures.

use resdex_core::{Finding, FindingCode, Findings, ModelResult, ShapeId};
use resdex_model::{MemberShape, Model, Shape, StructureShape};
use std::collections::BTreeSet;
use tracing::trace;

/// Accumulates excluded member identities for one resource.
///
/// The set is shared by every structure walked for the resource; it is never
/// reset between lifecycle roles.
pub struct ExclusionCollector<'m> {
    model: &'m Model,
    resource: ShapeId,
    excluded: BTreeSet<ShapeId>,
}

impl<'m> ExclusionCollector<'m> {
    pub fn new(model: &'m Model, resource: &ShapeId) -> Self {
        Self {
            model,
            resource: resource.clone(),
            excluded: BTreeSet::new(),
        }
    }

    /// Walk a structure, adding its excluded members (and those of nested
    /// structures) to the set.
    ///
    /// Excluded members that also carry an explicit mutability are reported.
    /// Fails when a member targets a shape the model does not contain.
    pub fn collect(&mut self, structure: &StructureShape, findings: &mut Findings) -> ModelResult<()> {
        let mut visiting = BTreeSet::new();
        self.visit_structure(structure, &mut visiting, findings)
    }

    /// Excluded identities gathered so far.
    pub fn excluded(&self) -> &BTreeSet<ShapeId> {
        &self.excluded
    }

    pub fn finish(self) -> BTreeSet<ShapeId> {
        self.excluded
    }

    fn visit_shape(
        &mut self,
        shape: &Shape,
        visiting: &mut BTreeSet<ShapeId>,
        findings: &mut Findings,
    ) -> ModelResult<()> {
        match shape {
            Shape::Structure(structure) => self.visit_structure(structure, visiting, findings),
            Shape::Union(_)
            | Shape::List(_)
            | Shape::Map(_)
            | Shape::Scalar(_)
            | Shape::Operation(_)
            | Shape::Resource(_) => Ok(()),
        }
    }

    fn visit_structure(
        &mut self,
        structure: &StructureShape,
        visiting: &mut BTreeSet<ShapeId>,
        findings: &mut Findings,
    ) -> ModelResult<()> {
        // Recursive structures: never re-enter one already on the path.
        if !visiting.insert(structure.id.clone()) {
            return Ok(());
        }

        for member in &structure.members {
            if member.is_excluded() {
                self.exclude(member, findings);
            } else {
                let target = self.model.expect_shape(&member.target)?;
                self.visit_shape(target, visiting, findings)?;
            }
        }

        visiting.remove(&structure.id);
        Ok(())
    }

    fn exclude(&mut self, member: &MemberShape, findings: &mut Findings) {
        trace!(resource = %self.resource, member = %member.id, "excluding member");
        if let Some(mutability) = member.traits.mutability {
            findings.push(
                Finding::warning(
                    self.resource.clone(),
                    FindingCode::ExcludedExplicitMutability,
                    format!(
                        "Member `{}` is excluded from the properties of `{}` but declares `{}` mutability; the mutability is ignored.",
                        member.id,
                        self.resource,
                        mutability.as_str()
                    ),
                )
                .with_property(member.property_name())
                .with_member(member.id.clone()),
            );
        }
        self.excluded.insert(member.id.clone());
    }
}
