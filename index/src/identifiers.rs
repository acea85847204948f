//! Identifier derivation.

use crate::fusion::PropertyMapBuilder;
use crate::PropertyDefinition;
use resdex_core::{Finding, FindingCode, Findings, MutabilitySet, ShapeId};
use resdex_model::{ResourceShape, StructureShape};
use std::collections::BTreeSet;
use tracing::debug;

/// Mutability of every primary identifier of a resource.
///
/// A put operation lets the caller choose the identifier on creation;
/// otherwise it is generated and only ever read.
pub fn identifier_mutability(resource: &ResourceShape) -> MutabilitySet {
    if resource.has_put() {
        MutabilitySet::CREATE | MutabilitySet::READ
    } else {
        MutabilitySet::READ
    }
}

/// Seed the primary identifiers, returning their names in declaration order.
pub(crate) fn seed_primary_identifiers(
    resource: &ResourceShape,
    properties: &mut PropertyMapBuilder,
) -> Vec<String> {
    let mutability = identifier_mutability(resource);
    let mut names = Vec::with_capacity(resource.identifiers.len());

    for (name, target) in &resource.identifiers {
        properties.seed(name, PropertyDefinition::identifier(target.clone(), mutability));
        names.push(name.clone());
    }

    debug!(resource = %resource.id, identifiers = ?names, %mutability, "seeded primary identifiers");
    names
}

/// Collect additional identifiers from the read operation's input.
///
/// Each annotated member becomes its own single-name identifier set and a
/// read-only property (or its explicit mutability) unless the name is
/// already present. A member that is also explicitly write-only is reported
/// and not added.
pub(crate) fn collect_additional_identifiers(
    resource: &ShapeId,
    read_input: &StructureShape,
    properties: &mut PropertyMapBuilder,
    findings: &mut Findings,
) -> Vec<BTreeSet<String>> {
    let mut sets = Vec::new();

    for member in read_input.members.iter().filter(|m| m.is_additional_identifier()) {
        let name = member.property_name();

        if let Some(explicit) = member.traits.mutability {
            if explicit.mutabilities().is_write_only() {
                findings.push(
                    Finding::error(
                        resource.clone(),
                        FindingCode::AdditionalIdentifierWriteOnly,
                        format!(
                            "Member `{}` is an additional identifier of `{}` and cannot have `{}` mutability.",
                            member.id,
                            resource,
                            explicit.as_str()
                        ),
                    )
                    .with_property(name)
                    .with_member(member.id.clone()),
                );
                continue;
            }
        }

        properties.seed(name, PropertyDefinition::from_member(member, MutabilitySet::READ));
        sets.push(BTreeSet::from([name.to_string()]));
    }

    sets
}
