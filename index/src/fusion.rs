//! Property fusion.
//!
//! Lifecycle roles are fused into a per-resource property map in the fixed
//! order of [`LIFECYCLE_ROLES`]. Later roles merge into records created by
//! earlier ones, so the order is part of the result.

use crate::{PropertyDefinition, PropertyMap};
use resdex_core::{ModelResult, MutabilitySet, ShapeId};
use resdex_model::{LifecycleRole, MemberShape, Model, ResourceShape, ResourceTrait, StructureShape};
use std::collections::btree_map::Entry;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// A role whose structures contribute properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FusionRole {
    Read,
    Put,
    Create,
    Update,
    /// A structure listed by the resource annotation.
    AdditionalSchema,
}

impl FusionRole {
    /// The lifecycle role bound to an operation, if any.
    pub fn lifecycle(&self) -> Option<LifecycleRole> {
        match self {
            FusionRole::Read => Some(LifecycleRole::Read),
            FusionRole::Put => Some(LifecycleRole::Put),
            FusionRole::Create => Some(LifecycleRole::Create),
            FusionRole::Update => Some(LifecycleRole::Update),
            FusionRole::AdditionalSchema => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FusionRole::Read => "read",
            FusionRole::Put => "put",
            FusionRole::Create => "create",
            FusionRole::Update => "update",
            FusionRole::AdditionalSchema => "additional-schema",
        }
    }
}

impl fmt::Display for FusionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which structure a role consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureSource {
    /// The bound operation's input.
    Input,
    /// The bound operation's output.
    Output,
    /// The schema structure itself.
    Schema,
}

/// How one role contributes to the property map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDescriptor {
    pub role: FusionRole,
    pub source: StructureSource,
    /// Mutability of a property first observed in this role.
    pub default: MutabilitySet,
    /// Mutability unioned into a derived property seen earlier.
    pub merge: MutabilitySet,
}

/// Fusion order. Reordering changes results.
pub const LIFECYCLE_ROLES: [RoleDescriptor; 5] = [
    RoleDescriptor {
        role: FusionRole::Read,
        source: StructureSource::Output,
        default: MutabilitySet::READ,
        merge: MutabilitySet::READ,
    },
    RoleDescriptor {
        role: FusionRole::Put,
        source: StructureSource::Input,
        default: MutabilitySet::CREATE.union(MutabilitySet::WRITE),
        merge: MutabilitySet::CREATE.union(MutabilitySet::WRITE),
    },
    RoleDescriptor {
        role: FusionRole::Create,
        source: StructureSource::Input,
        default: MutabilitySet::CREATE,
        merge: MutabilitySet::CREATE,
    },
    RoleDescriptor {
        role: FusionRole::Update,
        source: StructureSource::Input,
        default: MutabilitySet::WRITE,
        merge: MutabilitySet::WRITE,
    },
    RoleDescriptor {
        role: FusionRole::AdditionalSchema,
        source: StructureSource::Schema,
        default: MutabilitySet::empty(),
        merge: MutabilitySet::empty(),
    },
];

/// A structure consumed by a role, with the member names its operation
/// binds to resource identifiers.
#[derive(Debug, Clone)]
pub struct RoleStructure<'m> {
    pub descriptor: RoleDescriptor,
    pub structure: &'m StructureShape,
    /// Members skipped during fusion; their mutability is fixed up front.
    pub bound_members: BTreeSet<String>,
}

impl RoleStructure<'_> {
    pub fn role(&self) -> FusionRole {
        self.descriptor.role
    }

    pub fn is_bound(&self, member: &MemberShape) -> bool {
        self.bound_members.contains(&member.name)
    }
}

/// Resolve every structure a resource consumes, in fusion order.
///
/// Roles without a bound operation, and operations without the consumed
/// structure, contribute nothing. A reference that does not resolve to a
/// structure fails the whole resource.
pub fn role_structures<'m>(
    model: &'m Model,
    resource: &ResourceShape,
    resource_trait: Option<&ResourceTrait>,
) -> ModelResult<Vec<RoleStructure<'m>>> {
    let mut structures = Vec::new();

    for descriptor in LIFECYCLE_ROLES {
        let Some(lifecycle) = descriptor.role.lifecycle() else {
            for schema in resource_trait.map_or(&[][..], |t| &t.additional_schemas[..]) {
                structures.push(RoleStructure {
                    descriptor,
                    structure: model.expect_structure(schema)?,
                    bound_members: BTreeSet::new(),
                });
            }
            continue;
        };

        let Some(operation) = resource.operation(lifecycle) else {
            continue;
        };
        let structure = match descriptor.source {
            StructureSource::Input => model.operation_input(operation)?,
            StructureSource::Output => model.operation_output(operation)?,
            StructureSource::Schema => None,
        };
        if let Some(structure) = structure {
            let bound_members = model
                .identifier_bindings(resource, lifecycle)?
                .into_values()
                .collect();
            structures.push(RoleStructure {
                descriptor,
                structure,
                bound_members,
            });
        }
    }

    Ok(structures)
}

/// Running property map for one resource derivation.
///
/// A name is either absent or present with a (possibly empty) set; the
/// builder is consumed into an immutable map once every role is fused.
#[derive(Debug, Default)]
pub(crate) struct PropertyMapBuilder {
    properties: PropertyMap,
}

impl PropertyMapBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a definition unless the name is already present.
    pub(crate) fn seed(&mut self, name: &str, definition: PropertyDefinition) -> bool {
        match self.properties.entry(name.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(definition);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.get(name)
    }

    /// Fuse one role's structure into the map.
    ///
    /// A record introduced by a member in `excluded` is not visible, so the
    /// next member with the same name replaces it instead of merging into it.
    pub(crate) fn fuse(&mut self, role: &RoleStructure<'_>, excluded: &BTreeSet<ShapeId>) {
        let descriptor = role.descriptor;
        let mut fused = 0usize;

        for member in &role.structure.members {
            if role.is_bound(member) {
                continue;
            }
            match self.properties.entry(member.property_name().to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(PropertyDefinition::from_member(member, descriptor.default));
                }
                Entry::Occupied(mut entry) if excluded.contains(entry.get().source()) => {
                    entry.insert(PropertyDefinition::from_member(member, descriptor.default));
                }
                Entry::Occupied(mut entry) => entry.get_mut().absorb(member, descriptor.merge),
            }
            fused += 1;
        }

        debug!(
            role = %descriptor.role,
            structure = %role.structure.id,
            members = fused,
            "fused role structure"
        );
    }

    pub(crate) fn finish(self) -> PropertyMap {
        self.properties
    }
}
