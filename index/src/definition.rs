//! Derived property definitions.

use resdex_core::{MutabilitySet, ShapeId};
use resdex_model::MemberShape;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;

/// Property name -> definition, ordered by name.
pub type PropertyMap = BTreeMap<String, PropertyDefinition>;

/// Where a property's mutability came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Seeded from a primary identifier before any role was fused.
    Identifier,
    /// Fixed by a mutability annotation on a member.
    Explicit,
    /// Accumulated from lifecycle role contributions.
    Derived,
}

/// A property derived for a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    /// The member that introduced the property, or the identifier's target.
    source: ShapeId,
    /// The first-observed target shape.
    target: ShapeId,
    mutability: MutabilitySet,
    provenance: Provenance,
}

impl PropertyDefinition {
    /// A primary identifier property.
    pub(crate) fn identifier(target: ShapeId, mutability: MutabilitySet) -> Self {
        Self {
            source: target.clone(),
            target,
            mutability,
            provenance: Provenance::Identifier,
        }
    }

    /// A property introduced by a member.
    ///
    /// The member's explicit mutability wins over the role contribution.
    pub(crate) fn from_member(member: &MemberShape, contribution: MutabilitySet) -> Self {
        match member.traits.mutability {
            Some(explicit) => Self {
                provenance: Provenance::Explicit,
                ..Self::derived(member, explicit.mutabilities())
            },
            None => Self::derived(member, contribution),
        }
    }

    /// A derived property introduced by a member.
    fn derived(member: &MemberShape, mutability: MutabilitySet) -> Self {
        Self {
            source: member.id.clone(),
            target: member.target.clone(),
            mutability,
            provenance: Provenance::Derived,
        }
    }

    /// Fold a later observation of the same property into this definition.
    ///
    /// Identifier and explicit definitions never change. A derived one is
    /// replaced by an explicit annotation or widened by the contribution.
    pub(crate) fn absorb(&mut self, member: &MemberShape, contribution: MutabilitySet) {
        if self.has_explicit_mutability() {
            return;
        }
        match member.traits.mutability {
            Some(explicit) => {
                self.mutability = explicit.mutabilities();
                self.provenance = Provenance::Explicit;
            }
            None => self.mutability |= contribution,
        }
    }

    pub fn source(&self) -> &ShapeId {
        &self.source
    }

    pub fn target(&self) -> &ShapeId {
        &self.target
    }

    pub fn mutability(&self) -> MutabilitySet {
        self.mutability
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// True when later contributions can no longer change the mutability.
    pub fn has_explicit_mutability(&self) -> bool {
        matches!(self.provenance, Provenance::Identifier | Provenance::Explicit)
    }
}

impl Serialize for PropertyDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PropertyDefinition", 5)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("mutability", &self.mutability)?;
        state.serialize_field("explicit", &self.has_explicit_mutability())?;
        state.serialize_field("provenance", &self.provenance)?;
        state.end()
    }
}
