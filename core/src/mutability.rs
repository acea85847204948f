//! Property mutability.
//!
//! A derived property carries a subset of {CREATE, READ, WRITE} describing
//! when it may be supplied by a caller or observed in a response.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single mutability option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mutability {
    /// The value may be supplied when the resource is created.
    Create,
    /// The value is returned when the resource is read.
    Read,
    /// The value may be supplied when the resource is updated.
    Write,
}

impl Mutability {
    /// Every option, in canonical order.
    pub const ALL: [Mutability; 3] = [Mutability::Create, Mutability::Read, Mutability::Write];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mutability::Create => "CREATE",
            Mutability::Read => "READ",
            Mutability::Write => "WRITE",
        }
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// A set of mutability options.
    ///
    /// The empty set is a legitimate value (a property observed only through
    /// an additional schema); "never observed" is represented by the absence
    /// of a property, not by an empty set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct MutabilitySet: u8 {
        const CREATE = 1 << 0;
        const READ = 1 << 1;
        const WRITE = 1 << 2;
    }
}

impl MutabilitySet {
    /// {CREATE, READ, WRITE}.
    pub const FULLY_MUTABLE: MutabilitySet = MutabilitySet::all();

    /// Returns true if the set contains the given option.
    pub fn has(&self, mutability: Mutability) -> bool {
        self.contains(mutability.into())
    }

    /// Iterate over the contained options in canonical order.
    pub fn mutabilities(&self) -> impl Iterator<Item = Mutability> {
        let set = *self;
        Mutability::ALL.into_iter().filter(move |m| set.has(*m))
    }

    /// Contains CREATE but not WRITE: settable only when the resource is
    /// created (whether or not it is read back).
    pub fn is_create_only(&self) -> bool {
        self.contains(Self::CREATE) && !self.contains(Self::WRITE)
    }

    /// Exactly {READ}.
    pub fn is_read_only(&self) -> bool {
        *self == Self::READ
    }

    /// Never returned to the caller: exactly {CREATE}, or WRITE without READ.
    pub fn is_write_only(&self) -> bool {
        if *self == Self::CREATE {
            return true;
        }
        self.contains(Self::WRITE) && !self.contains(Self::READ)
    }
}

impl From<Mutability> for MutabilitySet {
    fn from(mutability: Mutability) -> Self {
        match mutability {
            Mutability::Create => MutabilitySet::CREATE,
            Mutability::Read => MutabilitySet::READ,
            Mutability::Write => MutabilitySet::WRITE,
        }
    }
}

impl FromIterator<Mutability> for MutabilitySet {
    fn from_iter<I: IntoIterator<Item = Mutability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MutabilitySet::empty(), |set, m| set | m.into())
    }
}

impl fmt::Display for MutabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, m) in self.mutabilities().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(m.as_str())?;
        }
        f.write_str("}")
    }
}

impl Serialize for MutabilitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.mutabilities())
    }
}
