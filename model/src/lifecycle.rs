//! Lifecycle roles a resource binds operations to.

use std::fmt;

/// A named role a resource binds to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifecycleRole {
    Create,
    Read,
    Update,
    Delete,
    Put,
    List,
}

impl LifecycleRole {
    /// Instance roles address one existing resource instance, so their input
    /// carries the resource identifiers. Collection roles do not.
    pub fn is_instance(&self) -> bool {
        matches!(
            self,
            LifecycleRole::Read | LifecycleRole::Update | LifecycleRole::Delete | LifecycleRole::Put
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleRole::Create => "create",
            LifecycleRole::Read => "read",
            LifecycleRole::Update => "update",
            LifecycleRole::Delete => "delete",
            LifecycleRole::Put => "put",
            LifecycleRole::List => "list",
        }
    }
}

impl fmt::Display for LifecycleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
