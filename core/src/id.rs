//! Identity types for shapes.
//!
//! A shape id has the form `namespace#Name`. Members of aggregate shapes
//! extend their container's id with `$member`, e.g. `example#Foo$fooId`.
//! Ids are:
//! - Unique within a model
//! - Immutable once assigned
//! - Totally ordered, so every map keyed by them iterates deterministically

use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a shape or a member of an aggregate shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    name: String,
    member: Option<String>,
}

impl ShapeId {
    /// Create a new top-level shape id.
    ///
    /// The parts are not checked; use [`ShapeId::parse`] for untrusted input.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            member: None,
        }
    }

    /// Parse a shape id from its textual form.
    pub fn parse(text: &str) -> ModelResult<Self> {
        let invalid = |reason| ModelError::InvalidShapeId {
            id: text.to_string(),
            reason,
        };

        let (namespace, rest) = text.split_once('#').ok_or_else(|| invalid("missing '#'"))?;
        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };

        if namespace.is_empty() || !namespace.split('.').all(is_identifier) {
            return Err(invalid("malformed namespace"));
        }
        if !is_identifier(name) {
            return Err(invalid("malformed shape name"));
        }
        if let Some(member) = member {
            if !is_identifier(member) {
                return Err(invalid("malformed member name"));
            }
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: member.map(str::to_string),
        })
    }

    /// The namespace part.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The shape name part.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member name, if this id names a member.
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Returns true if this id names a member of an aggregate shape.
    pub fn is_member(&self) -> bool {
        self.member.is_some()
    }

    /// Build the id of a member of this shape.
    pub fn with_member(&self, member: impl Into<String>) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(member.into()),
        }
    }

    /// The id of the containing shape (drops any member part).
    pub fn container(&self) -> Self {
        Self::new(self.namespace.clone(), self.name.clone())
    }
}

fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${}", member)?;
        }
        Ok(())
    }
}

impl FromStr for ShapeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShapeId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}
