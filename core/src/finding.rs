//! Validation finding types.
//!
//! Findings are diagnostics produced while deriving resource properties.
//! They never abort a derivation; rendering them is left to the caller.

use crate::ShapeId;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The model must be fixed before its output can be trusted.
    Error,
    /// Suspicious, but the derived output is still usable as-is.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("ERROR"),
            Severity::Warning => f.write_str("WARNING"),
        }
    }
}

/// What kind of problem a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCode {
    /// One property name resolves to members targeting different shapes.
    TargetConflict,
    /// A member is both an additional identifier and write-only.
    AdditionalIdentifierWriteOnly,
    /// A member is excluded but also carries an explicit mutability.
    ExcludedExplicitMutability,
    /// A derived property name does not match the configured pattern.
    InvalidPropertyName,
}

impl FindingCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCode::TargetConflict => "TargetConflict",
            FindingCode::AdditionalIdentifierWriteOnly => "AdditionalIdentifierWriteOnly",
            FindingCode::ExcludedExplicitMutability => "ExcludedExplicitMutability",
            FindingCode::InvalidPropertyName => "InvalidPropertyName",
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
///
/// Carries enough identity (resource, property, member, targets) to be
/// rendered without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Finding {
    /// The resource the finding was raised for.
    pub resource: ShapeId,
    /// The derived property name involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// What went wrong.
    pub code: FindingCode,
    /// How bad it is.
    pub severity: Severity,
    /// The member that triggered the finding, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ShapeId>,
    /// Conflicting target shapes (empty unless the finding is a conflict).
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub targets: BTreeSet<ShapeId>,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Create a new finding.
    pub fn new(
        resource: ShapeId,
        code: FindingCode,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            resource,
            property: None,
            code,
            severity,
            member: None,
            targets: BTreeSet::new(),
            message: message.into(),
        }
    }

    /// Create an error-level finding.
    pub fn error(resource: ShapeId, code: FindingCode, message: impl Into<String>) -> Self {
        Self::new(resource, code, Severity::Error, message)
    }

    /// Create a warning-level finding.
    pub fn warning(resource: ShapeId, code: FindingCode, message: impl Into<String>) -> Self {
        Self::new(resource, code, Severity::Warning, message)
    }

    /// Add the property name to the finding context.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Add the offending member to the finding context.
    pub fn with_member(mut self, member: ShapeId) -> Self {
        self.member = Some(member);
        self
    }

    /// Add the conflicting targets to the finding context.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = ShapeId>) -> Self {
        self.targets.extend(targets);
        self
    }

    /// Check if this is an error-level finding.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning-level finding.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.resource, self.code, self.message
        )
    }
}

/// Collection of findings.
///
/// Keeps insertion order and drops exact duplicates, so walking the same
/// structure under several lifecycle roles reports each problem once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Findings {
    findings: Vec<Finding>,
}

impl Findings {
    /// Create a new empty findings collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding unless an identical one is already present.
    pub fn push(&mut self, finding: Finding) {
        if !self.findings.contains(&finding) {
            self.findings.push(finding);
        }
    }

    /// Check if there are any findings.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Check if there are any error-level findings.
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.is_error())
    }

    /// Get all findings.
    pub fn all(&self) -> &[Finding] {
        &self.findings
    }

    /// Get error-level findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    /// Get warning-level findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_warning())
    }

    /// Get findings with the given code.
    pub fn with_code(&self, code: FindingCode) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.code == code)
    }

    /// Get the number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Merge another findings collection.
    pub fn merge(&mut self, other: Findings) {
        for finding in other {
            self.push(finding);
        }
    }
}

impl Extend<Finding> for Findings {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        for finding in iter {
            self.push(finding);
        }
    }
}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}
