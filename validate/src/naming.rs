//! Property name checks.

use crate::{ValidateError, ValidateResult};
use regex_lite::Regex;
use resdex_core::{Finding, FindingCode, Findings, Severity};
use resdex_index::ResourceSchema;

/// Checks visible property names against a pattern.
#[derive(Debug, Clone)]
pub struct PropertyNameChecker {
    pattern: Regex,
    severity: Severity,
}

impl PropertyNameChecker {
    pub fn new(pattern: &str, severity: Severity) -> ValidateResult<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ValidateError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern, severity })
    }

    pub fn check(&self, schema: &ResourceSchema) -> Findings {
        let mut findings = Findings::new();
        for (name, definition) in schema.properties() {
            if self.pattern.is_match(name) {
                continue;
            }
            findings.push(
                Finding::new(
                    schema.resource().clone(),
                    FindingCode::InvalidPropertyName,
                    self.severity,
                    format!(
                        "The `{}` property of the `{}` resource does not match the pattern `{}`.",
                        name,
                        schema.name(),
                        self.pattern.as_str()
                    ),
                )
                .with_property(name.as_str())
                .with_member(definition.source().clone()),
            );
        }
        findings
    }
}
