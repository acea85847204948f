//! Validation orchestration.

use crate::{ConflictChecker, PropertyNameChecker, ValidateResult, ValidatorConfig};
use resdex_core::{Findings, ShapeId};
use resdex_index::{derive_resource, IndexError, IndexResult, ResourceIndex, ResourceSchema};
use resdex_model::Model;
use tracing::debug;

/// Runs every diagnostic pass over the resources of a model.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    names: Option<PropertyNameChecker>,
}

impl Validator {
    /// Create a validator, compiling the property name pattern.
    pub fn new(config: ValidatorConfig) -> ValidateResult<Self> {
        let names = if config.check_property_names {
            Some(PropertyNameChecker::new(
                &config.property_name_pattern,
                config.property_name_severity,
            )?)
        } else {
            None
        };
        Ok(Self { config, names })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate every resource selected by the index configuration.
    ///
    /// Findings never stop validation; only an inconsistent model does.
    pub fn validate(&self, model: &Model) -> IndexResult<Findings> {
        let index = ResourceIndex::with_config(model, &self.config.index)?;
        let mut findings = Findings::new();
        for schema in index.schemas() {
            findings.merge(self.check(model, schema)?);
        }
        debug!(
            resources = index.len(),
            findings = findings.len(),
            "validated model"
        );
        Ok(findings)
    }

    /// Validate a single resource.
    pub fn validate_resource(&self, model: &Model, resource: &ShapeId) -> IndexResult<Findings> {
        let schema = derive_resource(model, resource, &self.config.index)?;
        self.check(model, &schema)
    }

    fn check(&self, model: &Model, schema: &ResourceSchema) -> IndexResult<Findings> {
        let mut findings = schema.findings().clone();

        let conflicts = ConflictChecker::new(model, self.config.conflict_severity)
            .check(schema)
            .map_err(|source| IndexError::Derivation {
                resource: schema.resource().clone(),
                source,
            })?;
        findings.merge(conflicts);

        if let Some(names) = &self.names {
            findings.merge(names.check(schema));
        }
        Ok(findings)
    }
}
