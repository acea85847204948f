//! Scenario definition.

use resdex_index::IndexConfig;
use resdex_model::Model;
use resdex_validate::ValidatorConfig;

use crate::assertion::{FindingsAssertion, ResourceAssertion};
use crate::error::{FixtureError, FixtureResult};
use crate::loader::{load_fixture, ModelDocument};
use crate::runner::Runner;

/// A named set of expectations over one model fixture.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    fixture: Option<String>,
    source: Option<String>,
    index_config: IndexConfig,
    validator_config: ValidatorConfig,
    resources: Vec<(String, ResourceAssertion)>,
    findings: Option<FindingsAssertion>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture: None,
            source: None,
            index_config: IndexConfig::default(),
            validator_config: ValidatorConfig::default(),
            resources: Vec::new(),
            findings: None,
        }
    }

    /// Use a fixture file relative to `fixtures/`.
    pub fn fixture(mut self, path: impl Into<String>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    /// Use an inline JSON fixture.
    pub fn fixture_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Index configuration for both derivation and validation.
    pub fn index_config(mut self, config: IndexConfig) -> Self {
        self.validator_config.index = config.clone();
        self.index_config = config;
        self
    }

    /// Validator configuration; its index configuration is replaced by the
    /// scenario's.
    pub fn validator_config(mut self, config: ValidatorConfig) -> Self {
        self.validator_config = config.with_index(self.index_config.clone());
        self
    }

    /// Add expectations for a resource.
    pub fn resource<F>(mut self, id: &str, f: F) -> Self
    where
        F: FnOnce(ResourceAssertion) -> ResourceAssertion,
    {
        self.resources
            .push((id.to_string(), f(ResourceAssertion::new())));
        self
    }

    /// Add expectations for the validation findings of the whole model.
    pub fn findings<F>(mut self, f: F) -> Self
    where
        F: FnOnce(FindingsAssertion) -> FindingsAssertion,
    {
        self.findings = Some(f(FindingsAssertion::new()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_index_config(&self) -> &IndexConfig {
        &self.index_config
    }

    pub fn get_validator_config(&self) -> &ValidatorConfig {
        &self.validator_config
    }

    pub fn resources(&self) -> &[(String, ResourceAssertion)] {
        &self.resources
    }

    pub fn findings_assertion(&self) -> Option<&FindingsAssertion> {
        self.findings.as_ref()
    }

    /// Load the scenario's model.
    pub fn load_model(&self) -> FixtureResult<Model> {
        if let Some(source) = &self.source {
            let document = ModelDocument::parse(source).map_err(|source| FixtureError::Parse {
                path: "<inline>".into(),
                source,
            })?;
            return Ok(document.into_model()?);
        }
        match &self.fixture {
            Some(path) => load_fixture(path),
            None => Err(FixtureError::MissingFixture),
        }
    }

    /// Run the scenario.
    pub fn run(&self) -> FixtureResult<()> {
        Runner::new(self)?.run()
    }
}
