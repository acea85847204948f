//! Validator configuration.

use resdex_core::Severity;
use resdex_index::IndexConfig;

/// Default pattern for derived property names: alphanumeric only.
pub const DEFAULT_PROPERTY_NAME_PATTERN: &str = "^[A-Za-z0-9]+$";

/// Configuration for a [`crate::Validator`].
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Which resources are derived and validated.
    pub index: IndexConfig,
    /// Severity of target conflicts.
    pub conflict_severity: Severity,
    /// Whether derived property names are checked against the pattern.
    pub check_property_names: bool,
    /// Pattern every visible property name must match.
    pub property_name_pattern: String,
    /// Severity of property name mismatches.
    pub property_name_severity: Severity,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            index: IndexConfig::default(),
            conflict_severity: Severity::Error,
            check_property_names: true,
            property_name_pattern: DEFAULT_PROPERTY_NAME_PATTERN.to_string(),
            property_name_severity: Severity::Warning,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    pub fn with_conflict_severity(mut self, severity: Severity) -> Self {
        self.conflict_severity = severity;
        self
    }

    pub fn with_property_name_check(mut self, enabled: bool) -> Self {
        self.check_property_names = enabled;
        self
    }

    pub fn with_property_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.property_name_pattern = pattern.into();
        self
    }

    pub fn with_property_name_severity(mut self, severity: Severity) -> Self {
        self.property_name_severity = severity;
        self
    }
}
