//! resdex Validate
//!
//! Diagnostic passes over derived resources. Nothing here alters a derived
//! schema; every problem becomes a finding.

mod config;
mod conflict;
mod error;
mod naming;
mod validator;

pub use config::{ValidatorConfig, DEFAULT_PROPERTY_NAME_PATTERN};
pub use conflict::{property_targets, ConflictChecker};
pub use error::{ValidateError, ValidateResult};
pub use naming::PropertyNameChecker;
pub use validator::Validator;
