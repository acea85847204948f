//! resdex integration test framework.
//!
//! Loads JSON model fixtures and checks derived resources and validation
//! findings against declarative expectations.
//!
//! ```ignore
//! Scenario::new("foo")
//!     .fixture("test-service.json")
//!     .resource("example#FooResource", |r| {
//!         r.property("fooId", &[Mutability::Read]).read_only(&["fooId"])
//!     })
//!     .run()
//!     .unwrap();
//! ```

pub mod loader;
pub mod scenario;

pub use assertion::{FindingsAssertion, ResourceAssertion};
pub use error::{FixtureError, FixtureResult};
pub use loader::{fixture_path, load_fixture, ModelDocument};
pub use runner::Runner;
pub use scenario::Scenario;

/// Everything a scenario file needs.
pub mod prelude {
    pub use crate::assertion::{FindingsAssertion, ResourceAssertion};
    pub use crate::error::{FixtureError, FixtureResult};
    pub use crate::loader::{fixture_path, load_fixture, ModelDocument};
    pub use crate::scenario::Scenario;
    pub use resdex_core::{FindingCode, Mutability, MutabilitySet, Severity, ShapeId};
    pub use resdex_index::{IndexConfig, IndexError, Provenance, ResourceIndex};
    pub use resdex_validate::{Validator, ValidatorConfig};
}
