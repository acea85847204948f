//! Target conflicts and property name checks.

use resdex_tests::prelude::Mutability::{Create, Read};
use resdex_tests::prelude::*;

mod conflicts {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("target_conflicts")
            .fixture("conflicts.json")
            .findings(|f| {
                f.total(3)
                    .code(FindingCode::TargetConflict, 2)
                    .targets(
                        FindingCode::TargetConflict,
                        "retention",
                        &["prelude#Integer", "prelude#Long", "prelude#Timestamp"],
                    )
                    .targets(
                        FindingCode::TargetConflict,
                        "Policy",
                        &["example#PolicyDocument", "prelude#String"],
                    )
                    .message_contains(
                        FindingCode::TargetConflict,
                        "The `retention` property of the `MessageQueue` resource targets multiple shapes",
                    )
                    .severity(FindingCode::TargetConflict, Severity::Error)
                    .code(FindingCode::InvalidPropertyName, 1)
                    .on_property(FindingCode::InvalidPropertyName, "visibility_timeout")
            })
    }

    #[test]
    fn test_conflicts_reported_once_per_property() {
        scenario().run().unwrap();
    }
}

mod fused_map {
    use super::*;

    // Conflicts never change the fused map: the read output is seen first.
    pub fn scenario() -> Scenario {
        Scenario::new("conflicts_keep_first_target")
            .fixture("conflicts.json")
            .resource("example#Queue", |r| {
                r.name("MessageQueue")
                    .target("retention", "prelude#Integer")
                    .fully_mutable("retention")
                    .target("Policy", "example#PolicyDocument")
                    .property("Policy", &[Create, Read])
                    .fully_mutable("delay")
                    .property("visibility_timeout", &[Read])
                    .findings(0)
            })
    }

    #[test]
    fn test_first_target_kept() {
        scenario().run().unwrap();
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_name_check_disabled() {
        Scenario::new("names_disabled")
            .fixture("conflicts.json")
            .validator_config(ValidatorConfig::default().with_property_name_check(false))
            .findings(|f| f.total(2).code(FindingCode::InvalidPropertyName, 0))
            .run()
            .unwrap();
    }

    #[test]
    fn test_relaxed_name_pattern() {
        Scenario::new("names_relaxed")
            .fixture("conflicts.json")
            .validator_config(
                ValidatorConfig::default()
                    .with_property_name_pattern("^[A-Za-z0-9_]+$")
                    .with_conflict_severity(Severity::Warning),
            )
            .findings(|f| f.total(2).no_errors())
            .run()
            .unwrap();
    }

    #[test]
    fn test_findings_are_repeatable() {
        let model = load_fixture("conflicts.json").unwrap();
        let validator = Validator::new(ValidatorConfig::default()).unwrap();

        let first = validator.validate(&model).unwrap();
        let second = validator.validate(&model).unwrap();

        assert_eq!(first, second);
    }
}
