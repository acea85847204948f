//! Primary and additional identifiers.

use resdex_tests::prelude::Mutability::{Create, Read};
use resdex_tests::prelude::*;

mod put_resource {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("put_resource")
            .fixture("identifiers.json")
            .resource("example#Account", |r| {
                r.primary(&["accountId"])
                    .additional(&[&["accountArn"], &["AccountAlias"]])
                    .properties(&[
                        "AccountAlias",
                        "accountArn",
                        "accountId",
                        "createdAt",
                        "owner",
                        "plan",
                    ])
                    .property("accountId", &[Create, Read])
                    .property("accountArn", &[Read])
                    .property("AccountAlias", &[Read])
                    .fully_mutable("owner")
                    .property("plan", &[Create, Read])
                    .explicit("plan")
                    .absent("id")
                    .absent("resetToken")
                    .create_only(&["accountId", "plan"])
                    .read_only(&["AccountAlias", "accountArn", "createdAt"])
                    .write_only(&[])
                    .findings(1)
            })
    }

    #[test]
    fn test_put_identifiers_and_additional_identifiers() {
        scenario().run().unwrap();
    }
}

mod create_resource {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("create_resource")
            .fixture("identifiers.json")
            .resource("example#Session", |r| {
                r.primary(&["sessionId"])
                    .property("sessionId", &[Read])
                    .provenance("sessionId", Provenance::Identifier)
                    .property("ttl", &[Create, Read])
                    .create_only(&["ttl"])
                    .read_only(&["sessionId"])
            })
    }

    // The create input carries `sessionId` unbound; the identifier still
    // keeps the mutability it was seeded with.
    #[test]
    fn test_identifier_untouched_by_create_input() {
        scenario().run().unwrap();
    }
}

mod rejected {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("write_only_additional_identifier")
            .fixture("identifiers.json")
            .findings(|f| {
                f.total(1)
                    .on_property(FindingCode::AdditionalIdentifierWriteOnly, "resetToken")
                    .severity(FindingCode::AdditionalIdentifierWriteOnly, Severity::Error)
            })
    }

    #[test]
    fn test_write_only_additional_identifier_rejected() {
        scenario().run().unwrap();
    }
}
