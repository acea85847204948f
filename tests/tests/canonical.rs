//! Foo, Bar and Baz: the canonical derivation fixture.

use resdex_tests::prelude::*;

use resdex_tests::prelude::Mutability::{Create, Read, Write};

mod foo {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("foo")
            .fixture("test-service.json")
            .resource("example#FooResource", |r| {
                r.name("FooResource")
                    .primary(&["fooId"])
                    .additional(&[])
                    .property("fooId", &[Read])
                    .property("fooValidCreateProperty", &[Create])
                    .explicit("fooValidCreateProperty")
                    .property("fooValidCreateReadProperty", &[Create, Read])
                    .derived("fooValidCreateReadProperty")
                    .fully_mutable("fooValidFullyMutableProperty")
                    .target("fooValidFullyMutableProperty", "example#ComplexProperty")
                    .property("fooValidReadProperty", &[Read])
                    .property("fooValidWriteProperty", &[Write])
                    .create_only(&["fooValidCreateProperty", "fooValidCreateReadProperty"])
                    .read_only(&["fooId", "fooValidReadProperty"])
                    .write_only(&["fooValidWriteProperty", "fooValidCreateProperty"])
                    .excluded(&[])
                    .findings(0)
            })
    }

    #[test]
    fn test_create_read_update_resource() {
        scenario().run().unwrap();
    }
}

mod bar {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("bar")
            .fixture("test-service.json")
            .resource("example#BarResource", |r| {
                r.name("Bar")
                    .primary(&["barId"])
                    .additional(&[&["arn"]])
                    .properties(&[
                        "arn",
                        "barExplicitMutableProperty",
                        "barId",
                        "barImplicitFullProperty",
                        "barImplicitReadProperty",
                        "barValidAdditionalProperty",
                    ])
                    .property("barId", &[Create, Read])
                    .property("arn", &[Read])
                    .fully_mutable("barExplicitMutableProperty")
                    .explicit("barExplicitMutableProperty")
                    .property("barValidAdditionalProperty", &[])
                    .property("barImplicitReadProperty", &[Read])
                    .fully_mutable("barImplicitFullProperty")
                    .absent("barValidExcludedProperty")
                    .excluded(&["example#ExtraBarRequest$barValidExcludedProperty"])
                    .create_only(&["barId"])
                    .read_only(&["arn", "barImplicitReadProperty"])
                    .write_only(&[])
            })
    }

    #[test]
    fn test_put_resource_with_additional_schema() {
        scenario().run().unwrap();
    }
}

mod baz {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("baz")
            .fixture("test-service.json")
            .resource("example#BazResource", |r| {
                r.name("Basil")
                    .primary(&["barId", "bazId"])
                    .additional(&[])
                    .property("barId", &[Read])
                    .provenance("barId", Provenance::Identifier)
                    .property("bazId", &[Read])
                    .fully_mutable("bazImplicitFullyMutableProperty")
                    .property("bazImplicitCreateProperty", &[Create, Read])
                    .property("bazImplicitReadProperty", &[Read])
                    .property("bazImplicitWriteProperty", &[Create, Write])
                    .create_only(&["bazImplicitCreateProperty"])
                    .read_only(&["barId", "bazId", "bazImplicitReadProperty"])
                    .write_only(&["bazImplicitWriteProperty"])
            })
    }

    #[test]
    fn test_two_identifiers_without_put() {
        scenario().run().unwrap();
    }
}

mod whole_service {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("whole_service")
            .fixture("test-service.json")
            .findings(|f| f.none())
    }

    #[test]
    fn test_service_validates_cleanly() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_unannotated_resource_skipped() {
        let model = load_fixture("test-service.json").unwrap();

        let index = ResourceIndex::build(&model).unwrap();

        assert_eq!(index.len(), 3);
        let moo = ShapeId::parse("example#MooResource").unwrap();
        assert!(index.schema(&moo).is_none());
        assert!(index.properties(&moo).is_empty());
    }

    #[test]
    fn test_unannotated_resource_on_request() {
        Scenario::new("all_resources")
            .fixture("test-service.json")
            .index_config(IndexConfig::all_resources())
            .resource("example#MooResource", |r| {
                r.name("MooResource").property("mooId", &[Create, Read])
            })
            .run()
            .unwrap();
    }
}
