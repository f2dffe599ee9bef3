//! Hierarchy-level marker resolution observed through the facade.

mod common;

use common::child_names;
use fixture_discovery_core::metadata::{FixtureMarker, MethodInfo, MethodMarker, TypeInfo};
use fixture_discovery_core::tree::keys;
use fixture_discovery_core::{ArgValue, NodeKind, SuiteBuilder};
use pretty_assertions::assert_eq;

#[test]
fn topmost_ancestor_marker_is_used_when_nearer_levels_are_bare() {
    let top = TypeInfo::builder("ContractBase")
        .abstract_type()
        .fixture_marker(FixtureMarker::new().with_description("contract"))
        .method(MethodInfo::new("obeys_contract").with_marker(MethodMarker::Test))
        .build();
    let mid = TypeInfo::builder("HttpContract")
        .abstract_type()
        .inherits(&top)
        .build();
    let leaf = TypeInfo::builder("Http2Tests").inherits(&mid).build();

    let node = SuiteBuilder::new().build_from(&leaf);

    assert_eq!(node.kind(), NodeKind::Fixture);
    assert_eq!(node.name(), "Http2Tests");
    assert_eq!(
        node.properties().get(keys::DESCRIPTION),
        Some(&ArgValue::from("contract"))
    );
}

#[test]
fn derived_markers_shadow_ancestor_markers() {
    let base = TypeInfo::builder("Base")
        .fixture_marker(FixtureMarker::new().with_description("base"))
        .fixture_marker(FixtureMarker::new().with_description("base-too"))
        .build();
    let derived = TypeInfo::builder("Derived")
        .inherits(&base)
        .fixture_marker(FixtureMarker::new().with_description("derived"))
        .build();

    let node = SuiteBuilder::new().build_from(&derived);

    // One marker at the nearest level wins outright; the two base markers
    // are not merged in, so this is a direct build, not a composite.
    assert_eq!(node.kind(), NodeKind::Fixture);
    assert_eq!(
        node.properties().get(keys::DESCRIPTION),
        Some(&ArgValue::from("derived"))
    );
}

#[test]
fn inherited_test_methods_are_merged_not_shadowed() {
    let base = TypeInfo::builder("ContractBase")
        .abstract_type()
        .fixture_marker(FixtureMarker::new())
        .method(MethodInfo::new("handshake").with_marker(MethodMarker::Test))
        .build();
    let derived = TypeInfo::builder("V2Tests")
        .inherits(&base)
        .method(MethodInfo::new("negotiates").with_marker(MethodMarker::Test))
        .build();

    let node = SuiteBuilder::new().build_from(&derived);

    assert_eq!(child_names(&node), vec!["negotiates", "handshake"]);
}

#[test]
fn overridden_methods_are_built_once() {
    let base = TypeInfo::builder("Base")
        .fixture_marker(FixtureMarker::new())
        .method(MethodInfo::new("shared").with_marker(MethodMarker::Test))
        .build();
    let derived = TypeInfo::builder("Derived")
        .inherits(&base)
        .method(MethodInfo::new("shared").with_marker(MethodMarker::Test))
        .build();

    let node = SuiteBuilder::new().build_from(&derived);

    assert_eq!(child_names(&node), vec!["shared"]);
}
