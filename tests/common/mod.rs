use std::sync::Arc;

use fixture_discovery_core::metadata::{FixtureMarker, MethodInfo, MethodMarker, TypeInfo};
use fixture_discovery_core::TestNode;

pub fn plain_fixture(name: &str, tests: &[&str]) -> Arc<TypeInfo> {
    let mut builder = TypeInfo::builder(name);
    for test in tests {
        builder = builder.method(MethodInfo::new(*test).with_marker(MethodMarker::Test));
    }
    builder.build()
}

pub fn marked_fixture(name: &str, marker: FixtureMarker, tests: &[&str]) -> Arc<TypeInfo> {
    let mut builder = TypeInfo::builder(name).fixture_marker(marker);
    for test in tests {
        builder = builder.method(MethodInfo::new(*test).with_marker(MethodMarker::Test));
    }
    builder.build()
}

pub fn child_names(node: &TestNode) -> Vec<String> {
    node.children()
        .iter()
        .map(|child| child.name().to_string())
        .collect()
}
