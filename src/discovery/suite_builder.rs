use std::sync::Arc;

use tracing::{debug, warn};

use crate::discovery::{BuildsFixture, FixtureBuilder, MarkerResolver};
use crate::error::{root_cause, BuildError};
use crate::metadata::{DeclarationRegistry, FixtureMarker, TypeInfo};
use crate::tree::TestNode;

/// First line of every converted build failure, read verbatim by reporters.
const LOAD_FAILURE_PREFIX: &str = "An exception was thrown while loading the test.";

/// The public entry point of discovery.
///
/// `can_build_from` filters candidate types; `build_from` materializes the
/// ones that qualify. `build_from` never fails: any error raised while
/// composing a fixture is converted into an inert NotRunnable node at this
/// boundary, so one malformed fixture cannot abort the discovery of its
/// siblings.
///
/// The builder holds no mutable state, so one instance may serve
/// concurrent discovery calls for different types.
#[derive(Debug, Default)]
pub struct SuiteBuilder {
    resolver: MarkerResolver,
    fixture_builder: FixtureBuilder,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixture_builder(fixture_builder: FixtureBuilder) -> Self {
        Self {
            resolver: MarkerResolver::new(),
            fixture_builder,
        }
    }

    /// Whether the type can be built as a fixture. Rules are evaluated in
    /// a fixed order; the first match wins.
    pub fn can_build_from(&self, ty: &TypeInfo) -> bool {
        // Abstract non-sealed types can never be direct fixtures.
        if ty.is_abstract() && !ty.is_sealed() {
            return false;
        }

        // A marker at the type's own declaration qualifies it outright,
        // generic or not.
        if ty.has_fixture_markers() {
            return true;
        }

        // An open generic definition without markers has nothing to bind
        // its parameters with.
        if ty.is_generic_definition() {
            return false;
        }

        self.resolver.implies_fixture(ty)
    }

    /// Builds the test tree for a type. Never raises: build failures come
    /// back as a NotRunnable fixture node whose skip-reason property holds
    /// the formatted cause.
    pub fn build_from(&self, ty: &Arc<TypeInfo>) -> TestNode {
        match self.try_build(ty) {
            Ok(node) => node,
            Err(err) => {
                warn!(
                    fixture = ty.name(),
                    error = %err,
                    "fixture build failed, converting to a NotRunnable node"
                );
                let cause = root_cause(&err);
                let mut fixture = TestNode::fixture(ty.name());
                fixture.mark_not_runnable(format!("{LOAD_FAILURE_PREFIX}\n{cause}"));
                fixture
            }
        }
    }

    /// Builds every qualifying registered type under one root suite, in
    /// registration order.
    pub fn scan(&self, registry: &DeclarationRegistry, name: impl Into<String>) -> TestNode {
        let mut root = TestNode::suite(name);
        for ty in registry.types() {
            if !self.can_build_from(ty) {
                debug!(candidate = ty.name(), "excluded from discovery");
                continue;
            }
            root.add_child(self.build_from(ty));
        }
        root
    }

    fn try_build(&self, ty: &Arc<TypeInfo>) -> Result<TestNode, BuildError> {
        let markers = self.resolver.resolve(ty);

        // Generic definitions never get a direct single-node build:
        // binding is marker-driven and always goes through the composite
        // path, whatever the marker count.
        if ty.is_generic_definition() {
            return self.build_parameterized_suite(ty, &markers);
        }

        match markers.as_slice() {
            [] => self.fixture_builder.build(ty),
            [only] => only.build_from(ty),
            _ => self.build_parameterized_suite(ty, &markers),
        }
    }

    /// One child per marker, in marker declaration order, wrapped in a
    /// suite tagged as parameterized so that reporters know the children
    /// are alternative instantiations of the same declaration.
    fn build_parameterized_suite(
        &self,
        ty: &Arc<TypeInfo>,
        markers: &[&FixtureMarker],
    ) -> Result<TestNode, BuildError> {
        let mut suite = TestNode::parameterized_fixture(ty.name());
        for marker in markers {
            suite.add_child(marker.build_from(ty)?);
        }
        Ok(suite)
    }
}
