//! Fixture discovery and suite composition.
//!
//! The facade (`SuiteBuilder`) sequences the parts: the resolver finds the
//! declaration level whose markers decide the build, the composer expands
//! one or many markers into a node or a composite suite, and the fixture
//! builder constructs ordinary fixtures from test-marked methods.

pub mod fixture_builder;
pub mod params;
pub mod resolver;
pub mod suite_builder;

pub use fixture_builder::FixtureBuilder;
pub use params::ParameterDataProvider;
pub use resolver::MarkerResolver;
pub use suite_builder::SuiteBuilder;

use std::sync::Arc;

use crate::error::BuildError;
use crate::metadata::TypeInfo;
use crate::tree::TestNode;

/// The fixture-builder capability of a qualifying type marker.
///
/// Each qualifying marker attached to a type can produce one independent
/// node from it; the facade decides whether that happens directly or under
/// a composite suite.
pub trait BuildsFixture {
    fn build_from(&self, ty: &Arc<TypeInfo>) -> Result<TestNode, BuildError>;
}
