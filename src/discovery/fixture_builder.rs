//! Fixture construction from a type's test-marked methods.
//!
//! Both build paths of the facade converge here: the zero-marker fallback
//! calls [`FixtureBuilder::build`], and each fixture marker's own build
//! capability calls [`FixtureBuilder::build_with`] with itself.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::trace;

use crate::discovery::{BuildsFixture, ParameterDataProvider};
use crate::error::{BuildError, Error};
use crate::metadata::value::format_arguments;
use crate::metadata::{ArgValue, FixtureMarker, MethodInfo, TypeInfo};
use crate::tree::{keys, RunState, TestNode};

#[derive(Debug, Default)]
pub struct FixtureBuilder {
    data_provider: ParameterDataProvider,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback construction of an ordinary fixture without markers.
    pub fn build(&self, ty: &Arc<TypeInfo>) -> Result<TestNode, BuildError> {
        self.build_with(ty, None)
    }

    pub fn build_with(
        &self,
        ty: &Arc<TypeInfo>,
        marker: Option<&FixtureMarker>,
    ) -> Result<TestNode, BuildError> {
        let mut fixture = match marker {
            Some(marker) => self.start_marked_fixture(ty, marker)?,
            None => TestNode::fixture(ty.name()),
        };

        // An unbindable generic shell carries its reason and nothing else.
        if fixture.run_state() == RunState::NotRunnable {
            return Ok(fixture);
        }

        if let Some(reason) = ty.ignore_reason() {
            fixture.mark_ignored(reason);
        }

        for method in collect_methods(ty) {
            if !method.implies_fixture() {
                continue;
            }
            fixture.add_child(self.build_test_method(ty, method)?);
        }

        trace!(
            fixture = fixture.name(),
            tests = fixture.test_count(),
            "composed fixture"
        );
        Ok(fixture)
    }

    /// Opens the fixture node for a marker-driven build: binds generic
    /// parameters, renders constructor arguments into the name, and
    /// records the marker's description.
    fn start_marked_fixture(
        &self,
        ty: &TypeInfo,
        marker: &FixtureMarker,
    ) -> Result<TestNode, BuildError> {
        let mut name = ty.name().to_string();

        if ty.is_generic_definition() {
            if marker.type_args().is_empty() {
                let mut fixture = TestNode::fixture(name);
                fixture.mark_not_runnable(format!(
                    "Fixture `{}` has generic parameters but no type arguments were supplied to bind them.",
                    ty.name()
                ));
                return Ok(fixture);
            }
            if marker.type_args().len() != ty.type_params().len() {
                return Err(BuildError::TypeArgumentMismatch {
                    type_name: ty.name().to_string(),
                    declared: ty.type_params().len(),
                    bound: marker.type_args().len(),
                });
            }
            name = format!("{}<{}>", ty.name(), marker.type_args().join(", "));
        }

        if !marker.arguments().is_empty() {
            name = format!("{}({})", name, format_arguments(marker.arguments()));
        }

        let mut fixture = TestNode::fixture(name);
        if let Some(description) = marker.description() {
            fixture.properties_mut().insert(keys::DESCRIPTION, description);
        }
        Ok(fixture)
    }

    fn build_test_method(
        &self,
        ty: &TypeInfo,
        method: &MethodInfo,
    ) -> Result<TestNode, BuildError> {
        let cases: Vec<&[ArgValue]> = method.cases().collect();
        if !cases.is_empty() {
            return Ok(self.build_case_suite(method, &cases));
        }
        if !method.parameters().is_empty() {
            return self.build_combinatorial_suite(ty, method);
        }

        let mut test = TestNode::test(method.name());
        apply_exclusions(method, &mut test);
        Ok(test)
    }

    /// One child per explicit case, in marker declaration order.
    fn build_case_suite(&self, method: &MethodInfo, cases: &[&[ArgValue]]) -> TestNode {
        let mut suite = TestNode::parameterized_method(method.name());
        for args in cases {
            let mut test =
                TestNode::test(format!("{}({})", method.name(), format_arguments(args)));
            if args.len() != method.parameters().len() {
                test.mark_not_runnable(format!(
                    "Case supplies {} argument(s) but `{}` declares {} parameter(s).",
                    args.len(),
                    method.name(),
                    method.parameters().len()
                ));
            } else {
                apply_exclusions(method, &mut test);
            }
            suite.add_child(test);
        }
        suite
    }

    /// Cartesian expansion over the materialized per-parameter value
    /// lists, rightmost parameter varying fastest.
    fn build_combinatorial_suite(
        &self,
        ty: &TypeInfo,
        method: &MethodInfo,
    ) -> Result<TestNode, BuildError> {
        for parameter in method.parameters() {
            if !self.data_provider.has_data_for(ty, parameter) {
                let mut test = TestNode::test(method.name());
                test.mark_not_runnable(format!(
                    "No data is supplied for parameter `{}` of `{}`.",
                    parameter.name(),
                    method.name()
                ));
                return Ok(test);
            }
        }

        let mut columns = Vec::with_capacity(method.parameters().len());
        for parameter in method.parameters() {
            columns.push(self.data_provider.get_data_for(ty, parameter)?);
        }

        let mut suite = TestNode::parameterized_method(method.name());
        for combination in cartesian(&columns) {
            let mut test =
                TestNode::test(format!("{}({})", method.name(), format_arguments(&combination)));
            apply_exclusions(method, &mut test);
            suite.add_child(test);
        }
        Ok(suite)
    }
}

impl BuildsFixture for FixtureMarker {
    fn build_from(&self, ty: &Arc<TypeInfo>) -> Result<TestNode, BuildError> {
        FixtureBuilder::new()
            .build_with(ty, Some(self))
            .map_err(|source| BuildError::MarkerInvocation {
                type_name: ty.name().to_string(),
                source: Box::new(Error::from(source)),
            })
    }
}

/// Methods of the whole hierarchy, nearest level first. A nearer
/// declaration of a name shadows any farther one.
fn collect_methods(ty: &TypeInfo) -> Vec<&MethodInfo> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut methods = Vec::new();
    for level in ty.hierarchy() {
        for method in level.methods() {
            if seen.insert(method.name()) {
                methods.push(method);
            }
        }
    }
    methods
}

fn apply_exclusions(method: &MethodInfo, test: &mut TestNode) {
    if let Some(reason) = method.ignore_reason() {
        test.mark_ignored(reason);
    } else if let Some(reason) = method.skip_reason() {
        test.mark_skipped(reason);
    }
}

fn cartesian(columns: &[Vec<ArgValue>]) -> Vec<Vec<ArgValue>> {
    if columns.is_empty() || columns.iter().any(Vec::is_empty) {
        return Vec::new();
    }

    let mut combinations = Vec::new();
    let mut indices = vec![0usize; columns.len()];
    loop {
        combinations.push(
            indices
                .iter()
                .zip(columns)
                .map(|(&i, column)| column[i].clone())
                .collect(),
        );

        let mut position = columns.len();
        loop {
            if position == 0 {
                return combinations;
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < columns[position].len() {
                break;
            }
            indices[position] = 0;
        }
    }
}
