//! Declarative markers attached to types, methods and parameters.
//!
//! Markers are inspected at discovery time only. Type-level fixture markers
//! carry the build capability; method markers classify the methods of a
//! fixture; parameter markers supply candidate argument values.

use crate::error::DataError;
use crate::metadata::{ArgValue, ParameterInfo, TypeInfo};

/// A marker declared directly on a type.
#[derive(Debug, Clone)]
pub enum TypeMarker {
    /// Designates the type as a fixture and knows how to build it.
    Fixture(FixtureMarker),
    /// Keeps the fixture in the tree but excludes it from execution.
    Ignore { reason: String },
}

impl TypeMarker {
    pub fn as_fixture(&self) -> Option<&FixtureMarker> {
        match self {
            TypeMarker::Fixture(marker) => Some(marker),
            _ => None,
        }
    }
}

/// A qualifying fixture-builder marker.
///
/// Zero, one or many may be attached to a single type; each one produces an
/// independent fixture instantiation. Constructor arguments distinguish the
/// instantiations, and type arguments bind generic definitions.
#[derive(Debug, Clone, Default)]
pub struct FixtureMarker {
    arguments: Vec<ArgValue>,
    type_args: Vec<String>,
    description: Option<String>,
}

impl FixtureMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arguments<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ArgValue>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_type_args<I>(mut self, type_args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.type_args = type_args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn arguments(&self) -> &[ArgValue] {
        &self.arguments
    }

    pub fn type_args(&self) -> &[String] {
        &self.type_args
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A marker declared on a method.
#[derive(Debug, Clone)]
pub enum MethodMarker {
    /// Marks the method as a single test.
    Test,
    /// Marks the method as one test case with explicit arguments.
    Case(Vec<ArgValue>),
    /// Runs before each test of the fixture. Produces no node.
    Setup,
    /// Runs after each test of the fixture. Produces no node.
    Teardown,
    Ignore { reason: String },
    Skip { reason: String },
}

impl MethodMarker {
    /// Whether this marker alone promotes the declaring type to fixture
    /// status, even without an explicit fixture marker.
    pub fn implies_fixture(&self) -> bool {
        matches!(self, MethodMarker::Test | MethodMarker::Case(_))
    }
}

/// A data-source marker attached to one formal parameter.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// An explicit, ordered list of candidate values.
    Values(Vec<ArgValue>),
    /// An inclusive arithmetic progression of integers.
    Range { from: i64, to: i64, step: i64 },
}

/// The data-production capability of a parameter marker.
///
/// Takes the owning fixture type and the parameter, and yields a finite
/// ordered sequence of candidate values. Sources are not restartable at
/// call time; callers materialize the result.
pub trait ProvidesData {
    fn data_for(
        &self,
        fixture: &TypeInfo,
        parameter: &ParameterInfo,
    ) -> Result<Vec<ArgValue>, DataError>;
}

impl ProvidesData for DataSource {
    fn data_for(
        &self,
        _fixture: &TypeInfo,
        _parameter: &ParameterInfo,
    ) -> Result<Vec<ArgValue>, DataError> {
        match self {
            DataSource::Values(items) => Ok(items.clone()),
            DataSource::Range { from, to, step } => expand_range(*from, *to, *step),
        }
    }
}

fn expand_range(from: i64, to: i64, step: i64) -> Result<Vec<ArgValue>, DataError> {
    if step == 0 {
        return Err(DataError::ZeroStep);
    }
    if (to > from && step < 0) || (to < from && step > 0) {
        return Err(DataError::UnreachableRange { from, to, step });
    }

    let mut values = Vec::new();
    let mut current = from;
    while (step > 0 && current <= to) || (step < 0 && current >= to) {
        values.push(ArgValue::Int(current));
        current = match current.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(values)
}
