use crate::metadata::{ArgValue, DataSource, MethodMarker};

/// A method declared directly on a type, with its markers and parameters.
#[derive(Debug, Clone)]
pub struct MethodInfo {
    name: String,
    markers: Vec<MethodMarker>,
    parameters: Vec<ParameterInfo>,
}

impl MethodInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: MethodMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterInfo) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markers(&self) -> &[MethodMarker] {
        &self.markers
    }

    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    pub fn implies_fixture(&self) -> bool {
        self.markers.iter().any(MethodMarker::implies_fixture)
    }

    /// Explicit test cases, in marker declaration order.
    pub fn cases(&self) -> impl Iterator<Item = &[ArgValue]> {
        self.markers.iter().filter_map(|marker| match marker {
            MethodMarker::Case(args) => Some(args.as_slice()),
            _ => None,
        })
    }

    pub fn is_setup(&self) -> bool {
        self.markers
            .iter()
            .any(|marker| matches!(marker, MethodMarker::Setup))
    }

    pub fn is_teardown(&self) -> bool {
        self.markers
            .iter()
            .any(|marker| matches!(marker, MethodMarker::Teardown))
    }

    pub fn ignore_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|marker| match marker {
            MethodMarker::Ignore { reason } => Some(reason.as_str()),
            _ => None,
        })
    }

    pub fn skip_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|marker| match marker {
            MethodMarker::Skip { reason } => Some(reason.as_str()),
            _ => None,
        })
    }
}

/// One formal parameter of a parameterized test method.
#[derive(Debug, Clone)]
pub struct ParameterInfo {
    name: String,
    sources: Vec<DataSource>,
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: DataSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }
}
