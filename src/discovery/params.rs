use crate::error::DataError;
use crate::metadata::{ArgValue, ParameterInfo, ProvidesData, TypeInfo};

/// Supplies candidate argument values for a single formal parameter,
/// driven by the data-source markers attached to it.
#[derive(Debug, Default)]
pub struct ParameterDataProvider;

impl ParameterDataProvider {
    pub fn new() -> Self {
        Self
    }

    /// Whether any data is available for the parameter.
    pub fn has_data_for(&self, _fixture: &TypeInfo, parameter: &ParameterInfo) -> bool {
        !parameter.sources().is_empty()
    }

    /// Materializes every source's values, in source declaration order,
    /// into one ordered list.
    ///
    /// The result is eager rather than a lazy stream: combinatorial
    /// expansion over several parameters measures lengths and iterates
    /// repeatedly, and must not re-invoke the sources while doing so.
    pub fn get_data_for(
        &self,
        fixture: &TypeInfo,
        parameter: &ParameterInfo,
    ) -> Result<Vec<ArgValue>, DataError> {
        let mut data = Vec::new();
        for source in parameter.sources() {
            data.extend(source.data_for(fixture, parameter)?);
        }
        Ok(data)
    }
}
