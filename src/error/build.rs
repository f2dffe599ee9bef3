use thiserror::Error;

use super::DataError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("fixture marker on `{type_name}` could not produce a node")]
    MarkerInvocation {
        type_name: String,
        #[source]
        source: Box<super::Error>,
    },

    #[error("`{type_name}` declares {declared} type parameter(s) but the marker supplies {bound}")]
    TypeArgumentMismatch {
        type_name: String,
        declared: usize,
        bound: usize,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}
