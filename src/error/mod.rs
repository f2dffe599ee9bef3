mod build;
mod data;

pub use build::BuildError;
pub use data::DataError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Data(#[from] DataError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Follows the `source` chain to the innermost error.
///
/// Invocation wrappers added around marker failures are stripped here so
/// that reported skip reasons carry the original failure text.
pub fn root_cause<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a (dyn std::error::Error + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_cause_unwraps_invocation_chain() {
        let inner = BuildError::TypeArgumentMismatch {
            type_name: "Repo".to_string(),
            declared: 2,
            bound: 1,
        };
        let inner_text = inner.to_string();
        let wrapped = BuildError::MarkerInvocation {
            type_name: "Repo".to_string(),
            source: Box::new(inner.into()),
        };

        let root = root_cause(&wrapped);
        assert_eq!(root.to_string(), inner_text);
    }

    #[test]
    fn root_cause_of_leaf_error_is_itself() {
        let err = DataError::ZeroStep;
        assert_eq!(root_cause(&err).to_string(), err.to_string());
    }
}
