use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("range data source has a zero step")]
    ZeroStep,

    #[error("range from {from} to {to} cannot be reached with step {step}")]
    UnreachableRange { from: i64, to: i64, step: i64 },
}
