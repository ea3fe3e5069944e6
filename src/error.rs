//! Errors raised when fitting or scoring with the Zero++ model.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZeroError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZeroError {
    #[error("input is not a rectangular numeric array: {0}")]
    InvalidInputType(String),
    #[error("model must be fitted before scoring")]
    NotFitted,
    #[error("expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("value at row {row}, column {col} is not binary")]
    DomainViolation { row: usize, col: usize },
    #[error("at least 2 features are required, found {0}")]
    DegenerateDimension(usize),
    #[error("not enough samples")]
    NotEnoughSamples,
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("linfa error: {0}")]
    Linfa(String),
}

impl From<linfa::error::Error> for ZeroError {
    fn from(err: linfa::error::Error) -> Self {
        ZeroError::Linfa(err.to_string())
    }
}
