use std::path::PathBuf;

use thiserror::Error;

use crate::values::ValueType;

/// Broad classification of a [`HelperError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input does not have the expected primitive type.
    Type,
    /// Input has the right type but an unusable value.
    Value,
    /// A referenced filesystem path does not exist.
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HelperError {
    #[error("The given value {0} is not a string")]
    NotAString(String),

    #[error("Index {index} in the given array contains a non-{expected} type")]
    MixedTypes { index: usize, expected: ValueType },

    #[error("Unknown type tag: {0}")]
    UnknownTypeTag(String),

    #[error("Given number {0} is not a valid number type")]
    NotANumberType(String),

    #[error("Cannot convert {0} to a string")]
    NoStringRepresentation(String),

    #[error("{0} is not a valid number. The value must be a finite, non-NaN number")]
    InvalidNumber(String),

    #[error("Record at index {index} has no value at the requested property")]
    MissingValue { index: usize },

    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,

    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
}

impl HelperError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HelperError::NotAString(_)
            | HelperError::MixedTypes { .. }
            | HelperError::UnknownTypeTag(_)
            | HelperError::NotANumberType(_)
            | HelperError::NoStringRepresentation(_) => ErrorKind::Type,
            HelperError::InvalidNumber(_)
            | HelperError::MissingValue { .. }
            | HelperError::InvalidChunkSize => ErrorKind::Value,
            HelperError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
