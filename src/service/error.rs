use thiserror::Error;

use crate::engine::EngineError;

/// Client-facing error categories; each maps to one HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    InvalidInterval,
    EngineFailure,
}

#[derive(Debug, Error)]
pub enum TransposeError {
    #[error("Missing xml or interval")]
    MissingField,

    #[error("Interval must be an integer")]
    InvalidInterval,

    /// Any failure after validation, message passed through verbatim
    #[error("{0}")]
    Engine(#[from] EngineError),
}

impl TransposeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransposeError::MissingField => ErrorKind::MissingField,
            TransposeError::InvalidInterval => ErrorKind::InvalidInterval,
            TransposeError::Engine(_) => ErrorKind::EngineFailure,
        }
    }
}

impl From<std::io::Error> for TransposeError {
    fn from(error: std::io::Error) -> Self {
        TransposeError::Engine(EngineError::Io(error))
    }
}
