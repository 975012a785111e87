use thiserror::Error;

use crate::musicxml::{ParseError, TranspositionError, WriteError};

/// Failures inside a music notation engine, tagged with the failing stage
///
/// The display text is what clients see in a 500 response.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("XML parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Transposition failed: {0}")]
    Transpose(String),

    #[error("Key analysis failed: {0}")]
    Analysis(String),

    #[error("Serialization failed: {0}")]
    Serialize(String),

    #[error("Scratch file error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TranspositionError> for EngineError {
    fn from(error: TranspositionError) -> Self {
        EngineError::Transpose(error.to_string())
    }
}

impl From<WriteError> for EngineError {
    fn from(error: WriteError) -> Self {
        EngineError::Serialize(error.to_string())
    }
}
