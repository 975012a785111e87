//! Error types for MusicXML handling
//!
//! Reading failures are fatal (`ParseError`); writing and transposition have
//! their own small enums so callers can tell which stage failed.

use thiserror::Error;

/// Fatal XML parsing errors
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// XML is malformed (not well-formed)
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// MusicXML format not supported (e.g., an opus or a non-score root)
    #[error("Unsupported MusicXML format: {0}")]
    UnsupportedFormat(String),

    /// Required structural element is missing
    #[error("Missing required element: {0}")]
    MissingRequiredElement(String),

    /// Element content that cannot be interpreted
    #[error("Invalid value '{value}' in <{element}>")]
    InvalidValue { element: String, value: String },
}

/// Serialization failures
#[derive(Debug, Clone, Error)]
pub enum WriteError {
    #[error("XML write error: {0}")]
    Xml(String),

    #[error("Serialized document is not valid UTF-8: {0}")]
    Encoding(String),
}

/// Failures while moving pitches or key signatures
#[derive(Debug, Clone, Error)]
pub enum TranspositionError {
    #[error("{0}")]
    Pitch(#[from] ParseError),

    /// MusicXML octaves run from 0 to 9
    #[error("Transposed pitch {pitch} is outside the MusicXML octave range 0-9")]
    OctaveOutOfRange { pitch: String },

    #[error("Interval of {semitones} semitones is wider than the MusicXML pitch range")]
    IntervalOutOfRange { semitones: i32 },
}
