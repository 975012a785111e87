//! TransposeX
//!
//! HTTP service that transposes MusicXML scores by a number of semitones,
//! estimates the key they end up in, and retitles them accordingly
//! ("Song" moved down a minor third becomes "Song in A Major").

pub mod analysis;
pub mod config;
pub mod engine;
pub mod http;
pub mod models;
pub mod musicxml;
pub mod service;
pub mod transposition;

// Re-export commonly used types
pub use analysis::KeyEstimate;
pub use config::AppConfig;
pub use engine::{EngineError, MusicNotationEngine, MusicXmlEngine};
pub use models::{Mode, Pitch, Step, Tonic};
pub use service::{TransposeError, TransposeRequest, TransposeResponse, TransposeService};
