//! Music notation engine seam
//!
//! The request pipeline only talks to [`MusicNotationEngine`]; the bundled
//! implementation is [`MusicXmlEngine`].

pub mod errors;
pub mod musicxml;

pub use errors::EngineError;
pub use musicxml::MusicXmlEngine;

use std::path::Path;

use crate::analysis::KeyEstimate;

/// Parse, transpose, analyze and serialize scores
///
/// Implementations must be shareable across request threads; each call works
/// on its own score value.
pub trait MusicNotationEngine: Send + Sync + 'static {
    type Score: Send;

    fn parse(&self, text: &str) -> Result<Self::Score, EngineError>;

    fn parse_file(&self, path: &Path) -> Result<Self::Score, EngineError> {
        let text = std::fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Move every pitch by `semitones` (positive is up)
    fn transpose(&self, score: &Self::Score, semitones: i32) -> Result<Self::Score, EngineError>;

    fn analyze_key(&self, score: &Self::Score) -> Result<KeyEstimate, EngineError>;

    /// Title of the work, `None` when absent or blank
    fn read_title(&self, score: &Self::Score) -> Option<String>;

    /// Replace all score metadata with the given title and composer
    fn write_metadata(&self, score: Self::Score, title: &str, composer: &str) -> Self::Score;

    fn serialize(&self, score: &Self::Score) -> Result<String, EngineError>;

    fn write_file(&self, score: &Self::Score, path: &Path) -> Result<(), EngineError> {
        let text = self.serialize(score)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
