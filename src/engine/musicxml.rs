use crate::analysis::{self, KeyEstimate};
use crate::musicxml::Score;

use super::{EngineError, MusicNotationEngine};

/// Engine over uncompressed MusicXML
#[derive(Debug, Clone, Copy, Default)]
pub struct MusicXmlEngine;

impl MusicXmlEngine {
    pub fn new() -> Self {
        Self
    }
}

impl MusicNotationEngine for MusicXmlEngine {
    type Score = Score;

    fn parse(&self, text: &str) -> Result<Score, EngineError> {
        Ok(Score::parse(text)?)
    }

    fn transpose(&self, score: &Score, semitones: i32) -> Result<Score, EngineError> {
        Ok(score.transposed(semitones)?)
    }

    fn analyze_key(&self, score: &Score) -> Result<KeyEstimate, EngineError> {
        analysis::estimate_key(score).map_err(|e| EngineError::Analysis(e.to_string()))
    }

    fn read_title(&self, score: &Score) -> Option<String> {
        score.title()
    }

    fn write_metadata(&self, score: Score, title: &str, composer: &str) -> Score {
        score.with_metadata(title, composer)
    }

    fn serialize(&self, score: &Score) -> Result<String, EngineError> {
        Ok(score.to_xml()?)
    }
}
