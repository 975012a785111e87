//! Key analysis
//!
//! Estimates the key of a score from its notes: a duration-weighted
//! pitch-class histogram is matched against Krumhansl-Kessler templates.

pub mod detector;
pub mod templates;

pub use detector::detect_key;
pub use templates::{KeyTemplates, KRUMHANSL_KESSLER};

use std::fmt;

use crate::models::{Mode, Tonic};
use crate::musicxml::{ParseError, Score, SoundingNote};

/// Estimated key of a score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEstimate {
    pub tonic: Tonic,
    pub mode: Mode,
    /// Correlation with the winning template (-1.0 to 1.0); zero when the
    /// key came from a key signature instead of the notes
    pub correlation: f32,
}

impl KeyEstimate {
    /// Tonic as written in titles: `#` for sharps and `b` for flats
    /// ("F#", "Bb"), never the `-` flat sign some notation libraries use
    pub fn tonic_name(&self) -> &'static str {
        self.tonic.as_str()
    }
}

impl fmt::Display for KeyEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode.capitalized())
    }
}

/// Pitch-class histogram weighted by duration in quarter notes
///
/// When every note is durationless (grace notes only), each note counts once.
pub fn pitch_class_histogram(notes: &[SoundingNote]) -> [f32; 12] {
    let mut weighted = [0.0; 12];
    let mut counted = [0.0; 12];

    for note in notes {
        let pitch_class = usize::from(note.pitch.pitch_class());
        weighted[pitch_class] += note.quarter_length.max(0.0);
        counted[pitch_class] += 1.0;
    }

    if weighted.iter().sum::<f32>() > 0.0 {
        weighted
    } else {
        counted
    }
}

/// Estimate the key of a score
///
/// The first key signature decides flat or sharp spelling for ambiguous
/// tonics. A score whose notes give no usable histogram is reported in the
/// key of its first key signature, or C major if it has none.
pub fn estimate_key(score: &Score) -> Result<KeyEstimate, ParseError> {
    let notes = score.sounding_notes()?;
    let first_key = score.key_signatures()?.into_iter().next();
    let prefer_flats = first_key.map_or(false, |key| key.fifths < 0);

    let histogram = pitch_class_histogram(&notes);
    if let Some(estimate) = detect_key(&histogram, &KRUMHANSL_KESSLER, prefer_flats) {
        log::debug!("Estimated {} from {} notes", estimate, notes.len());
        return Ok(estimate);
    }

    let estimate = match first_key {
        Some(key) => {
            let mode = key.mode.unwrap_or(Mode::Major);
            KeyEstimate {
                tonic: Tonic::from_key_signature(key.fifths, mode),
                mode,
                correlation: 0.0,
            }
        }
        None => KeyEstimate {
            tonic: Tonic::C,
            mode: Mode::Major,
            correlation: 0.0,
        },
    };
    log::debug!("No tonal profile in {} notes, using {}", notes.len(), estimate);
    Ok(estimate)
}
