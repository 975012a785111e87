//! Spelled transposition of pitches
//!
//! Semitone offsets from a request become an [`Interval`] with a generic
//! size; pitches then move by letter steps and the alteration absorbs the
//! chromatic remainder, so key relationships survive (E major up a major
//! second is F# major, not Gb major).

pub mod interval;

pub use interval::Interval;

use crate::models::{Pitch, Step};

/// Move a spelled pitch by a spelled interval
///
/// # Examples
/// - C4 + M3 → E4
/// - B3 + m2 → C4
/// - E4 + A4 → A#4
/// - C4 - m3 → A3
pub fn transpose_pitch(pitch: &Pitch, interval: Interval) -> Pitch {
    let index = pitch.step.index() + interval.diatonic_steps;
    let octave = pitch.octave + index.div_euclid(7);
    let step = Step::from_index(index);

    // Sounding position in semitones, excluding microtonal fractions
    let source = 12 * pitch.octave + pitch.step.natural_semitone();
    let natural = 12 * octave + step.natural_semitone();
    let shift = (source + interval.semitones - natural) as f32;

    Pitch::new(step, pitch.alter + shift, octave)
}
