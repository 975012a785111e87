/// Spelled intervals for semitone-based transposition
///
/// A request only carries a semitone count, but moving a spelled pitch needs
/// a generic (diatonic) size as well: +3 semitones is a minor third (C -> Eb),
/// not an augmented second (C -> D#). Each simple semitone count maps to its
/// conventional spelling; compound counts add an octave (7 steps) per 12
/// semitones, and downward counts mirror the upward table.

use std::fmt;

use crate::models::{Pitch, Step};

/// Diatonic steps of the conventional spelling for each simple semitone count
/// (P1, m2, M2, m3, M3, P4, A4, P5, m6, M6, m7, M7)
const SIMPLE_STEPS: [i32; 12] = [0, 1, 1, 2, 2, 3, 3, 4, 5, 5, 6, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Generic size in letter steps (a third up is 2, a second down is -1)
    pub diatonic_steps: i32,
    /// Chromatic size in semitones
    pub semitones: i32,
}

impl Interval {
    pub fn new(diatonic_steps: i32, semitones: i32) -> Self {
        Self {
            diatonic_steps,
            semitones,
        }
    }

    /// Conventionally spelled interval spanning `semitones`
    pub fn from_semitones(semitones: i32) -> Self {
        let magnitude = semitones.unsigned_abs();
        let octaves = (magnitude / 12) as i32;
        let steps = SIMPLE_STEPS[(magnitude % 12) as usize] + 7 * octaves;

        Self::new(steps * semitones.signum(), semitones)
    }

    /// The same chromatic interval spelled `delta` generic steps further
    ///
    /// Each step moves the interval twelve places along the line of fifths
    /// (A4 +6 becomes d5 -6), which keeps key signatures within seven accidentals.
    pub fn respelled(&self, delta: i32) -> Self {
        Self::new(self.diatonic_steps + delta, self.semitones)
    }

    /// Displacement along the line of fifths
    ///
    /// Adding this to a key signature's `fifths` transposes the key.
    pub fn fifths(&self) -> i32 {
        let moved = super::transpose_pitch(&Pitch::new(Step::C, 0.0, 4), *self);
        moved.step.line_of_fifths() + 7 * moved.alter as i32
    }

    /// Short name such as "M3", "-P5", "d5" or "m2+1oct"
    pub fn name(&self) -> String {
        const MAJOR_OR_PERFECT: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

        let steps = self.diatonic_steps.abs();
        let octaves = steps / 7;
        let simple_steps = steps % 7;
        let simple_semitones = self.semitones.abs() - 12 * octaves;
        let diff = simple_semitones - MAJOR_OR_PERFECT[simple_steps as usize];
        let perfect = matches!(simple_steps, 0 | 3 | 4);

        let quality = match (perfect, diff) {
            (true, 0) => "P".to_string(),
            (false, 0) => "M".to_string(),
            (false, -1) => "m".to_string(),
            (true, d) if d < 0 => "d".repeat((-d) as usize),
            (false, d) if d < 0 => "d".repeat((-d - 1) as usize),
            (_, d) => "A".repeat(d as usize),
        };
        let sign = if self.semitones < 0 { "-" } else { "" };
        let simple = format!("{}{}{}", sign, quality, simple_steps + 1);

        if octaves > 0 {
            format!("{}+{}oct", simple, octaves)
        } else {
            simple
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
