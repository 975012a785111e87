//! Spelled pitches as MusicXML writes them: a letter step, a chromatic
//! alteration and an octave.

use std::fmt;
use std::str::FromStr;

/// Diatonic letter name of a pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    const ORDER: [Step; 7] = [Step::C, Step::D, Step::E, Step::F, Step::G, Step::A, Step::B];

    /// Position within the octave, C = 0 .. B = 6
    pub fn index(&self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 1,
            Step::E => 2,
            Step::F => 3,
            Step::G => 4,
            Step::A => 5,
            Step::B => 6,
        }
    }

    /// Step at a diatonic index, wrapping around the octave
    pub fn from_index(index: i32) -> Step {
        Self::ORDER[index.rem_euclid(7) as usize]
    }

    /// Semitones above C of the unaltered step
    pub fn natural_semitone(&self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }

    /// Position on the line of fifths (F = -1, C = 0, G = 1 ... B = 5)
    pub fn line_of_fifths(&self) -> i32 {
        match self {
            Step::F => -1,
            Step::C => 0,
            Step::G => 1,
            Step::D => 2,
            Step::A => 3,
            Step::E => 4,
            Step::B => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::C => "C",
            Step::D => "D",
            Step::E => "E",
            Step::F => "F",
            Step::G => "G",
            Step::A => "A",
            Step::B => "B",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(Step::C),
            "D" => Ok(Step::D),
            "E" => Ok(Step::E),
            "F" => Ok(Step::F),
            "G" => Ok(Step::G),
            "A" => Ok(Step::A),
            "B" => Ok(Step::B),
            other => Err(format!("Invalid step: '{}'", other)),
        }
    }
}

/// A spelled pitch
///
/// `alter` is fractional because MusicXML allows microtones (-0.5 for a
/// quarter-tone flat); transposition only ever adds whole semitones to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch {
    pub step: Step,
    pub alter: f32,
    pub octave: i32,
}

impl Pitch {
    pub fn new(step: Step, alter: f32, octave: i32) -> Self {
        Self { step, alter, octave }
    }

    /// Pitch class 0-11, microtones rounded to the nearest semitone
    pub fn pitch_class(&self) -> u8 {
        let semitone = self.step.natural_semitone() + (self.alter.round() as i32).rem_euclid(12);
        semitone.rem_euclid(12) as u8
    }

    /// Whether the alteration is a whole number of semitones
    pub fn is_chromatic(&self) -> bool {
        self.alter.fract() == 0.0
    }

    /// MusicXML `<alter>` text, `None` when the pitch is unaltered
    pub fn alter_text(&self) -> Option<String> {
        if self.alter == 0.0 {
            None
        } else if self.is_chromatic() {
            Some(format!("{}", self.alter as i32))
        } else {
            Some(format!("{}", self.alter))
        }
    }

    /// MusicXML `<accidental>` value matching the alteration
    pub fn accidental_name(&self) -> Option<&'static str> {
        let name = match self.alter {
            a if a == 0.0 => "natural",
            a if a == 1.0 => "sharp",
            a if a == -1.0 => "flat",
            a if a == 2.0 => "double-sharp",
            a if a == -2.0 => "flat-flat",
            a if a == 3.0 => "triple-sharp",
            a if a == -3.0 => "triple-flat",
            a if a == 0.5 => "quarter-sharp",
            a if a == -0.5 => "quarter-flat",
            a if a == 1.5 => "three-quarters-sharp",
            a if a == -1.5 => "three-quarters-flat",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Pitch {
    /// `F#5`, `Bbb2`; alterations past a triple sharp or flat, and
    /// microtones, are written numerically (`C(+0.5)4`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = self.is_chromatic() && self.alter.abs() <= 3.0;
        let accidental = match self.alter {
            a if a == 0.0 => String::new(),
            a if a > 0.0 && symbols => "#".repeat(a as usize),
            a if a < 0.0 && symbols => "b".repeat((-a) as usize),
            a => format!("({:+})", a),
        };
        write!(f, "{}{}{}", self.step, accidental, self.octave)
    }
}
