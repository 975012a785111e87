/// Enumeration of the tonic spellings a detected key can be reported with
///
/// Represents the 17 commonly used tonics in Western music:
/// - 7 natural tonics (C, D, E, F, G, A, B)
/// - 5 sharp tonics (C#, D#, F#, G#, A#)
/// - 5 flat tonics (Db, Eb, Gb, Ab, Bb)
///
/// Note: Enharmonic equivalents are listed separately (e.g., C# and Db)
/// because they result in different key signatures and pitch spellings.

use std::fmt;

use super::mode::Mode;
use super::pitch::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tonic {
    C,
    Cs,
    Db,
    D,
    Ds,
    Eb,
    E,
    F,
    Fs,
    Gb,
    G,
    Gs,
    Ab,
    A,
    As,
    Bb,
    B,
}

impl Tonic {
    pub const ALL: [Tonic; 17] = [
        Tonic::C,
        Tonic::Cs,
        Tonic::Db,
        Tonic::D,
        Tonic::Ds,
        Tonic::Eb,
        Tonic::E,
        Tonic::F,
        Tonic::Fs,
        Tonic::Gb,
        Tonic::G,
        Tonic::Gs,
        Tonic::Ab,
        Tonic::A,
        Tonic::As,
        Tonic::Bb,
        Tonic::B,
    ];

    /// Convert tonic to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::Cs => "C#",
            Tonic::Db => "Db",
            Tonic::D => "D",
            Tonic::Ds => "D#",
            Tonic::Eb => "Eb",
            Tonic::E => "E",
            Tonic::F => "F",
            Tonic::Fs => "F#",
            Tonic::Gb => "Gb",
            Tonic::G => "G",
            Tonic::Gs => "G#",
            Tonic::Ab => "Ab",
            Tonic::A => "A",
            Tonic::As => "A#",
            Tonic::Bb => "Bb",
            Tonic::B => "B",
        }
    }

    /// Letter name and chromatic alteration of the tonic
    pub fn spelling(&self) -> (Step, i32) {
        match self {
            Tonic::C => (Step::C, 0),
            Tonic::Cs => (Step::C, 1),
            Tonic::Db => (Step::D, -1),
            Tonic::D => (Step::D, 0),
            Tonic::Ds => (Step::D, 1),
            Tonic::Eb => (Step::E, -1),
            Tonic::E => (Step::E, 0),
            Tonic::F => (Step::F, 0),
            Tonic::Fs => (Step::F, 1),
            Tonic::Gb => (Step::G, -1),
            Tonic::G => (Step::G, 0),
            Tonic::Gs => (Step::G, 1),
            Tonic::Ab => (Step::A, -1),
            Tonic::A => (Step::A, 0),
            Tonic::As => (Step::A, 1),
            Tonic::Bb => (Step::B, -1),
            Tonic::B => (Step::B, 0),
        }
    }

    /// Pitch class 0-11 (C = 0)
    pub fn pitch_class(&self) -> u8 {
        let (step, alter) = self.spelling();
        (step.natural_semitone() + alter).rem_euclid(12) as u8
    }

    /// Position on the line of fifths (C = 0, G = 1, F = -1, ...)
    pub fn line_of_fifths(&self) -> i32 {
        let (step, alter) = self.spelling();
        step.line_of_fifths() + 7 * alter
    }

    /// Key signature (in fifths) of the key built on this tonic
    pub fn key_fifths(&self, mode: Mode) -> i32 {
        self.line_of_fifths() + mode.fifths_offset()
    }

    /// Choose a spelling for a pitch class in the given mode.
    ///
    /// The spelling whose key signature needs the fewest accidentals wins.
    /// F# / Gb major and D# / Eb minor tie at six; `prefer_flats` decides them.
    pub fn spell(pitch_class: u8, mode: Mode, prefer_flats: bool) -> Tonic {
        let pitch_class = pitch_class % 12;

        Tonic::ALL
            .iter()
            .copied()
            .filter(|tonic| tonic.pitch_class() == pitch_class)
            .min_by_key(|tonic| {
                let flat = tonic.spelling().1 < 0;
                let tie_break = if flat == prefer_flats { 0 } else { 1 };
                (tonic.key_fifths(mode).abs(), tie_break)
            })
            .unwrap_or(Tonic::C)
    }

    /// Tonic named by a key signature (fifths + mode), respelled when the
    /// signature's own tonic (Cb, Fb, ...) is not one of the 17 spellings
    pub fn from_key_signature(fifths: i32, mode: Mode) -> Tonic {
        let line = fifths - mode.fifths_offset();

        Tonic::ALL
            .iter()
            .copied()
            .find(|tonic| tonic.line_of_fifths() == line)
            .unwrap_or_else(|| {
                // Every step of the line of fifths is 7 semitones
                let pitch_class = (line * 7).rem_euclid(12) as u8;
                Tonic::spell(pitch_class, mode, fifths < 0)
            })
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
