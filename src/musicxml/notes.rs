//! Reading musical content out of a score: pitched notes with their
//! durations, and traditional key signatures.

use crate::models::{Mode, Pitch, Step};

use super::errors::ParseError;
use super::score::Score;
use super::tree::XmlElement;

/// Largest `<alter>` magnitude read, in semitones
pub const MAX_ALTER: f32 = 12.0;

/// Largest `<fifths>` magnitude read (every degree triple sharp or flat
/// with room for the mode offset)
pub const MAX_KEY_FIFTHS: i32 = 35;

/// A pitched note and how long it sounds, in quarter notes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundingNote {
    pub pitch: Pitch,
    /// Zero for grace notes, which carry no `<duration>`
    pub quarter_length: f32,
}

/// A traditional key signature (`<fifths>` plus optional `<mode>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySignature {
    pub fifths: i32,
    pub mode: Option<Mode>,
}

impl Score {
    /// Every pitched note in document order
    ///
    /// Rests and unpitched (percussion) notes are skipped. Durations are
    /// converted with the most recent `<divisions>` value.
    pub fn sounding_notes(&self) -> Result<Vec<SoundingNote>, ParseError> {
        let mut notes = Vec::new();
        let mut divisions = 1.0;
        collect_notes(self.root(), &mut divisions, &mut notes)?;
        Ok(notes)
    }

    /// Traditional key signatures in document order
    ///
    /// Non-traditional signatures (`key-step`/`key-alter` lists) carry no
    /// `<fifths>` and are not reported.
    pub fn key_signatures(&self) -> Result<Vec<KeySignature>, ParseError> {
        let mut signatures = Vec::new();
        let mut error = None;

        self.root().visit(&mut |element| {
            if element.name != "key" || error.is_some() {
                return;
            }
            let Some(fifths) = element.child_text("fifths") else {
                return;
            };
            match parse_fifths("fifths", &fifths) {
                Ok(fifths) => signatures.push(KeySignature {
                    fifths,
                    mode: element.child_text("mode").and_then(|m| m.parse().ok()),
                }),
                Err(e) => error = Some(e),
            }
        });

        match error {
            Some(e) => Err(e),
            None => Ok(signatures),
        }
    }
}

fn collect_notes(element: &XmlElement, divisions: &mut f32, notes: &mut Vec<SoundingNote>) -> Result<(), ParseError> {
    match element.name.as_str() {
        "divisions" => {
            let text = element.text().unwrap_or_default();
            let value = parse_number::<f32>("divisions", text.trim())?;
            if value > 0.0 {
                *divisions = value;
            }
        }
        "note" => {
            if let Some(pitch) = element.child("pitch") {
                let duration = match element.child_text("duration") {
                    Some(text) => parse_number::<f32>("duration", &text)?,
                    None => 0.0,
                };
                notes.push(SoundingNote {
                    pitch: read_pitch(pitch)?,
                    quarter_length: duration / *divisions,
                });
            }
        }
        _ => {
            for child in element.elements() {
                collect_notes(child, divisions, notes)?;
            }
        }
    }
    Ok(())
}

/// Read a `<pitch>` element (step, optional alter, octave)
pub(crate) fn read_pitch(pitch: &XmlElement) -> Result<Pitch, ParseError> {
    let step = pitch
        .child_text("step")
        .ok_or_else(|| ParseError::MissingRequiredElement("step".to_string()))?;
    let step: Step = step.parse().map_err(|_| ParseError::InvalidValue {
        element: "step".to_string(),
        value: step.clone(),
    })?;

    let alter = match pitch.child_text("alter") {
        Some(text) => parse_alter("alter", &text)?,
        None => 0.0,
    };

    let text = pitch
        .child_text("octave")
        .ok_or_else(|| ParseError::MissingRequiredElement("octave".to_string()))?;
    let octave = parse_number::<i32>("octave", &text)?;
    if !(0..=9).contains(&octave) {
        return Err(ParseError::InvalidValue {
            element: "octave".to_string(),
            value: text,
        });
    }

    Ok(Pitch::new(step, alter, octave))
}

/// A finite alteration no larger than [`MAX_ALTER`]
pub(crate) fn parse_alter(element: &str, text: &str) -> Result<f32, ParseError> {
    let alter = parse_number::<f32>(element, text)?;
    if !alter.is_finite() || alter.abs() > MAX_ALTER {
        return Err(ParseError::InvalidValue {
            element: element.to_string(),
            value: text.to_string(),
        });
    }
    Ok(alter)
}

/// A key signature position no further than [`MAX_KEY_FIFTHS`] from C
pub(crate) fn parse_fifths(element: &str, text: &str) -> Result<i32, ParseError> {
    let fifths = parse_number::<i32>(element, text)?;
    if fifths.abs() > MAX_KEY_FIFTHS {
        return Err(ParseError::InvalidValue {
            element: element.to_string(),
            value: text.to_string(),
        });
    }
    Ok(fifths)
}

fn parse_number<T: std::str::FromStr>(element: &str, text: &str) -> Result<T, ParseError> {
    text.trim().parse().map_err(|_| ParseError::InvalidValue {
        element: element.to_string(),
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MEASURES: &str = r#"<score-partwise>
  <part-list><score-part id="P1"><part-name>Flute</part-name></score-part></part-list>
  <part id="P1">
    <measure number="1">
      <attributes><divisions>2</divisions><key><fifths>-1</fifths><mode>minor</mode></key></attributes>
      <note><pitch><step>D</step><octave>5</octave></pitch><duration>4</duration></note>
      <note><grace/><pitch><step>C</step><alter>1</alter><octave>5</octave></pitch></note>
      <note><rest/><duration>2</duration></note>
      <note><unpitched><display-step>E</display-step><display-octave>4</display-octave></unpitched><duration>2</duration></note>
    </measure>
    <measure number="2">
      <attributes><divisions>4</divisions><key><fifths>2</fifths></key></attributes>
      <note><pitch><step>B</step><alter>-1</alter><octave>4</octave></pitch><duration>2</duration></note>
    </measure>
  </part>
</score-partwise>"#;

    #[test]
    fn test_sounding_notes_skip_rests_and_percussion() {
        let score = Score::parse(TWO_MEASURES).unwrap();
        let notes = score.sounding_notes().unwrap();

        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].pitch, Pitch::new(Step::D, 0.0, 5));
        assert_eq!(notes[0].quarter_length, 2.0);
        assert_eq!(notes[1].quarter_length, 0.0);
        assert_eq!(notes[2].pitch, Pitch::new(Step::B, -1.0, 4));
        assert_eq!(notes[2].quarter_length, 0.5);
    }

    #[test]
    fn test_key_signatures() {
        let score = Score::parse(TWO_MEASURES).unwrap();
        let keys = score.key_signatures().unwrap();

        assert_eq!(
            keys,
            vec![
                KeySignature { fifths: -1, mode: Some(Mode::Minor) },
                KeySignature { fifths: 2, mode: None },
            ]
        );
    }

    #[test]
    fn test_read_pitch_requires_octave() {
        let score = Score::parse("<score-partwise><part><measure><note><pitch><step>C</step></pitch><duration>1</duration></note></measure></part></score-partwise>").unwrap();
        let result = score.sounding_notes();
        assert!(matches!(result, Err(ParseError::MissingRequiredElement(ref e)) if e == "octave"));
    }

    fn single_note(pitch: &str) -> Score {
        Score::parse(&format!(
            "<score-partwise><part><measure><note><pitch>{}</pitch><duration>1</duration></note></measure></part></score-partwise>",
            pitch
        ))
        .unwrap()
    }

    #[test]
    fn test_read_pitch_bounds_alter() {
        let score = single_note("<step>C</step><alter>-12</alter><octave>4</octave>");
        assert_eq!(score.sounding_notes().unwrap()[0].pitch.alter, -12.0);

        for alter in ["1e11", "13", "NaN", "inf"] {
            let score = single_note(&format!("<step>C</step><alter>{}</alter><octave>4</octave>", alter));
            assert!(
                matches!(score.sounding_notes(), Err(ParseError::InvalidValue { ref element, .. }) if element == "alter"),
                "alter {}",
                alter
            );
        }
    }

    #[test]
    fn test_read_pitch_bounds_octave() {
        for octave in ["-1", "10", "2147483647", "-2147483648"] {
            let score = single_note(&format!("<step>C</step><octave>{}</octave>", octave));
            assert!(
                matches!(score.sounding_notes(), Err(ParseError::InvalidValue { ref element, .. }) if element == "octave"),
                "octave {}",
                octave
            );
        }
    }

    #[test]
    fn test_key_signature_bounds_fifths() {
        let score = Score::parse("<score-partwise><part><measure><attributes><key><fifths>2147483647</fifths></key></attributes></measure></part></score-partwise>").unwrap();
        assert!(matches!(score.key_signatures(), Err(ParseError::InvalidValue { ref element, .. }) if element == "fifths"));
    }

    #[test]
    fn test_read_pitch_rejects_bad_step() {
        let score = Score::parse("<score-partwise><part><measure><note><pitch><step>H</step><octave>4</octave></pitch></note></measure></part></score-partwise>").unwrap();
        assert!(matches!(score.sounding_notes(), Err(ParseError::InvalidValue { .. })));
    }
}
