//! Transposition of a whole score
//!
//! Moves note pitches, traditional key signatures and chord symbols by one
//! spelled interval. Anything else (clefs, instrument `<transpose>` elements,
//! percussion) is left untouched.

use crate::models::{Pitch, Step};
use crate::transposition::{transpose_pitch, Interval};

use super::errors::{ParseError, TranspositionError};
use super::notes::{parse_alter, parse_fifths, read_pitch};
use super::score::Score;
use super::tree::{XmlElement, XmlNode};

/// Largest key signature MusicXML readers reliably display
const MAX_KEY_ACCIDENTALS: i32 = 7;

/// C0 to B9; any wider interval leaves octaves 0-9 for every pitch
pub const MAX_SEMITONES: i32 = 119;

impl Score {
    /// A copy of this score moved by `semitones` (positive is up)
    pub fn transposed(&self, semitones: i32) -> Result<Score, TranspositionError> {
        let interval = self.spell_interval(semitones)?;
        log::debug!("Transposing by {} semitones as {}", semitones, interval);

        let mut score = self.clone();
        score.apply_interval(interval)?;
        Ok(score)
    }

    /// Conventional spelling of the interval, or its enharmonic neighbour
    /// when the conventional one would push a key signature past seven
    /// sharps or flats (Eb major up an augmented fourth is A major, not
    /// the nine-sharp "A# major" spelling's mirror)
    pub fn spell_interval(&self, semitones: i32) -> Result<Interval, TranspositionError> {
        if !(-MAX_SEMITONES..=MAX_SEMITONES).contains(&semitones) {
            return Err(TranspositionError::IntervalOutOfRange { semitones });
        }
        let interval = Interval::from_semitones(semitones);
        let shift = interval.fifths();

        let shifted: Vec<i32> = self
            .key_signatures()?
            .iter()
            .map(|key| key.fifths + shift)
            .collect();

        let interval = match (shifted.iter().max(), shifted.iter().min()) {
            (Some(&max), _) if max > MAX_KEY_ACCIDENTALS => interval.respelled(1),
            (_, Some(&min)) if min < -MAX_KEY_ACCIDENTALS => interval.respelled(-1),
            _ => interval,
        };
        Ok(interval)
    }

    fn apply_interval(&mut self, interval: Interval) -> Result<(), TranspositionError> {
        let fifths = interval.fifths();

        self.root_mut().try_visit_mut(&mut |element: &mut XmlElement| match element.name.as_str() {
            "note" => transpose_note(element, interval),
            "key" => transpose_key(element, fifths),
            "harmony" => transpose_harmony(element, interval),
            _ => Ok(()),
        })
    }
}

fn transpose_note(note: &mut XmlElement, interval: Interval) -> Result<(), TranspositionError> {
    let Some(pitch_element) = note.child_mut("pitch") else {
        return Ok(());
    };

    let moved = transpose_pitch(&read_pitch(pitch_element)?, interval);
    if !(0..=9).contains(&moved.octave) {
        return Err(TranspositionError::OctaveOutOfRange {
            pitch: moved.to_string(),
        });
    }

    if let Some(step) = pitch_element.child_mut("step") {
        step.set_text(moved.step.as_str());
    }
    write_alter(pitch_element, "alter", &moved, Some("octave"));
    if let Some(octave) = pitch_element.child_mut("octave") {
        octave.set_text(moved.octave.to_string());
    }

    // A displayed accidental has to follow the new spelling
    if let (Some(accidental), Some(name)) = (note.child_mut("accidental"), moved.accidental_name()) {
        accidental.set_text(name);
    }
    Ok(())
}

fn transpose_key(key: &mut XmlElement, shift: i32) -> Result<(), TranspositionError> {
    for name in ["fifths", "cancel"] {
        if let Some(element) = key.child_mut(name) {
            let text = element.text().unwrap_or_default();
            let fifths = parse_fifths(name, &text)?;
            element.set_text((fifths + shift).to_string());
        }
    }
    Ok(())
}

/// Chord symbols: `root` (root-step/root-alter) and `bass` (bass-step/bass-alter)
fn transpose_harmony(harmony: &mut XmlElement, interval: Interval) -> Result<(), TranspositionError> {
    for (container, prefix) in [("root", "root"), ("bass", "bass")] {
        if let Some(element) = harmony.child_mut(container) {
            transpose_spelling(element, prefix, interval)?;
        }
    }
    Ok(())
}

fn transpose_spelling(element: &mut XmlElement, prefix: &str, interval: Interval) -> Result<(), TranspositionError> {
    let step_name = format!("{}-step", prefix);
    let alter_name = format!("{}-alter", prefix);

    let step_text = element
        .child_text(&step_name)
        .ok_or_else(|| ParseError::MissingRequiredElement(step_name.clone()))?;
    let step: Step = step_text.parse().map_err(|_| ParseError::InvalidValue {
        element: step_name.clone(),
        value: step_text.clone(),
    })?;
    let alter = match element.child_text(&alter_name) {
        Some(text) => parse_alter(&alter_name, &text)?,
        None => 0.0,
    };

    // Chord symbols have no octave; any fixed octave gives the same spelling
    let moved = transpose_pitch(&Pitch::new(step, alter, 4), interval);

    if let Some(step) = element.child_mut(&step_name) {
        step.set_text(moved.step.as_str());
    }
    write_alter(element, &alter_name, &moved, None);
    Ok(())
}

/// Set, insert or remove the alteration element for a moved pitch
fn write_alter(parent: &mut XmlElement, alter_name: &str, moved: &Pitch, before: Option<&str>) {
    match moved.alter_text() {
        Some(text) => match parent.child_mut(alter_name) {
            Some(alter) => alter.set_text(text),
            None => {
                let alter = XmlElement::with_text(alter_name, text);
                match before {
                    Some(before) => parent.insert_before(alter, before),
                    None => parent.children.push(XmlNode::Element(alter)),
                }
            }
        },
        None => parent.remove_elements(|e| e.name == alter_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(body: &str) -> Score {
        Score::parse(&format!(
            "<score-partwise><part-list/><part id=\"P1\"><measure number=\"1\">{}</measure></part></score-partwise>",
            body
        ))
        .unwrap()
    }

    fn first_pitch(score: &Score) -> Pitch {
        score.sounding_notes().unwrap()[0].pitch
    }

    #[test]
    fn test_note_moves_and_gains_alter() {
        let original = score("<note><pitch><step>C</step><octave>4</octave></pitch><duration>1</duration></note>");
        let moved = original.transposed(1).unwrap();

        assert_eq!(first_pitch(&moved), Pitch::new(Step::D, -1.0, 4));

        let xml = moved.to_xml().unwrap();
        assert!(xml.contains("<step>D</step>"));
        assert!(xml.find("<alter>-1</alter>").unwrap() < xml.find("<octave>4</octave>").unwrap());
    }

    #[test]
    fn test_natural_result_drops_alter() {
        let original = score("<note><pitch><step>F</step><alter>1</alter><octave>4</octave></pitch><duration>1</duration></note>");
        let moved = original.transposed(1).unwrap();

        assert_eq!(first_pitch(&moved), Pitch::new(Step::G, 0.0, 4));
        assert!(!moved.to_xml().unwrap().contains("<alter>"));
    }

    #[test]
    fn test_displayed_accidental_follows_spelling() {
        let original = score(
            "<note><pitch><step>F</step><alter>1</alter><octave>4</octave></pitch><duration>1</duration><accidental>sharp</accidental></note>",
        );
        let moved = original.transposed(1).unwrap();

        assert_eq!(first_pitch(&moved), Pitch::new(Step::G, 0.0, 4));
        assert!(moved.to_xml().unwrap().contains("<accidental>natural</accidental>"));
    }

    #[test]
    fn test_key_signature_moves_along_fifths() {
        let original = score("<attributes><key><cancel>1</cancel><fifths>-3</fifths><mode>minor</mode></key></attributes>");
        let moved = original.transposed(2).unwrap();

        let key = moved.key_signatures().unwrap()[0];
        assert_eq!(key.fifths, -1);
        assert!(moved.to_xml().unwrap().contains("<cancel>3</cancel>"));
    }

    #[test]
    fn test_respells_to_stay_within_seven_accidentals() {
        // E major (4 sharps) up an augmented fourth would need 10 sharps
        let original = score(
            "<attributes><key><fifths>4</fifths></key></attributes>\
             <note><pitch><step>E</step><octave>4</octave></pitch><duration>1</duration></note>",
        );
        let moved = original.transposed(6).unwrap();

        assert_eq!(moved.key_signatures().unwrap()[0].fifths, -2);
        assert_eq!(first_pitch(&moved), Pitch::new(Step::B, -1.0, 4));
    }

    #[test]
    fn test_chord_symbols_move() {
        let original = score(
            "<harmony><root><root-step>G</root-step></root><kind>dominant</kind>\
             <bass><bass-step>B</bass-step></bass></harmony>",
        );
        let moved = original.transposed(3).unwrap();
        let xml = moved.to_xml().unwrap();

        assert!(xml.contains("<root-step>B</root-step>"));
        assert!(xml.contains("<root-alter>-1</root-alter>"));
        assert!(xml.contains("<bass-step>D</bass-step>"));
    }

    #[test]
    fn test_zero_interval_is_identity() {
        let original = score(
            "<attributes><key><fifths>2</fifths></key></attributes>\
             <note><pitch><step>C</step><alter>1</alter><octave>5</octave></pitch><duration>1</duration></note>",
        );
        let moved = original.transposed(0).unwrap();

        assert_eq!(moved, original);
    }

    #[test]
    fn test_octave_range_is_enforced() {
        let original = score("<note><pitch><step>B</step><octave>9</octave></pitch><duration>1</duration></note>");
        let result = original.transposed(12);

        assert!(matches!(result, Err(TranspositionError::OctaveOutOfRange { .. })));
    }

    #[test]
    fn test_interval_range_is_enforced() {
        let original = score("<note><pitch><step>C</step><octave>0</octave></pitch><duration>1</duration></note>");

        assert_eq!(
            first_pitch(&original.transposed(MAX_SEMITONES).unwrap()),
            Pitch::new(Step::B, 0.0, 9)
        );
        for semitones in [i32::MIN, i32::MAX, MAX_SEMITONES + 1, -MAX_SEMITONES - 1] {
            assert!(
                matches!(
                    original.transposed(semitones),
                    Err(TranspositionError::IntervalOutOfRange { semitones: s }) if s == semitones
                ),
                "semitones {}",
                semitones
            );
        }
    }

    #[test]
    fn test_oversized_key_signature_rejected() {
        let original = score("<attributes><key><fifths>2147483647</fifths></key></attributes>");
        let result = original.transposed(1);

        assert!(matches!(result, Err(TranspositionError::Pitch(ParseError::InvalidValue { .. }))));
    }

    #[test]
    fn test_oversized_chord_alter_rejected() {
        let original = score("<harmony><root><root-step>C</root-step><root-alter>1e11</root-alter></root><kind>major</kind></harmony>");
        let result = original.transposed(1);

        assert!(matches!(result, Err(TranspositionError::Pitch(ParseError::InvalidValue { .. }))));
    }

    #[test]
    fn test_unpitched_notes_untouched() {
        let original = score(
            "<note><unpitched><display-step>E</display-step><display-octave>4</display-octave></unpitched><duration>1</duration></note>",
        );
        let moved = original.transposed(5).unwrap();

        assert_eq!(moved, original);
    }
}
