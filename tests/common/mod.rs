// Shared fixtures for integration tests
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use transposex::config::ServerConfig;
use transposex::engine::MusicXmlEngine;
use transposex::http::router;
use transposex::service::{ScratchConfig, ScratchMode, ServiceOptions, TransposeService};

/// C major scale titled "Song" by "Someone", with a DOCTYPE and credits
pub const SONG_IN_C: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 4.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">
<score-partwise version="4.0">
  <work>
    <work-title>Song</work-title>
  </work>
  <identification>
    <creator type="composer">Someone</creator>
    <encoding>
      <software>MuseScore 4.2</software>
    </encoding>
  </identification>
  <credit page="1">
    <credit-type>title</credit-type>
    <credit-words>Song</credit-words>
  </credit>
  <part-list>
    <score-part id="P1">
      <part-name>Piano</part-name>
    </score-part>
  </part-list>
  <part id="P1">
    <measure number="1">
      <attributes>
        <divisions>1</divisions>
        <key>
          <fifths>0</fifths>
        </key>
        <time>
          <beats>4</beats>
          <beat-type>4</beat-type>
        </time>
        <clef>
          <sign>G</sign>
          <line>2</line>
        </clef>
      </attributes>
      <note><pitch><step>C</step><octave>4</octave></pitch><duration>1</duration><type>quarter</type></note>
      <note><pitch><step>D</step><octave>4</octave></pitch><duration>1</duration><type>quarter</type></note>
      <note><pitch><step>E</step><octave>4</octave></pitch><duration>1</duration><type>quarter</type></note>
      <note><pitch><step>F</step><octave>4</octave></pitch><duration>1</duration><type>quarter</type></note>
    </measure>
    <measure number="2">
      <note><pitch><step>G</step><octave>4</octave></pitch><duration>1</duration><type>quarter</type></note>
      <note><pitch><step>A</step><octave>4</octave></pitch><duration>1</duration><type>quarter</type></note>
      <note><pitch><step>B</step><octave>4</octave></pitch><duration>1</duration><type>quarter</type></note>
      <note><pitch><step>C</step><octave>5</octave></pitch><duration>1</duration><type>quarter</type></note>
    </measure>
  </part>
</score-partwise>
"#;

/// Untitled A minor melody (A=5, C=1, E=2, G#=1, B=1, D=1 quarter notes)
pub const UNTITLED_A_MINOR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<score-partwise version="3.1">
  <part-list>
    <score-part id="P1"><part-name>Violin</part-name></score-part>
  </part-list>
  <part id="P1">
    <measure number="1">
      <attributes><divisions>2</divisions><key><fifths>0</fifths><mode>minor</mode></key></attributes>
      <note><pitch><step>A</step><octave>4</octave></pitch><duration>4</duration></note>
      <note><pitch><step>C</step><octave>5</octave></pitch><duration>2</duration></note>
      <note><pitch><step>E</step><octave>5</octave></pitch><duration>4</duration></note>
    </measure>
    <measure number="2">
      <note><pitch><step>G</step><alter>1</alter><octave>4</octave></pitch><duration>2</duration><accidental>sharp</accidental></note>
      <note><pitch><step>B</step><octave>4</octave></pitch><duration>2</duration></note>
      <note><pitch><step>D</step><octave>5</octave></pitch><duration>2</duration></note>
      <note><pitch><step>A</step><octave>4</octave></pitch><duration>6</duration></note>
    </measure>
  </part>
</score-partwise>
"#;

pub fn song_titled(title: &str) -> String {
    SONG_IN_C.replace("<work-title>Song</work-title>", &format!("<work-title>{}</work-title>", title))
}

pub fn memory_service() -> Arc<TransposeService<MusicXmlEngine>> {
    Arc::new(TransposeService::new(MusicXmlEngine::new(), ServiceOptions::default()))
}

pub fn files_options(dir: &Path) -> ServiceOptions {
    ServiceOptions {
        scratch: ScratchConfig {
            mode: ScratchMode::Files,
            dir: Some(dir.to_path_buf()),
        },
        ..ServiceOptions::default()
    }
}

pub fn app() -> axum::Router {
    router(memory_service(), &ServerConfig::default())
}

/// Parse with an independent reader to show the output is well-formed
pub fn independent_parse(xml: &str) -> roxmltree::Document<'_> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(xml, options).expect("output should be well-formed XML")
}

/// (step, alter, octave) of every pitched note, in document order
pub fn pitches(xml: &str) -> Vec<(String, String, String)> {
    let document = independent_parse(xml);
    document
        .descendants()
        .filter(|node| node.has_tag_name("pitch"))
        .map(|pitch| {
            let child = |name: &str| {
                pitch
                    .children()
                    .find(|c| c.has_tag_name(name))
                    .and_then(|c| c.text())
                    .unwrap_or("")
                    .to_string()
            };
            (child("step"), child("alter"), child("octave"))
        })
        .collect()
}

pub fn element_text(xml: &str, path: &[&str]) -> Option<String> {
    let document = independent_parse(xml);
    let mut node = document.root_element();
    for name in path {
        node = node.children().find(|c| c.has_tag_name(*name))?;
    }
    node.text().map(|t| t.trim().to_string())
}
