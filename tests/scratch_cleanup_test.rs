// Scratch-file mode: same results as memory mode, and no files left behind

mod common;

use std::path::Path;

use transposex::analysis::KeyEstimate;
use transposex::engine::{EngineError, MusicNotationEngine, MusicXmlEngine};
use transposex::musicxml::Score;
use transposex::service::{ErrorKind, TransposeRequest, TransposeService};

use common::{files_options, memory_service, SONG_IN_C};

/// Delegates to the real engine but cannot serialize
struct BrokenWriter(MusicXmlEngine);

impl MusicNotationEngine for BrokenWriter {
    type Score = Score;

    fn parse(&self, text: &str) -> Result<Score, EngineError> {
        self.0.parse(text)
    }

    fn transpose(&self, score: &Score, semitones: i32) -> Result<Score, EngineError> {
        self.0.transpose(score, semitones)
    }

    fn analyze_key(&self, score: &Score) -> Result<KeyEstimate, EngineError> {
        self.0.analyze_key(score)
    }

    fn read_title(&self, score: &Score) -> Option<String> {
        self.0.read_title(score)
    }

    fn write_metadata(&self, score: Score, title: &str, composer: &str) -> Score {
        self.0.write_metadata(score, title, composer)
    }

    fn serialize(&self, _score: &Score) -> Result<String, EngineError> {
        Err(EngineError::Serialize("disk full".to_string()))
    }
}

fn scratch_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_files_mode_matches_memory_mode() {
    let dir = tempfile::tempdir().unwrap();
    let service = TransposeService::new(MusicXmlEngine::new(), files_options(dir.path()));

    let from_files = service.handle(TransposeRequest::new(SONG_IN_C, 4)).unwrap();
    let from_memory = memory_service().handle(TransposeRequest::new(SONG_IN_C, 4)).unwrap();

    assert_eq!(from_files, from_memory);
    assert!(from_files.transposed_xml.contains("<work-title>Song in E Major</work-title>"));
    assert_eq!(scratch_entries(dir.path()), 0);
}

#[test]
fn test_no_files_left_after_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let service = TransposeService::new(MusicXmlEngine::new(), files_options(dir.path()));

    let error = service.handle(TransposeRequest::new("<score-partwise><part>", 3)).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::EngineFailure);
    assert_eq!(scratch_entries(dir.path()), 0);
}

#[test]
fn test_no_files_left_after_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let service = TransposeService::new(BrokenWriter(MusicXmlEngine::new()), files_options(dir.path()));

    let error = service.handle(TransposeRequest::new(SONG_IN_C, -1)).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::EngineFailure);
    assert_eq!(error.to_string(), "Serialization failed: disk full");
    assert_eq!(scratch_entries(dir.path()), 0);
}

#[test]
fn test_missing_scratch_dir_is_engine_failure() {
    let dir = tempfile::tempdir().unwrap();
    let service = TransposeService::new(MusicXmlEngine::new(), files_options(&dir.path().join("absent")));

    let error = service.handle(TransposeRequest::new(SONG_IN_C, 2)).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::EngineFailure);
    assert!(error.to_string().starts_with("Scratch file error"));
}
