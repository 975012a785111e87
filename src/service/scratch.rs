//! Scratch storage for request documents
//!
//! In `files` mode the input is written to disk and parsed from there, and
//! the result is written to a second file and read back. Both files belong
//! to a [`ScratchSession`] and are deleted when it is dropped, whichever way
//! the request ends.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::{Builder, NamedTempFile};

use crate::engine::{EngineError, MusicNotationEngine};

const SCRATCH_PREFIX: &str = "transposex-";
const SCRATCH_SUFFIX: &str = ".musicxml";

/// Where request documents live while they are processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScratchMode {
    /// Text is handed to the engine directly
    #[default]
    Memory,
    /// Text goes through scratch files on disk
    Files,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScratchConfig {
    #[serde(default)]
    pub mode: ScratchMode,
    /// Directory for scratch files; the system temp dir when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Scratch resources of one request
pub enum ScratchSession {
    Memory,
    Files {
        input: NamedTempFile,
        output: NamedTempFile,
    },
}

impl ScratchSession {
    pub fn open(config: &ScratchConfig) -> std::io::Result<Self> {
        match config.mode {
            ScratchMode::Memory => Ok(ScratchSession::Memory),
            ScratchMode::Files => {
                let input = create_file(config.dir.as_deref())?;
                let output = create_file(config.dir.as_deref())?;
                log::debug!(
                    "Scratch files: input {}, output {}",
                    input.path().display(),
                    output.path().display()
                );
                Ok(ScratchSession::Files { input, output })
            }
        }
    }

    /// Parse the request document, through the input file in `files` mode
    pub fn load<E: MusicNotationEngine>(&mut self, engine: &E, xml: &str) -> Result<E::Score, EngineError> {
        match self {
            ScratchSession::Memory => engine.parse(xml),
            ScratchSession::Files { input, .. } => {
                input.write_all(xml.as_bytes())?;
                input.flush()?;
                log::info!("Input saved to {}", input.path().display());
                engine.parse_file(input.path())
            }
        }
    }

    /// Serialize the result, through the output file in `files` mode
    pub fn store<E: MusicNotationEngine>(&mut self, engine: &E, score: &E::Score) -> Result<String, EngineError> {
        match self {
            ScratchSession::Memory => engine.serialize(score),
            ScratchSession::Files { output, .. } => {
                engine.write_file(score, output.path())?;
                log::info!("Result written to {}", output.path().display());
                Ok(std::fs::read_to_string(output.path())?)
            }
        }
    }

    /// Paths of the scratch files, empty in `memory` mode
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            ScratchSession::Memory => Vec::new(),
            ScratchSession::Files { input, output } => vec![input.path(), output.path()],
        }
    }
}

fn create_file(dir: Option<&Path>) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(SCRATCH_PREFIX).suffix(SCRATCH_SUFFIX);
    match dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
}
