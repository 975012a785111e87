use crate::engine::MusicNotationEngine;

use super::error::TransposeError;
use super::request::{TransposeRequest, TransposeResponse};
use super::scratch::{ScratchConfig, ScratchSession};
use super::title::{compose_title, TRANSPOSER_COMPOSER};

/// Default number of input characters echoed to the log
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    pub scratch: ScratchConfig,
    /// Characters of input and output XML logged at debug level
    pub log_preview_chars: usize,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            scratch: ScratchConfig::default(),
            log_preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Transposes scores and retitles them for the key they end up in
///
/// Holds no per-request state; one instance serves every request.
pub struct TransposeService<E: MusicNotationEngine> {
    engine: E,
    options: ServiceOptions,
}

impl<E: MusicNotationEngine> TransposeService<E> {
    pub fn new(engine: E, options: ServiceOptions) -> Self {
        Self { engine, options }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// Validate a request and transpose its score
    pub fn handle(&self, request: TransposeRequest) -> Result<TransposeResponse, TransposeError> {
        log::debug!(
            "Received XML: {}",
            request
                .xml
                .as_deref()
                .map(|xml| preview(xml, self.options.log_preview_chars))
                .unwrap_or("<none>")
        );
        log::info!("Interval to transpose: {:?}", request.interval);

        let request = request.validate().map_err(|e| {
            log::warn!("Rejected request: {}", e);
            e
        })?;

        let transposed_xml = self.transpose(&request.xml, request.semitones).map_err(|e| {
            log::error!("Transposition failed: {}", e);
            e
        })?;
        Ok(TransposeResponse { transposed_xml })
    }

    /// Parse, transpose, retitle and serialize one score
    pub fn transpose(&self, xml: &str, semitones: i32) -> Result<String, TransposeError> {
        let mut scratch = ScratchSession::open(&self.options.scratch)?;

        let score = scratch.load(&self.engine, xml)?;
        log::info!("Parsed score ({} bytes)", xml.len());

        let transposed = self.engine.transpose(&score, semitones)?;
        log::info!("Transposed by {} semitones", semitones);

        let original_title = self.engine.read_title(&score);
        let key = self.engine.analyze_key(&transposed)?;
        let title = compose_title(original_title.as_deref(), &key);
        log::info!("Setting title to: {}", title);

        let retitled = self.engine.write_metadata(transposed, &title, TRANSPOSER_COMPOSER);
        let result = scratch.store(&self.engine, &retitled)?;
        log::debug!(
            "Transposed XML: {}",
            preview(&result, self.options.log_preview_chars)
        );

        Ok(result)
    }
}

/// Leading `max_chars` characters, cut on a character boundary
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
