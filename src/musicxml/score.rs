use super::errors::{ParseError, WriteError};
use super::reader::parse_document;
use super::tree::{XmlDocument, XmlElement};
use super::writer::write_document;

/// Root element names accepted as scores
const SCORE_ROOTS: [&str; 2] = ["score-partwise", "score-timewise"];

/// A parsed MusicXML score
///
/// Wraps the owned XML tree; metadata, transposition and note extraction
/// live in sibling modules as further `impl Score` blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    document: XmlDocument,
}

impl Score {
    /// Parse uncompressed MusicXML text
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let document = parse_document(xml)?;

        let root = document.root.name.as_str();
        if !SCORE_ROOTS.contains(&root) {
            return Err(ParseError::UnsupportedFormat(format!(
                "Expected score-partwise or score-timewise, found {}",
                root
            )));
        }

        Ok(Self { document })
    }

    /// Serialize back to MusicXML text
    pub fn to_xml(&self) -> Result<String, WriteError> {
        write_document(&self.document)
    }

    pub fn root(&self) -> &XmlElement {
        &self.document.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut XmlElement {
        &mut self.document.root
    }
}
