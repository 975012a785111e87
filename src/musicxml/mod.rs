//! MusicXML score model
//!
//! Uncompressed MusicXML (partwise or timewise) is read into an owned tree,
//! edited in place and written back out.
//!
//! # Overview
//!
//! 1. **Parse**: [`Score::parse`] builds the tree with quick-xml and checks the root
//! 2. **Edit**: transposition ([`Score::transposed`]) and metadata replacement
//!    ([`Score::with_metadata`]) produce new scores
//! 3. **Write**: [`Score::to_xml`] serializes with a UTF-8 declaration
//!
//! Note extraction ([`Score::sounding_notes`]) feeds key analysis.
//!
//! # Basic Usage
//!
//! ```ignore
//! use transposex::musicxml::Score;
//!
//! let score = Score::parse(xml)?;
//! let moved = score.transposed(2)?.with_metadata("Song in D Major", "TransposeX");
//! let output = moved.to_xml()?;
//! ```

pub mod errors;
pub mod metadata;
pub mod notes;
pub mod reader;
pub mod score;
pub mod transpose;
pub mod tree;
pub mod writer;

pub use errors::{ParseError, TranspositionError, WriteError};
pub use notes::{KeySignature, SoundingNote};
pub use score::Score;
pub use tree::{XmlDocument, XmlElement, XmlNode};
