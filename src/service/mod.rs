//! Transpose request pipeline
//!
//! Validation, engine calls, title composition and scratch storage for one
//! `POST /transpose` request. Everything here is synchronous; the HTTP layer
//! runs it on the blocking pool.

pub mod error;
pub mod pipeline;
pub mod request;
pub mod scratch;
pub mod title;

pub use error::{ErrorKind, TransposeError};
pub use pipeline::{ServiceOptions, TransposeService, DEFAULT_PREVIEW_CHARS};
pub use request::{IntervalField, TransposeRequest, TransposeResponse, ValidatedRequest};
pub use scratch::{ScratchConfig, ScratchMode, ScratchSession};
pub use title::{compose_title, TRANSPOSER_COMPOSER, UNTITLED_TITLE};
