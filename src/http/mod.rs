//! HTTP surface: `GET /` banner and `POST /transpose`
//!
//! `POST /transpose` takes `{"xml": "...", "interval": 3}` and answers
//! `{"transposedXml": "..."}`. The new work title reads
//! `"<title> in <tonic> <Mode>"`, with tonics spelled using `#` and `b`
//! (`"Song in Bb Major"`, `"Untitled Piece in F# Minor"`). Errors come back
//! as `{"error": "..."}`: 400 for a missing field or non-integer interval,
//! 500 for anything the engine rejects.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::HttpError;
pub use handlers::WELCOME_BANNER;
pub use routes::router;
