//! Models module for TransposeX
//!
//! Pitch spelling, tonic and mode types shared by the transposition
//! and key analysis code.

pub mod mode;
pub mod pitch;
pub mod tonic;

// Re-export commonly used types
pub use mode::Mode;
pub use pitch::{Pitch, Step};
pub use tonic::Tonic;
