//! Key detection algorithm
//!
//! Correlates a pitch-class histogram with each of the 24 Krumhansl-Kessler
//! templates and reports the best match.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). *Cognitive Foundations of Musical Pitch*.
//! Oxford University Press. (Key-finding algorithm after Krumhansl & Schmuckler.)

use crate::models::{Mode, Tonic};

use super::templates::KeyTemplates;
use super::KeyEstimate;

/// Detect the key of a pitch-class histogram
///
/// Every key is scored with the Pearson correlation between the histogram
/// and its template; the highest score wins, with major keys and lower
/// tonics winning exact ties.
///
/// # Arguments
///
/// * `histogram` - Weight per pitch class (C = 0)
/// * `templates` - Key templates (Krumhansl-Kessler profiles)
/// * `prefer_flats` - Spelling choice for tonics that are equally far from C
///   either way (F# / Gb major, D# / Eb minor)
///
/// # Returns
///
/// `None` when the histogram has no variance (no notes, or every pitch
/// class equally weighted) and therefore correlates with nothing.
pub fn detect_key(histogram: &[f32; 12], templates: &KeyTemplates, prefer_flats: bool) -> Option<KeyEstimate> {
    let mut best: Option<(u8, Mode, f32)> = None;

    for mode in [Mode::Major, Mode::Minor] {
        for tonic in 0..12u8 {
            let score = pearson(histogram, templates.template(tonic, mode))?;
            if best.map_or(true, |(_, _, best_score)| score > best_score) {
                best = Some((tonic, mode, score));
            }
        }
    }

    let (pitch_class, mode, correlation) = best?;
    log::debug!(
        "Key correlation {:.3} for pitch class {} {}",
        correlation,
        pitch_class,
        mode
    );

    Some(KeyEstimate {
        tonic: Tonic::spell(pitch_class, mode, prefer_flats),
        mode,
        correlation,
    })
}

/// Pearson correlation coefficient; `None` if either side is constant
pub fn pearson(a: &[f32; 12], b: &[f32; 12]) -> Option<f32> {
    let mean_a = a.iter().sum::<f32>() / 12.0;
    let mean_b = b.iter().sum::<f32>() / 12.0;

    let mut covariance = 0.0;
    let mut variance_a = 0.0;
    let mut variance_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        variance_a += dx * dx;
        variance_b += dy * dy;
    }

    let denominator = (variance_a * variance_b).sqrt();
    if denominator <= f32::EPSILON {
        return None;
    }
    Some(covariance / denominator)
}
