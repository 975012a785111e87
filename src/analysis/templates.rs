//! Krumhansl-Kessler key templates
//!
//! Tonal profiles for 24 keys (12 major + 12 minor), rotated from the two
//! probe-tone profiles in C.

use once_cell::sync::Lazy;

use crate::models::Mode;

/// Probe-tone ratings for C major, indexed by pitch class
pub const MAJOR_PROFILE: [f32; 12] = [6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88];

/// Probe-tone ratings for C minor, indexed by pitch class
pub const MINOR_PROFILE: [f32; 12] = [6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17];

/// Shared templates; rotation happens once per process
pub static KRUMHANSL_KESSLER: Lazy<KeyTemplates> = Lazy::new(KeyTemplates::new);

/// Key templates for all 24 keys
#[derive(Debug, Clone)]
pub struct KeyTemplates {
    /// Major key templates (tonic pitch class 0-11: C, C#, D, ..., B)
    pub major: [[f32; 12]; 12],

    /// Minor key templates (tonic pitch class 0-11: C, C#, D, ..., B)
    pub minor: [[f32; 12]; 12],
}

impl KeyTemplates {
    /// Create key templates with Krumhansl-Kessler profiles
    pub fn new() -> Self {
        Self {
            major: rotations(&MAJOR_PROFILE),
            minor: rotations(&MINOR_PROFILE),
        }
    }

    /// Template for the key on `tonic` (pitch class) in `mode`
    pub fn template(&self, tonic: u8, mode: Mode) -> &[f32; 12] {
        let tonic = usize::from(tonic % 12);
        match mode {
            Mode::Major => &self.major[tonic],
            Mode::Minor => &self.minor[tonic],
        }
    }
}

impl Default for KeyTemplates {
    fn default() -> Self {
        Self::new()
    }
}

fn rotations(profile: &[f32; 12]) -> [[f32; 12]; 12] {
    let mut templates = [[0.0; 12]; 12];
    for (tonic, template) in templates.iter_mut().enumerate() {
        for (pitch_class, weight) in template.iter_mut().enumerate() {
            *weight = profile[(pitch_class + 12 - tonic) % 12];
        }
    }
    templates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonic_carries_highest_weight() {
        let templates = KeyTemplates::new();
        for tonic in 0..12u8 {
            for mode in [Mode::Major, Mode::Minor] {
                let template = templates.template(tonic, mode);
                let best = (0..12)
                    .max_by(|&a, &b| template[a].total_cmp(&template[b]))
                    .unwrap();
                assert_eq!(best, usize::from(tonic));
            }
        }
    }

    #[test]
    fn test_rotation() {
        let g_major = KRUMHANSL_KESSLER.template(7, Mode::Major);
        // D is the fifth of G
        assert_eq!(g_major[2], MAJOR_PROFILE[7]);
        assert_eq!(g_major[7], MAJOR_PROFILE[0]);
    }
}
