use crate::analysis::KeyEstimate;

/// Title used when the source score has none
pub const UNTITLED_TITLE: &str = "Untitled Piece";

/// Composer written into every transposed score
pub const TRANSPOSER_COMPOSER: &str = "TransposeX";

/// `"{title} in {tonic} {Mode}"`, e.g. "Song in A Major"
///
/// The original title is used as given, even if it already names a key.
pub fn compose_title(original: Option<&str>, key: &KeyEstimate) -> String {
    let original = original
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(UNTITLED_TITLE);

    format!("{} in {} {}", original, key.tonic_name(), key.mode.capitalized())
}
