//! Camera-style filename generation.
//!
//! Real cameras name files with a firmware prefix and an incrementing,
//! zero-padded frame number. The generator mimics a small closed set of
//! those conventions so the rename pipeline sees a realistic mix.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// One firmware naming convention: fixed prefix, zero-padded numeric field,
/// and a base offset added to the global frame counter.
struct CameraPattern {
    prefix: &'static str,
    digits: usize,
    base: u32,
}

/// The closed set of conventions the generator draws from.
///
/// Base offsets are spaced far enough apart that two patterns can never
/// collide on the same counter range at fixture scale.
const CAMERA_PATTERNS: [CameraPattern; 3] = [
    CameraPattern { prefix: "IMG_", digits: 4, base: 2000 },
    CameraPattern { prefix: "DSC_", digits: 4, base: 5000 },
    CameraPattern { prefix: "P", digits: 7, base: 1_000_000 },
];

/// Produce the next camera-style filename for a globally increasing counter.
///
/// The pattern is chosen uniformly per call from the shared RNG; uniqueness
/// across calls comes from the counter, not the pattern choice.
pub fn next_camera_name(rng: &mut ChaCha8Rng, counter: u32) -> String {
    let pattern = &CAMERA_PATTERNS[rng.random_range(0..CAMERA_PATTERNS.len())];
    format!(
        "{}{:0width$}.JPG",
        pattern.prefix,
        pattern.base + counter,
        width = pattern.digits
    )
}
