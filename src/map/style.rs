//! Presentational attributes for mood-tag badges.
//!
//! Colors are plain RGB triples; the rendering layer converts them to its
//! own color type and derives font sizes from the circle radius.

use rand::Rng;

/// RGB triple.
pub type Rgb = [u8; 3];

/// Badge fill / label color pairs (amber, rose, indigo, emerald, violet,
/// orange, teal, pink, sky, lime).
pub const PALETTE: &[(Rgb, Rgb)] = &[
    ([251, 191, 36], [31, 41, 55]),
    ([251, 113, 133], [255, 255, 255]),
    ([129, 140, 248], [255, 255, 255]),
    ([52, 211, 153], [31, 41, 55]),
    ([167, 139, 250], [255, 255, 255]),
    ([251, 146, 60], [255, 255, 255]),
    ([45, 212, 191], [31, 41, 55]),
    ([244, 114, 182], [255, 255, 255]),
    ([56, 189, 248], [255, 255, 255]),
    ([163, 230, 53], [31, 41, 55]),
];

/// Cosmetic attributes of one badge. None of these affect placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagStyle {
    pub fill: Rgb,
    pub text: Rgb,
    /// Entry-animation delay, seconds.
    pub delay: f32,
}

/// Draw a random palette entry and animation delay for one badge.
pub fn sample_style<R: Rng + ?Sized>(rng: &mut R) -> TagStyle {
    let (fill, text) = PALETTE[rng.random_range(0..PALETTE.len())];
    TagStyle {
        fill,
        text,
        delay: rng.random::<f32>() * 0.5,
    }
}
