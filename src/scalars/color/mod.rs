//! Colour scalars and the conversions between them.
//!
//! Alpha is a byte (`0..=255`) wherever it appears, and survives every
//! conversion between [`HexColorCode`], [`Rgba`] and [`Hsla`]; converting to
//! [`Rgb`] or [`Hsl`] drops it.
//!
//! Converting HSL to RGB rounds each channel half away from zero, so
//! `hsl(120, 100%, 25%)` becomes `rgb(0, 128, 0)`. Converting RGB to HSL
//! clamps saturation and lightness to `0..=100`.

mod hex;
mod hsl;
mod hsla;
mod rgb;
mod rgba;

pub use hex::HexColorCode;
pub use hsl::Hsl;
pub use hsla::Hsla;
pub use rgb::Rgb;
pub use rgba::Rgba;

/// Captures group `index` of `pattern` in `text` as a number, if present.
fn capture<T: core::str::FromStr>(pattern: &regex::Regex, text: &str, index: usize) -> Option<T> {
    pattern.captures(text)?.get(index)?.as_str().parse().ok()
}
