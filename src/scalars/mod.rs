//! Ready-made scalars built on the [`Scalar`](crate::Scalar) contract.
//!
//! Each one validates its primitive with [`ErrorProne`](crate::ErrorProne)
//! and the [combinators](crate::combinators), reports [`ScalarError`]s, and
//! renders back to a primitive that constructs an equal value.
//!
//! | Scalar | Primitive | Canonical form |
//! |--------|-----------|----------------|
//! | [`Username`] | `String` | as given |
//! | [`EmailAddress`] | `String` | `local@domain` |
//! | [`Percentage`] | `f64` | fraction in `0.0..=1.0` |
//! | [`Degree`] | `f64` | angle in `0.0..360.0` |
//! | [`Ipv4`] | `String` | `a.b.c.d` or `a.b.c.d/prefix` |
//! | [`PhoneNumber`] | `String` | E.164, `+15551234567` |
//! | [`HexColorCode`] | `String` | `#RRGGBBAA` |
//! | [`Rgb`] | `String` | `rgb(r, g, b)` |
//! | [`Rgba`] | `String` | `rgba(r, g, b, a)` |
//! | [`Hsl`] | `String` | `hsl(h, s%, l%)` |
//! | [`Hsla`] | `String` | `hsla(h, s%, l%, a)` |
//!
//! # Examples
//!
//! ```
//! use scalar_rail::scalars::{Rgb, Hsl};
//! use scalar_rail::Scalar;
//!
//! let red = Rgb::construct("rgb(255, 0, 0)".into()).unwrap();
//! let hsl = Hsl::from(red);
//! assert_eq!(hsl.render(), "hsl(0, 100%, 50%)");
//! ```
//!
//! [`ScalarError`]: crate::ScalarError

/// Compiles `pattern` once and hands out the shared [`regex::Regex`].
macro_rules! static_regex {
    ($pattern:expr) => {{
        static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        PATTERN.get_or_init(|| regex::Regex::new($pattern).expect("built-in scalar pattern is valid"))
    }};
}

mod color;
mod email;
mod ipv4;
mod numeric;
mod phone;
mod username;

pub use color::{HexColorCode, Hsl, Hsla, Rgb, Rgba};
pub use email::EmailAddress;
pub use ipv4::Ipv4;
pub use numeric::{Degree, Percentage};
pub use phone::{PhoneFormat, PhoneNumber};
pub use username::{Username, UsernameCriteria};

#[cfg(feature = "serde")]
crate::impl_scalar_serde!(
    Username,
    EmailAddress,
    Percentage,
    Degree,
    Ipv4,
    PhoneNumber,
    HexColorCode,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
);
