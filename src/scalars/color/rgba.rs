use core::fmt::{self, Display};
use core::str::FromStr;

use super::{capture, Rgb};
use crate::{ErrorProne, Scalar, ScalarError};

fn rgba_pattern() -> &'static regex::Regex {
    static_regex!(r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
}

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// A colour written as `rgba(r, g, b, a)`, all four channels bytes.
///
/// ```
/// use scalar_rail::scalars::{HexColorCode, Rgba};
/// use scalar_rail::Scalar;
///
/// let veil = Rgba::construct("rgba(0, 0, 0, 128)".into()).unwrap();
/// assert_eq!(HexColorCode::from(veil).render(), "#00000080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    color: Rgb,
    alpha: u8,
}

impl Rgba {
    #[inline]
    pub fn red(&self) -> u8 {
        self.color.red()
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.color.green()
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.color.blue()
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The channels as `(red, green, blue, alpha)`.
    #[inline]
    pub fn channels(&self) -> (u8, u8, u8, u8) {
        let (red, green, blue) = self.color.channels();
        (red, green, blue, self.alpha)
    }

    /// The colour without its alpha channel.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Pairs `color` with an alpha channel.
    #[inline]
    pub fn with_alpha(color: Rgb, alpha: u8) -> Self {
        Self { color, alpha }
    }
}

impl Scalar for Rgba {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(rgba: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let pattern = rgba_pattern();
        let shape = ScalarError::new::<Self>("must be in the format 'rgba(r, g, b, a)'", &rgba);
        let mut prone = ErrorProne::from_value(rgba).matches(pattern, shape);

        for (index, name) in CHANNELS.iter().enumerate() {
            let range = ScalarError::new::<Self>(
                format!("{name} channel must be between 0 and 255"),
                prone.subject(),
            );
            prone = prone.inspect(
                |text| capture::<u16>(pattern, text, index + 1).map_or(true, |c| c <= 255),
                range,
            );
        }

        prone.try_map_value(|text| {
            let channel = |index| capture::<u8>(pattern, &text, index);
            match (channel(1), channel(2), channel(3), channel(4)) {
                (Some(red), Some(green), Some(blue), Some(alpha)) => {
                    Ok(Rgba::from((red, green, blue, alpha)))
                },
                _ => Err(ScalarError::new::<Self>(
                    "must be in the format 'rgba(r, g, b, a)'",
                    &text,
                )),
            }
        })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self { color: Rgb::from((red, green, blue)), alpha }
    }
}

/// Fully opaque.
impl From<Rgb> for Rgba {
    fn from(color: Rgb) -> Self {
        Self { color, alpha: u8::MAX }
    }
}

/// Drops the alpha channel.
impl From<Rgba> for Rgb {
    fn from(rgba: Rgba) -> Self {
        rgba.color
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue, alpha) = self.channels();
        write!(f, "rgba({red}, {green}, {blue}, {alpha})")
    }
}

impl FromStr for Rgba {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for Rgba {
    type Error = ScalarError;

    fn try_from(rgba: String) -> Result<Self, Self::Error> {
        Self::construct(rgba)
    }
}
