use core::fmt::{self, Display};
use core::str::FromStr;

use super::{Rgb, Rgba};
use crate::{ErrorProne, Scalar, ScalarError};

fn hex_pattern() -> &'static regex::Regex {
    static_regex!(r"^#?(?:[0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
}

/// A colour written as `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
///
/// Shorthand digits are doubled (`#f80` is `#FF8800FF`) and a missing alpha
/// channel means fully opaque. The canonical form is upper-case with all four
/// channels.
///
/// ```
/// use scalar_rail::scalars::{HexColorCode, Rgb};
/// use scalar_rail::Scalar;
///
/// let orange = HexColorCode::construct("#f80".into()).unwrap();
/// assert_eq!(orange.render(), "#FF8800FF");
/// assert_eq!(Rgb::from(orange).render(), "rgb(255, 136, 0)");
/// assert_eq!(format!("{orange:x}"), "ff8800ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColorCode {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl HexColorCode {
    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Decodes the digits after `#`; `None` unless there are 3, 4, 6 or 8 of them.
    fn decode(digits: &str) -> Option<Self> {
        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()?;

        let channels: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
            6 | 8 => nibbles.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            _ => return None,
        };

        Some(Self {
            red: channels[0],
            green: channels[1],
            blue: channels[2],
            alpha: channels.get(3).copied().unwrap_or(u8::MAX),
        })
    }
}

impl Scalar for HexColorCode {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(code: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let hash = ScalarError::new::<Self>("must start with '#'", &code);
        let digits = ScalarError::new::<Self>("must have 3, 4, 6 or 8 hexadecimal digits", &code);

        ErrorProne::from_value(code)
            .inspect(|text| text.starts_with('#'), hash)
            .matches(hex_pattern(), digits)
            .try_map_value(|code| {
                Self::decode(code.trim_start_matches('#')).ok_or_else(|| {
                    ScalarError::new::<Self>("must have 3, 4, 6 or 8 hexadecimal digits", &code)
                })
            })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for HexColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{self:X}")
    }
}

impl fmt::UpperHex for HexColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}{:02X}", self.red, self.green, self.blue, self.alpha)
    }
}

impl fmt::LowerHex for HexColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.red, self.green, self.blue, self.alpha)
    }
}

impl From<Rgb> for HexColorCode {
    fn from(rgb: Rgb) -> Self {
        let (red, green, blue) = rgb.channels();
        Self { red, green, blue, alpha: u8::MAX }
    }
}

/// Drops the alpha channel.
impl From<HexColorCode> for Rgb {
    fn from(hex: HexColorCode) -> Self {
        Rgb::from((hex.red, hex.green, hex.blue))
    }
}

impl From<Rgba> for HexColorCode {
    fn from(rgba: Rgba) -> Self {
        let (red, green, blue, alpha) = rgba.channels();
        Self { red, green, blue, alpha }
    }
}

impl From<HexColorCode> for Rgba {
    fn from(hex: HexColorCode) -> Self {
        Rgba::from((hex.red, hex.green, hex.blue, hex.alpha))
    }
}

impl FromStr for HexColorCode {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for HexColorCode {
    type Error = ScalarError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::construct(code)
    }
}
