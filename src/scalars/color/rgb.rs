use core::fmt::{self, Display};
use core::str::FromStr;

use super::capture;
use crate::{ErrorProne, Scalar, ScalarError};

fn rgb_pattern() -> &'static regex::Regex {
    static_regex!(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
}

const CHANNELS: [&str; 3] = ["red", "green", "blue"];

/// An opaque colour written as `rgb(r, g, b)` with byte channels.
///
/// Every out-of-range channel is reported separately:
///
/// ```
/// use scalar_rail::scalars::Rgb;
/// use scalar_rail::Scalar;
///
/// let rejected = Rgb::inspect("rgb(300, 20, 999)".into());
/// let rules: Vec<_> = rejected.errors().iter().map(|e| e.rule()).collect();
/// assert_eq!(
///     rules,
///     ["red channel must be between 0 and 255", "blue channel must be between 0 and 255"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
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

    /// The channels as `(red, green, blue)`.
    #[inline]
    pub fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl Scalar for Rgb {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(rgb: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let pattern = rgb_pattern();
        let shape = ScalarError::new::<Self>("must be in the format 'rgb(r, g, b)'", &rgb);
        let mut prone = ErrorProne::from_value(rgb).matches(pattern, shape);

        for (index, name) in CHANNELS.iter().enumerate() {
            let range = ScalarError::new::<Self>(
                format!("{name} channel must be between 0 and 255"),
                prone.subject(),
            );
            // Malformed input is already reported by the format rule.
            prone = prone.inspect(
                |text| capture::<u16>(pattern, text, index + 1).map_or(true, |c| c <= 255),
                range,
            );
        }

        prone.try_map_value(|text| {
            match (capture(pattern, &text, 1), capture(pattern, &text, 2), capture(pattern, &text, 3)) {
                (Some(red), Some(green), Some(blue)) => Ok(Rgb { red, green, blue }),
                _ => Err(ScalarError::new::<Self>("must be in the format 'rgb(r, g, b)'", &text)),
            }
        })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ScalarError;

    fn try_from(rgb: String) -> Result<Self, Self::Error> {
        Self::construct(rgb)
    }
}
