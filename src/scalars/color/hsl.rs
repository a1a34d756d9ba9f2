use core::fmt::{self, Display};
use core::str::FromStr;

use super::{capture, Rgb};
use crate::{ErrorProne, Scalar, ScalarError};

fn hsl_pattern() -> &'static regex::Regex {
    static_regex!(r"^hsl\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$")
}

/// A colour written as `hsl(h, s%, l%)`.
///
/// Hue is in degrees (`0 <= h < 360`); saturation and lightness are percentages
/// (`0..=100`).
///
/// ```
/// use scalar_rail::scalars::{Hsl, Rgb};
/// use scalar_rail::Scalar;
///
/// let green = Hsl::construct("hsl(120, 100%, 25%)".into()).unwrap();
/// assert_eq!(Rgb::from(green).render(), "rgb(0, 128, 0)");
///
/// assert!(Hsl::construct("hsl(360, 50%, 50%)".into()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    /// Unchecked; callers have already validated each component.
    pub(super) fn from_components(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }

    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[inline]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }
}

impl Scalar for Hsl {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(hsl: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let pattern = hsl_pattern();
        let rule = |rule: &'static str| ScalarError::new::<Self>(rule, &hsl);
        let shape = rule("must be in the format 'hsl(h, s%, l%)'");
        let hue = rule("hue must be at least 0 and less than 360");
        let saturation = rule("saturation must be between 0% and 100%");
        let lightness = rule("lightness must be between 0% and 100%");

        // Component rules pass on malformed input; the format rule reports it.
        let component = |text: &str, index: usize, admits: fn(f64) -> bool| {
            capture::<f64>(pattern, text, index).map_or(true, admits)
        };

        ErrorProne::from_value(hsl)
            .matches(pattern, shape)
            .inspect(|text| component(text.as_str(), 1, |h| h < 360.0), hue)
            .inspect(|text| component(text.as_str(), 2, |s| s <= 100.0), saturation)
            .inspect(|text| component(text.as_str(), 3, |l| l <= 100.0), lightness)
            .try_map_value(|text| {
                match (capture(pattern, &text, 1), capture(pattern, &text, 2), capture(pattern, &text, 3)) {
                    (Some(hue), Some(saturation), Some(lightness)) => {
                        Ok(Hsl { hue, saturation, lightness })
                    },
                    _ => Err(ScalarError::new::<Self>("must be in the format 'hsl(h, s%, l%)'", &text)),
                }
            })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.channels();
        let (r, g, b) = (f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl { hue: 0.0, saturation: 0.0, lightness: percent(lightness) };
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut hue = sector * 60.0;
        if hue >= 360.0 {
            hue -= 360.0;
        }

        Hsl { hue, saturation: percent(saturation), lightness: percent(lightness) }
    }
}

/// Scales a unit fraction to a percentage, clamped to `0..=100` and rounded
/// to ten decimal places so the rendering parses back.
fn percent(unit: f64) -> f64 {
    (unit.clamp(0.0, 1.0) * 1e12).round() / 1e10
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let saturation = hsl.saturation / 100.0;
        let lightness = hsl.lightness / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hsl.hue / 60.0;
        let secondary = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let offset = lightness - chroma / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        let channel = |c: f64| ((c + offset) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::from((channel(r), channel(g), channel(b)))
    }
}

impl FromStr for Hsl {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for Hsl {
    type Error = ScalarError;

    fn try_from(hsl: String) -> Result<Self, Self::Error> {
        Self::construct(hsl)
    }
}
