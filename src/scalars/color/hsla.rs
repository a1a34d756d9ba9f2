use core::fmt::{self, Display};
use core::str::FromStr;

use super::{capture, Hsl, Rgb, Rgba};
use crate::{ErrorProne, Scalar, ScalarError};

fn hsla_pattern() -> &'static regex::Regex {
    static_regex!(
        r"^hsla\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d{1,3})\s*\)$"
    )
}

/// An [`Hsl`] colour with a byte alpha channel, written `hsla(h, s%, l%, a)`.
///
/// ```
/// use scalar_rail::scalars::{Hsla, Rgba};
/// use scalar_rail::Scalar;
///
/// let glass = Hsla::construct("hsla(240, 100%, 50%, 64)".into()).unwrap();
/// assert_eq!(Rgba::from(glass).render(), "rgba(0, 0, 255, 64)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Hsla {
    color: Hsl,
    alpha: u8,
}

impl Hsla {
    #[inline]
    pub fn hue(&self) -> f64 {
        self.color.hue()
    }

    #[inline]
    pub fn saturation(&self) -> f64 {
        self.color.saturation()
    }

    #[inline]
    pub fn lightness(&self) -> f64 {
        self.color.lightness()
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The colour without its alpha channel.
    #[inline]
    pub fn color(&self) -> Hsl {
        self.color
    }

    /// Pairs `color` with an alpha channel.
    #[inline]
    pub fn with_alpha(color: Hsl, alpha: u8) -> Self {
        Self { color, alpha }
    }
}

impl Scalar for Hsla {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(hsla: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let pattern = hsla_pattern();
        let rule = |rule: &'static str| ScalarError::new::<Self>(rule, &hsla);
        let shape = rule("must be in the format 'hsla(h, s%, l%, a)'");
        let hue = rule("hue must be at least 0 and less than 360");
        let saturation = rule("saturation must be between 0% and 100%");
        let lightness = rule("lightness must be between 0% and 100%");
        let alpha = rule("alpha channel must be between 0 and 255");

        let component = |text: &str, index: usize, admits: fn(f64) -> bool| {
            capture::<f64>(pattern, text, index).map_or(true, admits)
        };

        ErrorProne::from_value(hsla)
            .matches(pattern, shape)
            .inspect(|text| component(text.as_str(), 1, |h| h < 360.0), hue)
            .inspect(|text| component(text.as_str(), 2, |s| s <= 100.0), saturation)
            .inspect(|text| component(text.as_str(), 3, |l| l <= 100.0), lightness)
            .inspect(|text| component(text.as_str(), 4, |a| a <= 255.0), alpha)
            .try_map_value(|text| {
                let number = |index| capture::<f64>(pattern, &text, index);
                match (number(1), number(2), number(3), capture::<u8>(pattern, &text, 4)) {
                    (Some(hue), Some(saturation), Some(lightness), Some(alpha)) => Ok(Hsla {
                        color: Hsl::from_components(hue, saturation, lightness),
                        alpha,
                    }),
                    _ => Err(ScalarError::new::<Self>(
                        "must be in the format 'hsla(h, s%, l%, a)'",
                        &text,
                    )),
                }
            })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Hsla { color, alpha } = self;
        write!(
            f,
            "hsla({}, {}%, {}%, {alpha})",
            color.hue(),
            color.saturation(),
            color.lightness()
        )
    }
}

/// Fully opaque.
impl From<Hsl> for Hsla {
    fn from(color: Hsl) -> Self {
        Self { color, alpha: u8::MAX }
    }
}

/// Drops the alpha channel.
impl From<Hsla> for Hsl {
    fn from(hsla: Hsla) -> Self {
        hsla.color
    }
}

impl From<Rgba> for Hsla {
    fn from(rgba: Rgba) -> Self {
        Self { color: Hsl::from(rgba.color()), alpha: rgba.alpha() }
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        Rgba::with_alpha(Rgb::from(hsla.color), hsla.alpha)
    }
}

impl FromStr for Hsla {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for Hsla {
    type Error = ScalarError;

    fn try_from(hsla: String) -> Result<Self, Self::Error> {
        Self::construct(hsla)
    }
}
