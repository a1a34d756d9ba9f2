use core::fmt::{self, Display};
use core::str::FromStr;

use crate::{Boundary, ErrorProne, Scalar, ScalarError};

/// A proportion stored as a fraction between `0.0` and `1.0` inclusive.
///
/// Displays as a percentage and parses from one:
///
/// ```
/// use scalar_rail::scalars::Percentage;
/// use scalar_rail::Scalar;
///
/// let half: Percentage = "50 %".parse().unwrap();
/// assert_eq!(half.render(), 0.5);
/// assert_eq!(half.to_string(), "50 %");
///
/// assert!(Percentage::construct(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// The fraction, between `0.0` and `1.0`.
    #[inline]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Applies the percentage to `amount`.
    #[inline]
    pub fn of(self, amount: f64) -> f64 {
        amount * self.0
    }
}

impl Scalar for Percentage {
    type Primitive = f64;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(fraction: f64, _: &()) -> ErrorProne<Self, ScalarError> {
        let range = ScalarError::new::<Self>("must be between 0.0 and 1.0", &fraction);

        ErrorProne::from_value(fraction)
            .between(0.0, 1.0, Boundary::Inclusive, Boundary::Inclusive, range)
            .map_value(Percentage)
    }

    fn render(&self) -> f64 {
        self.0
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Ten decimal places hide binary noise such as 0.07 * 100.
        let percent = (self.0 * 1e12).round() / 1e10;
        write!(f, "{percent} %")
    }
}

/// Parses `"42 %"`, `"42%"` or `"42"` as 42 percent.
impl FromStr for Percentage {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.trim().trim_end_matches('%').trim_end();
        match number.parse::<f64>() {
            Ok(percent) => Self::construct(percent / 100.0),
            Err(_) => Err(ScalarError::new::<Self>("must be a number followed by '%'", &s)),
        }
    }
}

impl TryFrom<f64> for Percentage {
    type Error = ScalarError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Self::construct(fraction)
    }
}

/// An angle in degrees, normalised into `0.0..360.0`.
///
/// Negative angles are rejected; angles of a full turn or more wrap around.
///
/// ```
/// use scalar_rail::scalars::Degree;
/// use scalar_rail::Scalar;
///
/// assert_eq!(Degree::construct(400.0).unwrap().render(), 40.0);
/// assert!(Degree::construct(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Degree(f64);

impl Degree {
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl Scalar for Degree {
    type Primitive = f64;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(degrees: f64, _: &()) -> ErrorProne<Self, ScalarError> {
        let finite = ScalarError::new::<Self>("must be a finite number", &degrees);
        let negative = ScalarError::new::<Self>("must not be negative", &degrees);

        ErrorProne::from_value(degrees)
            .inspect(|d| d.is_finite(), finite)
            .greater_than(0.0, Boundary::Inclusive, negative)
            .map_value(|d| Degree(d % 360.0))
    }

    fn render(&self) -> f64 {
        self.0
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Parses `"90°"`, `"90 °"` or `"90"`.
impl FromStr for Degree {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.trim().trim_end_matches('°').trim_end();
        match number.parse::<f64>() {
            Ok(degrees) => Self::construct(degrees),
            Err(_) => Err(ScalarError::new::<Self>("must be a number followed by '°'", &s)),
        }
    }
}

impl TryFrom<f64> for Degree {
    type Error = ScalarError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::construct(degrees)
    }
}
