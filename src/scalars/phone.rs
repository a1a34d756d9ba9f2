use core::fmt::{self, Display};
use core::str::FromStr;

use crate::{ErrorProne, Scalar, ScalarError};

fn phone_pattern() -> &'static regex::Regex {
    static_regex!(r"^(\+\d{1,3}\s?)?1?\-?\.?\s?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$")
}

/// Layouts a [`PhoneNumber`] can be written in.
///
/// Each variant parses from its short code, so a format can come from
/// configuration: `"E164"`, `"L"`, `"D"`, `"I"` or `"E"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneFormat {
    /// `+15551234567`
    #[default]
    E164,
    /// `1234567`
    Local,
    /// `(555) 123-4567`
    Domestic,
    /// `+1-555-123-4567`
    International,
    /// `+1 (555) 123-4567`
    Extended,
}

impl FromStr for PhoneFormat {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E164" => Ok(Self::E164),
            "L" => Ok(Self::Local),
            "D" => Ok(Self::Domestic),
            "I" => Ok(Self::International),
            "E" => Ok(Self::Extended),
            _ => Err(ScalarError::new::<Self>("must be one of E164, L, D, I or E", &s)),
        }
    }
}

/// A North American style phone number with an optional country code.
///
/// Separators, brackets and spaces are accepted on input and discarded. The
/// last ten digits split into area code, exchange code and line number; any
/// digits before them form the country code, which defaults to `1`. The
/// canonical form is E.164.
///
/// ```
/// use scalar_rail::scalars::{PhoneFormat, PhoneNumber};
/// use scalar_rail::Scalar;
///
/// let phone = PhoneNumber::construct("(555) 123-4567".into()).unwrap();
/// assert_eq!(phone.render(), "+15551234567");
/// assert_eq!(phone.format(PhoneFormat::Extended), "+1 (555) 123-4567");
///
/// assert!(PhoneNumber::construct("555-1234".into()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber {
    country: String,
    area: String,
    exchange: String,
    line: String,
}

impl PhoneNumber {
    #[inline]
    pub fn country_code(&self) -> &str {
        &self.country
    }

    #[inline]
    pub fn area_code(&self) -> &str {
        &self.area
    }

    #[inline]
    pub fn exchange_code(&self) -> &str {
        &self.exchange
    }

    #[inline]
    pub fn line_number(&self) -> &str {
        &self.line
    }

    /// Writes the number in the given layout.
    pub fn format(&self, format: PhoneFormat) -> String {
        let Self { country, area, exchange, line } = self;
        match format {
            PhoneFormat::E164 => format!("+{country}{area}{exchange}{line}"),
            PhoneFormat::Local => format!("{exchange}{line}"),
            PhoneFormat::Domestic => format!("({area}) {exchange}-{line}"),
            PhoneFormat::International => format!("+{country}-{area}-{exchange}-{line}"),
            PhoneFormat::Extended => format!("+{country} ({area}) {exchange}-{line}"),
        }
    }

    fn split(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let (country, rest) = digits.split_at(digits.len().checked_sub(10)?);
        let (area, rest) = rest.split_at(3);
        let (exchange, line) = rest.split_at(3);

        Some(Self {
            country: if country.is_empty() { String::from("1") } else { country.to_owned() },
            area: area.to_owned(),
            exchange: exchange.to_owned(),
            line: line.to_owned(),
        })
    }
}

impl Scalar for PhoneNumber {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(number: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let shape =
            ScalarError::new::<Self>("must look like +1 (555) 123-4567 or 555-123-4567", &number);

        ErrorProne::from_value(number)
            .matches(phone_pattern(), shape)
            .try_map_value(|number| {
                Self::split(&number).ok_or_else(|| {
                    ScalarError::new::<Self>("must contain at least ten digits", &number)
                })
            })
    }

    fn render(&self) -> String {
        self.format(PhoneFormat::E164)
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(PhoneFormat::E164))
    }
}

impl FromStr for PhoneNumber {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ScalarError;

    fn try_from(number: String) -> Result<Self, Self::Error> {
        Self::construct(number)
    }
}
