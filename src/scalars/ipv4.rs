use core::fmt::{self, Display};
use core::str::FromStr;
use std::net::Ipv4Addr;

use crate::{ErrorProne, Scalar, ScalarError};

fn ipv4_pattern() -> &'static regex::Regex {
    static_regex!(
        r"^(?:(?:0{0,2}[0-9]|0?[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}(?:0{0,2}[0-9]|0?[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])(?:/(?:[0-9]|[12][0-9]|3[0-2]))?$"
    )
}

/// An IPv4 address with an optional CIDR prefix length.
///
/// Octets may carry leading zeros on input (`010.000.000.001`); the rendered
/// form never does.
///
/// ```
/// use scalar_rail::scalars::Ipv4;
/// use scalar_rail::Scalar;
///
/// let network = Ipv4::construct("192.168.001.000/24".into()).unwrap();
/// assert_eq!(network.prefix(), Some(24));
/// assert_eq!(network.render(), "192.168.1.0/24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4 {
    octets: [u8; 4],
    prefix: Option<u8>,
}

impl Ipv4 {
    #[inline]
    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// The CIDR prefix length, if one was given.
    #[inline]
    pub fn prefix(&self) -> Option<u8> {
        self.prefix
    }

    #[inline]
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }

    fn parse_checked(text: &str) -> Option<Self> {
        let (address, prefix) = match text.split_once('/') {
            Some((address, prefix)) => (address, Some(prefix.parse::<u8>().ok()?)),
            None => (text, None),
        };
        let mut octets = [0u8; 4];
        let mut parts = address.split('.');
        for octet in &mut octets {
            *octet = parts.next()?.parse().ok()?;
        }
        Some(Self { octets, prefix })
    }
}

impl Scalar for Ipv4 {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(address: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let shape = ScalarError::new::<Self>(
            "must be a dotted-quad address with an optional /0-32 prefix",
            &address,
        );

        ErrorProne::from_value(address)
            .matches(ipv4_pattern(), shape)
            .try_map_value(|address| {
                Self::parse_checked(&address).ok_or_else(|| {
                    ScalarError::new::<Self>("must contain four octets between 0 and 255", &address)
                })
            })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")?;
        if let Some(prefix) = self.prefix {
            write!(f, "/{prefix}")?;
        }
        Ok(())
    }
}

impl From<Ipv4Addr> for Ipv4 {
    fn from(addr: Ipv4Addr) -> Self {
        Self { octets: addr.octets(), prefix: None }
    }
}

impl FromStr for Ipv4 {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for Ipv4 {
    type Error = ScalarError;

    fn try_from(address: String) -> Result<Self, Self::Error> {
        Self::construct(address)
    }
}
