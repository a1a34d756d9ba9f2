use core::fmt::{self, Display};
use core::str::FromStr;

use crate::{Boundary, ErrorProne, Scalar, ScalarError};

const MAX_LOCAL_PART: usize = 64;
const MAX_ADDRESS: usize = 254;

fn address_pattern() -> &'static regex::Regex {
    static_regex!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"
    )
}

/// A mailbox address split into its local part and domain.
///
/// # Examples
///
/// ```
/// use scalar_rail::scalars::EmailAddress;
/// use scalar_rail::Scalar;
///
/// let email = EmailAddress::construct("ada@example.com".into()).unwrap();
/// assert_eq!(email.local_part(), "ada");
/// assert_eq!(email.domain(), "example.com");
///
/// let rejected = EmailAddress::inspect("@@".into());
/// assert!(rejected.errors().len() > 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress {
    address: String,
    at: usize,
}

impl EmailAddress {
    /// Everything before the `@`.
    #[inline]
    pub fn local_part(&self) -> &str {
        &self.address[..self.at]
    }

    /// Everything after the `@`.
    #[inline]
    pub fn domain(&self) -> &str {
        &self.address[self.at + 1..]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl Scalar for EmailAddress {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = ();

    fn inspect_with(address: String, _: &()) -> ErrorProne<Self, ScalarError> {
        let rule = |rule: &'static str| ScalarError::new::<Self>(rule, &address);
        let empty = rule("must not be empty");
        let single_at = rule("must contain exactly one '@'");
        let local_length = rule("local part must be between 1 and 64 characters long");
        let too_long = rule("must be at most 254 characters long");
        let shape = rule("must look like name@example.com");

        ErrorProne::from_value(address)
            .not_empty(empty)
            .inspect(|text| text.matches('@').count() == 1, single_at)
            .inspect(
                |text| {
                    // Only judged when there is an '@' to split on.
                    text.split_once('@').map_or(true, |(local, _)| {
                        (1..=MAX_LOCAL_PART).contains(&local.chars().count())
                    })
                },
                local_length,
            )
            .max_length(MAX_ADDRESS, Boundary::Inclusive, too_long)
            .matches(address_pattern(), shape)
            .try_map_value(|address| match address.find('@') {
                Some(at) => Ok(EmailAddress { address, at }),
                None => Err(ScalarError::new::<Self>("must contain exactly one '@'", &address)),
            })
    }

    fn render(&self) -> String {
        self.address.clone()
    }
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for EmailAddress {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ScalarError;

    fn try_from(address: String) -> Result<Self, Self::Error> {
        Self::construct(address)
    }
}
